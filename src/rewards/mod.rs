//! Rewards and progression.
//!
//! - `RewardResolver`: xp, gold and bonus card rolls on victory
//! - `PlayerProgress`: the persistent player record rewards are banked into
//!
//! ## Drop table
//!
//! A victory drops a bonus card with `card_drop_chance` (30%). The rarity
//! roll uses cumulative thresholds: legendary below 1, epic below 5, rare
//! below 20, uncommon below 50, common otherwise. An empty rarity tier
//! falls back to the next more common one.

mod progress;
mod resolver;

pub use progress::{
    PlayerProgress, STARTING_HP, STARTING_MANA, STARTING_MANA_PER_TURN, STARTING_MAX_MANA, STARTING_XP_TO_NEXT,
};
pub use resolver::{rarity_for_roll, RewardResolver, Rewards};
