//! Adversary decision making.
//!
//! - `AiBehavior`: aggressive / defensive / magical / balanced profiles
//! - `EnemyTier`: normal / elite / boss, with action counts and boss specials
//! - `AdversaryPolicy`: card selection trait, `HeuristicPolicy` by default
//!
//! The per-turn loop plays one selected card. `EnemyTier::actions_per_turn`
//! and `special_ability_ready` are available to callers that extend turns to
//! multiple actions.

mod behavior;
mod policy;

pub use behavior::{AiBehavior, EnemyTier, BOSS_SPECIAL_INTERVAL, ELITE_EXTRA_ACTION_CHANCE};
pub use policy::{
    AdversaryPolicy, DecisionContext, FirstCardPolicy, HeuristicPolicy, BALANCED_DEFEND_WEIGHT,
    DEFENSIVE_HP_THRESHOLD,
};
