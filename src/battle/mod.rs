//! Battle simulation.
//!
//! ## Key Types
//!
//! - `Combatant`: hp, mana, element and active effects of one side
//! - `Phase`: idle → player turn ⇄ enemy turn → victory | defeat
//! - `BattleController`: owns both sides and runs the turn loop
//! - `BattleEvent` / `BattleObserver`: state change notifications
//! - `BattleSnapshot`: serializable read-only view
//! - `AutoPilot`: plays the player's side without input
//!
//! ## Turn order
//!
//! 1. The active combatant's status effects resolve (damage, then healing,
//!    then decay). Dying here ends the battle before it acts.
//! 2. The player regains mana and draws (five on turn one, one after).
//!    A frozen or stunned combatant skips the rest of its turn.
//! 3. The player plays cards until it ends the turn; the enemy draws one
//!    card and plays one card chosen by its `AdversaryPolicy`.
//!
//! Everything runs synchronously; pacing for display is left to observers.

pub mod autoplay;
pub mod combatant;
pub mod controller;
pub mod event;
pub mod phase;
pub mod snapshot;

pub use autoplay::AutoPilot;
pub use combatant::{Combatant, Side};
pub use controller::{BattleController, BattleOutcome, PlayOutcome};
pub use event::{BattleEvent, BattleObserver, BattleResult};
pub use phase::Phase;
pub use snapshot::BattleSnapshot;
