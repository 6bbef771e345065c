//! Static data provider.
//!
//! Card definitions, enemy definitions and the affinity table, bundled in
//! `GameData`. Data is validated when it is assembled, so a battle never
//! discovers a missing card id mid-turn.

mod catalog;
mod enemies;
mod provider;

pub use catalog::starter_deck;
pub use enemies::{EncounterTable, EnemyDefinition, EnemyId, EnemyRegistry};
pub use provider::GameData;
