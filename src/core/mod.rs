//! Core engine types: instance ids, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. Nothing
//! here knows about cards, effects or turns.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{InstanceAllocator, InstanceId};
pub use rng::{BattleRng, BattleRngState, RandomSource, ScriptedRng};
pub use config::{BattleConfig, RarityThresholds};
pub use error::{ActionError, BattleError};
