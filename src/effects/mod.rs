//! Status effect system.
//!
//! - `Effect` / `EffectKind`: the closed set of status kinds
//! - `EffectSpec`: how a card declares an effect (duration, instant, chance)
//! - `ActiveEffect`: a persistent effect stored on a combatant
//! - `StatusEngine`: apply, stack, tick and decay effects
//!
//! ## Stacking
//!
//! A combatant holds at most one entry per kind. Reapplying a kind keeps
//! the longer duration; burn and poison also add their damage together.

mod effect;
mod engine;

pub use effect::{ActiveEffect, Effect, EffectKind, EffectSpec};
pub use engine::{Application, InstantOutcome, ShieldResult, StatusEngine, TurnResolution};
