//! Battle events and observers.
//!
//! Every state change the presentation layer cares about is emitted as a
//! `BattleEvent`. The controller keeps them in order until drained, and
//! forwards each one to an optional `BattleObserver` as it happens.

use serde::{Deserialize, Serialize};

use super::combatant::Side;
use super::phase::Phase;
use crate::cards::CardId;
use crate::core::InstanceId;
use crate::effects::{Application, EffectKind, InstantOutcome, TurnResolution};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleResult {
    Victory,
    Defeat,
}

impl BattleResult {
    /// The terminal phase for this result.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::Victory => Phase::Victory,
            Self::Defeat => Phase::Defeat,
        }
    }
}

/// A discrete battle state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        enemy: String,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    TurnStarted {
        side: Side,
        turn: u32,
    },
    /// Start-of-turn status resolution on the active combatant.
    EffectsResolved {
        side: Side,
        resolution: TurnResolution,
    },
    CardDrawn {
        side: Side,
        instance: InstanceId,
        card: CardId,
    },
    CardPlayed {
        side: Side,
        instance: InstanceId,
        card: CardId,
        /// hp the target actually lost.
        damage: i32,
        /// Damage soaked by the target's shield.
        absorbed: i32,
    },
    /// A persistent effect was stored or merged on `target`.
    EffectApplied {
        target: Side,
        kind: EffectKind,
        application: Application,
    },
    InstantResolved {
        target: Side,
        kind: EffectKind,
        outcome: InstantOutcome,
    },
    CardDiscarded {
        side: Side,
        instance: InstanceId,
        card: CardId,
    },
    ManaChanged {
        side: Side,
        mana: i32,
        max_mana: i32,
    },
    BattleEnded {
        result: BattleResult,
        turns: u32,
    },
}

/// Receives battle events as they are emitted.
///
/// Any `FnMut(&BattleEvent)` closure is an observer.
pub trait BattleObserver {
    fn on_event(&mut self, event: &BattleEvent);
}

impl<F> BattleObserver for F
where
    F: FnMut(&BattleEvent),
{
    fn on_event(&mut self, event: &BattleEvent) {
        self(event);
    }
}
