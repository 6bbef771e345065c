//! Effect definitions.
//!
//! `Effect` is a closed set of status kinds, each carrying its own payload.
//! `EffectSpec` wraps an effect with the timing rules a card declares for
//! it, and `ActiveEffect` is the stored form on a combatant.

use serde::{Deserialize, Serialize};

/// A status effect and its payload.
///
/// Serialized with an inline `type` tag:
///
/// ```
/// use deckbattle::effects::Effect;
///
/// let effect: Effect = serde_json::from_str(r#"{ "type": "poison", "damage": 3 }"#).unwrap();
/// assert_eq!(effect, Effect::Poison { damage: 3 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Effect {
    /// Damage at the start of each affected turn.
    Burn { damage: i32 },
    /// Damage at the start of each affected turn; grows after each tick.
    Poison { damage: i32 },
    /// Skips the affected combatant's action.
    Frozen,
    /// Skips the affected combatant's action.
    Stunned,
    /// Multiplies outgoing card damage.
    Strengthened { multiplier: f64 },
    /// Multiplies outgoing card damage (expected below 1).
    Weakened { multiplier: f64 },
    /// Healing at the start of each turn, or immediately when instant.
    Regeneration { amount: i32 },
    /// Absorbs incoming card damage.
    Shield { amount: i32 },
    /// Draw cards (instant).
    Draw { count: u32 },
    /// Force discards (instant).
    Discard { count: u32 },
    /// Restore mana (instant).
    Mana { amount: i32 },
}

/// Payload-free discriminant of `Effect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Burn,
    Poison,
    Frozen,
    Stunned,
    Strengthened,
    Weakened,
    Regeneration,
    Shield,
    Draw,
    Discard,
    Mana,
}

impl EffectKind {
    /// Control kinds: frozen, stunned, weakened.
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(self, Self::Frozen | Self::Stunned | Self::Weakened)
    }

    /// Damage-over-time kinds.
    #[must_use]
    pub const fn is_damage_over_time(self) -> bool {
        matches!(self, Self::Burn | Self::Poison)
    }

    /// Kinds a caster aims at its opponent. Everything else lands on the caster.
    #[must_use]
    pub const fn targets_opponent(self) -> bool {
        matches!(
            self,
            Self::Burn | Self::Poison | Self::Frozen | Self::Stunned | Self::Weakened | Self::Discard
        )
    }
}

impl Effect {
    /// The payload-free kind of this effect.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Burn { .. } => EffectKind::Burn,
            Self::Poison { .. } => EffectKind::Poison,
            Self::Frozen => EffectKind::Frozen,
            Self::Stunned => EffectKind::Stunned,
            Self::Strengthened { .. } => EffectKind::Strengthened,
            Self::Weakened { .. } => EffectKind::Weakened,
            Self::Regeneration { .. } => EffectKind::Regeneration,
            Self::Shield { .. } => EffectKind::Shield,
            Self::Draw { .. } => EffectKind::Draw,
            Self::Discard { .. } => EffectKind::Discard,
            Self::Mana { .. } => EffectKind::Mana,
        }
    }

    /// Numeric payload as a float, for display and heuristics.
    /// Flag-only effects report 0.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match *self {
            Self::Burn { damage } | Self::Poison { damage } => f64::from(damage),
            Self::Frozen | Self::Stunned => 0.0,
            Self::Strengthened { multiplier } | Self::Weakened { multiplier } => multiplier,
            Self::Regeneration { amount } | Self::Shield { amount } | Self::Mana { amount } => {
                f64::from(amount)
            }
            Self::Draw { count } | Self::Discard { count } => f64::from(count),
        }
    }
}

/// How a card declares an effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectSpec {
    #[serde(flatten)]
    pub effect: Effect,

    /// Turns a persistent effect lasts.
    #[serde(default)]
    pub duration: i32,

    /// Resolve immediately instead of being stored.
    #[serde(default)]
    pub instant: bool,

    /// Only apply if the card's hit reached hp.
    #[serde(default)]
    pub on_hit: bool,

    /// Probability the effect applies at all. `None` means always.
    #[serde(default)]
    pub chance: Option<f64>,
}

impl EffectSpec {
    /// A persistent effect lasting `duration` turns.
    #[must_use]
    pub fn persistent(effect: Effect, duration: i32) -> Self {
        Self {
            effect,
            duration,
            instant: false,
            on_hit: false,
            chance: None,
        }
    }

    /// An effect that resolves on application.
    #[must_use]
    pub fn instant(effect: Effect) -> Self {
        Self {
            effect,
            duration: 0,
            instant: true,
            on_hit: false,
            chance: None,
        }
    }

    /// Require the card's hit to connect.
    #[must_use]
    pub fn on_hit(mut self) -> Self {
        self.on_hit = true;
        self
    }

    /// Gate the effect behind a probability roll.
    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        self.effect.kind()
    }
}

/// A persistent effect stored on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub effect: Effect,
    pub duration: i32,
}

impl ActiveEffect {
    #[must_use]
    pub fn new(effect: Effect, duration: i32) -> Self {
        Self { effect, duration }
    }

    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    /// Fold a second application of the same kind into this one.
    ///
    /// Duration becomes the longer of the two. Burn and poison sum their
    /// damage; every other kind keeps its current payload.
    pub fn merge(&mut self, incoming: &Effect, duration: i32) {
        debug_assert_eq!(self.kind(), incoming.kind());

        self.duration = self.duration.max(duration);
        match (&mut self.effect, incoming) {
            (Effect::Burn { damage }, Effect::Burn { damage: more })
            | (Effect::Poison { damage }, Effect::Poison { damage: more }) => {
                *damage += more;
            }
            _ => {}
        }
    }
}
