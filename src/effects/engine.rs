//! Status effect resolution.
//!
//! The `StatusEngine` applies, stacks, ticks and decays effects on a
//! `Combatant`. It knows nothing about decks or turn order; anything it
//! cannot resolve by itself (draws, discards, mana) comes back to the
//! caller as an `InstantOutcome`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::effect::{ActiveEffect, Effect, EffectKind, EffectSpec};
use crate::battle::Combatant;

/// Result of resolving an instant effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstantOutcome {
    /// hp restored (after the max hp cap).
    Healed(i32),
    /// hp lost immediately.
    Damaged(i32),
    /// Caller should draw this many cards for the target.
    Draw(u32),
    /// Caller should discard this many cards from the target's hand.
    Discard(u32),
    /// Caller should grant this much mana to the target.
    Mana(i32),
    /// The effect has no instant meaning and was dropped.
    Ignored,
}

/// What happened when an effect was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Application {
    /// A new persistent entry was added.
    Stored,
    /// Folded into an existing entry of the same kind.
    Merged,
    Instant(InstantOutcome),
}

/// Summary of start-of-turn resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResolution {
    /// False if a frozen or stunned effect was active.
    pub can_act: bool,
    /// hp lost to burn and poison.
    pub damage: i32,
    /// hp regained from regeneration.
    pub healing: i32,
}

/// Split of incoming damage between a shield and hp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldResult {
    pub absorbed: i32,
    pub remaining: i32,
}

/// `ceil(value * 1.2)` in integers.
fn grow_poison(value: i32) -> i32 {
    (value * 6 + 4).div_euclid(5)
}

/// Applies and resolves status effects.
pub struct StatusEngine;

impl StatusEngine {
    /// Apply an effect to `target`.
    ///
    /// Instant effects resolve now and are never stored. Draw, discard and
    /// mana are always instant. Persistent effects merge into an existing
    /// entry of the same kind (see [`ActiveEffect::merge`]) or are appended.
    pub fn apply(target: &mut Combatant, spec: &EffectSpec) -> Application {
        let instant = spec.instant
            || matches!(
                spec.kind(),
                EffectKind::Draw | EffectKind::Discard | EffectKind::Mana
            );

        if instant {
            return Application::Instant(Self::resolve_instant(target, &spec.effect));
        }

        if let Some(existing) = target.effects.iter_mut().find(|e| e.kind() == spec.kind()) {
            existing.merge(&spec.effect, spec.duration);
            debug!("{}: merged {:?} -> {:?}", target.name, spec.kind(), existing);
            return Application::Merged;
        }

        target.effects.push(ActiveEffect::new(spec.effect, spec.duration));
        debug!("{}: gained {:?} for {} turns", target.name, spec.kind(), spec.duration);
        Application::Stored
    }

    fn resolve_instant(target: &mut Combatant, effect: &Effect) -> InstantOutcome {
        match *effect {
            Effect::Regeneration { amount } => InstantOutcome::Healed(target.heal(amount)),
            Effect::Burn { damage } | Effect::Poison { damage } => {
                InstantOutcome::Damaged(target.take_damage(damage))
            }
            Effect::Draw { count } => InstantOutcome::Draw(count),
            Effect::Discard { count } => InstantOutcome::Discard(count),
            Effect::Mana { amount } => InstantOutcome::Mana(amount),
            Effect::Frozen
            | Effect::Stunned
            | Effect::Strengthened { .. }
            | Effect::Weakened { .. }
            | Effect::Shield { .. } => {
                debug!("{}: instant {:?} has no effect", target.name, effect.kind());
                InstantOutcome::Ignored
            }
        }
    }

    /// Resolve the active combatant's effects before it acts.
    ///
    /// Burn and poison deal their damage (poison then grows to
    /// `ceil(value * 1.2)`), regeneration heals, frozen/stunned block the
    /// action. Damage lands before healing. Every effect then loses one turn
    /// of duration and expired effects are removed.
    pub fn process_start_of_turn(target: &mut Combatant) -> TurnResolution {
        let mut can_act = true;
        let mut damage = 0;
        let mut healing = 0;

        for active in target.effects.iter_mut() {
            match &mut active.effect {
                Effect::Burn { damage: dot } => damage += *dot,
                Effect::Poison { damage: dot } => {
                    damage += *dot;
                    *dot = grow_poison(*dot);
                }
                Effect::Frozen | Effect::Stunned => can_act = false,
                Effect::Regeneration { amount } => healing += *amount,
                Effect::Strengthened { .. }
                | Effect::Weakened { .. }
                | Effect::Shield { .. }
                | Effect::Draw { .. }
                | Effect::Discard { .. }
                | Effect::Mana { .. } => {}
            }
        }

        let damage = target.take_damage(damage);
        let healing = target.heal(healing);

        for active in target.effects.iter_mut() {
            active.duration -= 1;
        }
        let name = &target.name;
        target.effects.retain(|active| {
            let keep = active.duration > 0;
            if !keep {
                debug!("{}: {:?} expired", name, active.kind());
            }
            keep
        });

        TurnResolution {
            can_act,
            damage,
            healing,
        }
    }

    /// Product of all strengthened and weakened multipliers, 1.0 if none.
    #[must_use]
    pub fn damage_modifier(attacker: &Combatant) -> f64 {
        attacker
            .effects
            .iter()
            .map(|active| match active.effect {
                Effect::Strengthened { multiplier } | Effect::Weakened { multiplier } => multiplier,
                _ => 1.0,
            })
            .product()
    }

    /// Absorb incoming damage with the target's shield, if any.
    ///
    /// The shield shrinks by what it absorbed and is removed once spent.
    pub fn consume_shield(target: &mut Combatant, incoming: i32) -> ShieldResult {
        let incoming = incoming.max(0);
        let Some(index) = target.effects.iter().position(|e| e.kind() == EffectKind::Shield) else {
            return ShieldResult {
                absorbed: 0,
                remaining: incoming,
            };
        };

        let mut absorbed = 0;
        let mut spent = false;
        if let Effect::Shield { amount } = &mut target.effects[index].effect {
            absorbed = incoming.min(*amount);
            *amount -= absorbed;
            spent = *amount <= 0;
        }
        if spent {
            target.effects.remove(index);
            debug!("{}: shield broken", target.name);
        }

        ShieldResult {
            absorbed,
            remaining: incoming - absorbed,
        }
    }

    /// Remove an effect outright. Returns whether one was present.
    pub fn remove(target: &mut Combatant, kind: EffectKind) -> bool {
        let before = target.effects.len();
        target.effects.retain(|e| e.kind() != kind);
        target.effects.len() != before
    }
}
