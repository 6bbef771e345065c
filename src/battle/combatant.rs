//! Battle participants.
//!
//! A `Combatant` is the player or the enemy for the duration of one battle.
//! hp and mana are kept inside their bounds by every mutator:
//! `0 <= hp <= max_hp` and `0 <= mana <= max_mana`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::adversary::{AiBehavior, EnemyTier};
use crate::affinity::Element;
use crate::data::EnemyDefinition;
use crate::effects::{ActiveEffect, EffectKind};

/// Which side of the battle a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Enemy => f.write_str("enemy"),
        }
    }
}

/// A player or enemy in battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub side: Side,
    hp: i32,
    pub max_hp: i32,
    mana: i32,
    pub max_mana: i32,
    /// Mana regained at the start of each turn (zero for enemies).
    pub mana_per_turn: i32,
    /// Mana held when a battle starts, before the first regeneration.
    #[serde(default)]
    pub starting_mana: i32,
    pub element: Element,
    /// Active persistent effects, at most one per kind.
    pub(crate) effects: SmallVec<[ActiveEffect; 4]>,
    /// Decision profile (enemies only).
    pub behavior: Option<AiBehavior>,
    /// Encounter tier (enemies only).
    pub tier: Option<EnemyTier>,
}

impl Combatant {
    /// A player at full hp with no mana.
    #[must_use]
    pub fn player(name: impl Into<String>, max_hp: i32, max_mana: i32, mana_per_turn: i32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            side: Side::Player,
            hp: max_hp,
            max_hp,
            mana: 0,
            max_mana: max_mana.max(0),
            mana_per_turn,
            starting_mana: 0,
            element: Element::Neutral,
            effects: SmallVec::new(),
            behavior: None,
            tier: None,
        }
    }

    /// A fresh enemy from its static definition.
    #[must_use]
    pub fn enemy(def: &EnemyDefinition) -> Self {
        let max_hp = def.max_hp.max(1);
        Self {
            name: def.name.clone(),
            side: Side::Enemy,
            hp: max_hp,
            max_hp,
            mana: 0,
            max_mana: 0,
            mana_per_turn: 0,
            starting_mana: 0,
            element: def.element,
            effects: SmallVec::new(),
            behavior: Some(def.behavior),
            tier: Some(def.tier),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set current hp, clamped to `[0, max_hp]`.
    #[must_use]
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp.clamp(0, self.max_hp);
        self
    }

    /// Mana to start each battle with, clamped to `[0, max_mana]`.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: i32) -> Self {
        self.starting_mana = mana.clamp(0, self.max_mana);
        self.mana = self.starting_mana;
        self
    }

    /// Set current mana, clamped to `[0, max_mana]`.
    #[must_use]
    pub fn with_mana(mut self, mana: i32) -> Self {
        self.mana = mana.clamp(0, self.max_mana);
        self
    }

    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Current hp as a fraction of max hp.
    #[must_use]
    pub fn hp_fraction(&self) -> f64 {
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    /// Lose hp, never below zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount.max(0)).max(0);
        before - self.hp
    }

    /// Gain hp, never above max. Returns the hp actually gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Restore hp and starting mana and clear effects for a new battle.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.mana = self.starting_mana.clamp(0, self.max_mana);
        self.effects.clear();
    }

    /// Gain mana, never above max. Returns the mana actually gained.
    pub fn gain_mana(&mut self, amount: i32) -> i32 {
        let before = self.mana;
        self.mana = (self.mana + amount.max(0)).min(self.max_mana);
        self.mana - before
    }

    /// Start-of-turn mana regeneration.
    pub fn regenerate_mana(&mut self) -> i32 {
        self.gain_mana(self.mana_per_turn)
    }

    /// Pay a mana cost. Fails without spending if mana is short.
    pub fn spend_mana(&mut self, cost: i32) -> bool {
        if cost > self.mana {
            return false;
        }
        self.mana -= cost.max(0);
        true
    }

    #[must_use]
    pub fn effects(&self) -> &[ActiveEffect] {
        &self.effects
    }

    #[must_use]
    pub fn effect(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.kind() == kind)
    }

    #[must_use]
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effect(kind).is_some()
    }
}
