//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! "Fireball" always costs 2 mana and deals 8 fire damage; those numbers
//! live here. Per-battle state (instance id, playable/selected flags) is
//! stored separately in `CardInstance`.

use serde::{Deserialize, Serialize};

use super::category::{CardCategory, Rarity};
use crate::affinity::{AffinityTable, Element};
use crate::effects::{EffectKind, EffectSpec};

/// Identifier for a card definition, e.g. `"strike"`.
///
/// This identifies the "type" of card, not a specific instance in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckbattle::affinity::{AffinityTable, Element};
/// use deckbattle::cards::{CardCategory, CardDefinition};
///
/// let fireball = CardDefinition::new("fireball", "Fireball", CardCategory::Magic)
///     .with_element(Element::Fire)
///     .with_cost(2)
///     .with_damage(8);
///
/// let table = AffinityTable::standard();
/// assert_eq!(fireball.calculate_damage(Element::Earth, 1.0, &table), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    pub category: CardCategory,

    #[serde(default)]
    pub element: Element,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub mana_cost: i32,

    #[serde(default)]
    pub base_damage: i32,

    #[serde(default)]
    pub base_defense: i32,

    /// Effects resolved in order when the card is played.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,

    #[serde(default)]
    pub description: String,
}

impl CardDefinition {
    /// Create a zero-cost neutral common card with no stats.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: CardCategory) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            category,
            element: Element::Neutral,
            rarity: Rarity::Common,
            mana_cost: 0,
            base_damage: 0,
            base_defense: 0,
            effects: Vec::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, mana_cost: i32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    /// Base damage is clamped to zero; negative damage is not a thing.
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.base_damage = damage.max(0);
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: i32) -> Self {
        self.base_defense = defense.max(0);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn deals_damage(&self) -> bool {
        self.base_damage > 0
    }

    #[must_use]
    pub fn grants_defense(&self) -> bool {
        self.base_defense > 0 || self.has_effect(EffectKind::Shield)
    }

    #[must_use]
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|spec| spec.kind() == kind)
    }

    /// `floor(base_damage * affinity(card element, target) * modifier)`, never negative.
    #[must_use]
    pub fn calculate_damage(&self, target: Element, modifier: f64, affinity: &AffinityTable) -> i32 {
        let raw = f64::from(self.base_damage) * affinity.modifier(self.element, target) * modifier;
        (raw.floor() as i32).max(0)
    }
}
