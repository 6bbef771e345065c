//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical copy of a card in a battle. It shares
//! its definition via `Arc` and carries the two flags the presentation layer
//! reads: whether the card is currently playable and whether it is selected.
//! Instances are disposable; they are rebuilt for every battle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::affinity::{AffinityTable, Element};
use crate::core::InstanceId;

/// A card instance in a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub instance_id: InstanceId,

    /// Shared immutable definition.
    pub definition: Arc<CardDefinition>,

    /// Recomputed from available mana each turn.
    pub is_playable: bool,

    /// UI selection marker; the engine never reads it.
    pub is_selected: bool,
}

impl CardInstance {
    /// Create an instance. It starts playable until refreshed against mana.
    #[must_use]
    pub fn new(instance_id: InstanceId, definition: Arc<CardDefinition>) -> Self {
        Self {
            instance_id,
            definition,
            is_playable: true,
            is_selected: false,
        }
    }

    /// Copy this card under a new instance id. Flags copy by value.
    #[must_use]
    pub fn clone_as(&self, instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn mana_cost(&self) -> i32 {
        self.definition.mana_cost
    }

    /// True iff the card is flagged playable and `current_mana` covers its cost.
    #[must_use]
    pub fn can_play(&self, current_mana: i32) -> bool {
        self.is_playable && current_mana >= self.definition.mana_cost
    }

    /// Recompute `is_playable` against the mana now available.
    pub fn refresh_playable(&mut self, current_mana: i32) {
        self.is_playable = current_mana >= self.definition.mana_cost;
    }

    pub fn select(&mut self) {
        self.is_selected = true;
    }

    pub fn deselect(&mut self) {
        self.is_selected = false;
    }

    /// See [`CardDefinition::calculate_damage`].
    #[must_use]
    pub fn calculate_damage(&self, target: Element, modifier: f64, affinity: &AffinityTable) -> i32 {
        self.definition.calculate_damage(target, modifier, affinity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;

    fn instance(id: u32, cost: i32, category: CardCategory) -> CardInstance {
        let def = CardDefinition::new("test", "Test", category).with_cost(cost);
        CardInstance::new(InstanceId(id), Arc::new(def))
    }

    #[test]
    fn test_can_play() {
        let card = instance(1, 2, CardCategory::Attack);
        assert!(card.can_play(2));
        assert!(card.can_play(5));
        assert!(!card.can_play(1));
    }

    #[test]
    fn test_refresh_playable() {
        let mut card = instance(1, 3, CardCategory::Magic);
        card.refresh_playable(1);
        assert!(!card.is_playable);
        assert!(!card.can_play(10));

        card.refresh_playable(3);
        assert!(card.is_playable);
    }

    /// Only mana gates play; curses and relics are cards like any other.
    #[test]
    fn test_every_category_playable_with_mana() {
        for category in [CardCategory::Curse, CardCategory::Relic] {
            let mut card = instance(1, 4, category);
            card.refresh_playable(3);
            assert!(!card.can_play(3));
            card.refresh_playable(4);
            assert!(card.can_play(4));
        }
    }

    #[test]
    fn test_clone_as_new_id() {
        let mut card = instance(1, 1, CardCategory::Attack);
        card.select();

        let copy = card.clone_as(InstanceId(9));
        assert_eq!(copy.instance_id, InstanceId(9));
        assert_eq!(copy.card_id(), card.card_id());
        assert!(copy.is_selected);
        assert!(Arc::ptr_eq(&copy.definition, &card.definition));
    }

    #[test]
    fn test_selection() {
        let mut card = instance(1, 1, CardCategory::Support);
        assert!(!card.is_selected);
        card.select();
        assert!(card.is_selected);
        card.deselect();
        assert!(!card.is_selected);
    }
}
