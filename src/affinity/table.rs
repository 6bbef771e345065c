//! Attacker → defender damage multipliers.
//!
//! Each element has at most one element it is strong against and one it is
//! weak against. Lookups check `strong` before `weak`, so a relation that
//! names the same element on both sides (Light/Dark) always resolves to the
//! strong multiplier.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::element::Element;

/// Multiplier when the attacker is strong against the defender.
pub const STRONG_MULTIPLIER: f64 = 1.5;

/// Multiplier when the attacker is weak against the defender.
pub const WEAK_MULTIPLIER: f64 = 0.5;

/// One element's relation to the others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRelation {
    pub strong: Option<Element>,
    pub weak: Option<Element>,
}

impl ElementRelation {
    #[must_use]
    pub const fn new(strong: Element, weak: Element) -> Self {
        Self {
            strong: Some(strong),
            weak: Some(weak),
        }
    }
}

/// Static affinity lookup.
///
/// ```
/// use deckbattle::affinity::{AffinityTable, Element};
///
/// let table = AffinityTable::standard();
/// assert_eq!(table.modifier(Element::Fire, Element::Earth), 1.5);
/// assert_eq!(table.modifier(Element::Fire, Element::Water), 0.5);
/// assert_eq!(table.modifier(Element::Fire, Element::Air), 1.0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AffinityTable {
    relations: FxHashMap<Element, ElementRelation>,
}

impl AffinityTable {
    /// An empty table: every matchup is 1.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard wheel.
    ///
    /// Fire > Earth > Air > Water > Fire, Light and Dark strong against each
    /// other, Neutral unrelated.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_relation(Element::Fire, ElementRelation::new(Element::Earth, Element::Water))
            .with_relation(Element::Water, ElementRelation::new(Element::Fire, Element::Air))
            .with_relation(Element::Earth, ElementRelation::new(Element::Air, Element::Fire))
            .with_relation(Element::Air, ElementRelation::new(Element::Water, Element::Earth))
            .with_relation(Element::Light, ElementRelation::new(Element::Dark, Element::Dark))
            .with_relation(Element::Dark, ElementRelation::new(Element::Light, Element::Light))
    }

    /// Set an element's relation (builder pattern).
    #[must_use]
    pub fn with_relation(mut self, element: Element, relation: ElementRelation) -> Self {
        self.relations.insert(element, relation);
        self
    }

    /// Look up an element's relation.
    #[must_use]
    pub fn relation(&self, element: Element) -> Option<&ElementRelation> {
        self.relations.get(&element)
    }

    /// Damage multiplier for `attacker` hitting `defender`.
    #[must_use]
    pub fn modifier(&self, attacker: Element, defender: Element) -> f64 {
        let Some(relation) = self.relations.get(&attacker) else {
            return 1.0;
        };

        if relation.strong == Some(defender) {
            STRONG_MULTIPLIER
        } else if relation.weak == Some(defender) {
            WEAK_MULTIPLIER
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel() {
        let table = AffinityTable::standard();

        assert_eq!(table.modifier(Element::Water, Element::Fire), 1.5);
        assert_eq!(table.modifier(Element::Water, Element::Air), 0.5);
        assert_eq!(table.modifier(Element::Earth, Element::Air), 1.5);
        assert_eq!(table.modifier(Element::Earth, Element::Fire), 0.5);
        assert_eq!(table.modifier(Element::Air, Element::Water), 1.5);
        assert_eq!(table.modifier(Element::Air, Element::Earth), 0.5);
    }

    #[test]
    fn test_neutral_is_always_one() {
        let table = AffinityTable::standard();
        for defender in Element::ALL {
            assert_eq!(table.modifier(Element::Neutral, defender), 1.0);
        }
        assert_eq!(table.modifier(Element::Fire, Element::Neutral), 1.0);
    }

    #[test]
    fn test_light_dark_resolve_to_strong() {
        let table = AffinityTable::standard();
        assert_eq!(table.modifier(Element::Light, Element::Dark), 1.5);
        assert_eq!(table.modifier(Element::Dark, Element::Light), 1.5);
        assert_eq!(table.modifier(Element::Light, Element::Light), 1.0);
    }

    #[test]
    fn test_empty_table() {
        let table = AffinityTable::new();
        assert_eq!(table.modifier(Element::Fire, Element::Earth), 1.0);
        assert!(table.relation(Element::Fire).is_none());
    }
}
