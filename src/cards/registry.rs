//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition the game knows about.
//! It doubles as the drop pool: `by_rarity` lists the candidates for a
//! rarity roll and `random_card` makes the pick. Every listing is sorted by
//! id, so a seeded pick does not depend on hash order.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::category::Rarity;
use super::definition::{CardDefinition, CardId};
use super::instance::CardInstance;
use crate::affinity::Element;
use crate::core::{BattleError, InstanceAllocator, RandomSource};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deckbattle::cards::{CardCategory, CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new("strike", "Strike", CardCategory::Attack).with_damage(6))
///     .unwrap();
///
/// let found = registry.get(&CardId::new("strike")).unwrap();
/// assert_eq!(found.base_damage, 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, BattleError> {
        let mut registry = Self::new();
        for def in definitions {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Register a card definition. Duplicate ids are rejected.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), BattleError> {
        if self.cards.contains_key(&card.id) {
            return Err(BattleError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id.clone(), Arc::new(card));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(id)
    }

    /// Look up a card, turning a miss into a setup error.
    pub fn require(&self, id: &CardId) -> Result<Arc<CardDefinition>, BattleError> {
        self.cards
            .get(id)
            .cloned()
            .ok_or_else(|| BattleError::UnknownCard(id.clone()))
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Cards of one rarity, sorted by id so rolls are reproducible.
    #[must_use]
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<Arc<CardDefinition>> {
        self.sorted(|c| c.rarity == rarity)
    }

    /// Cards of one element, sorted by id.
    #[must_use]
    pub fn by_element(&self, element: Element) -> Vec<Arc<CardDefinition>> {
        self.sorted(|c| c.element == element)
    }

    /// Uniform pick among cards of `rarity`, or among every card for `None`.
    ///
    /// An empty candidate list returns `None` without consuming a roll.
    pub fn random_card(
        &self,
        rarity: Option<Rarity>,
        rng: &mut dyn RandomSource,
    ) -> Option<Arc<CardDefinition>> {
        let candidates = self.sorted(|c| rarity.map_or(true, |r| c.rarity == r));
        if candidates.is_empty() {
            return None;
        }
        Some(Arc::clone(&candidates[rng.gen_index(candidates.len())]))
    }

    fn sorted(&self, keep: impl Fn(&CardDefinition) -> bool) -> Vec<Arc<CardDefinition>> {
        let mut cards: Vec<_> = self.cards.values().filter(|c| keep(c)).cloned().collect();
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        cards
    }

    /// Create fresh instances for a list of card ids.
    pub fn instantiate(
        &self,
        ids: &[CardId],
        allocator: &mut InstanceAllocator,
    ) -> Result<Vec<CardInstance>, BattleError> {
        ids.iter()
            .map(|id| Ok(CardInstance::new(allocator.alloc(), self.require(id)?)))
            .collect()
    }
}
