//! Static data bundle handed to battles and the reward resolver.

use serde::Deserialize;

use super::catalog;
use super::enemies::{EncounterTable, EnemyDefinition, EnemyRegistry};
use crate::affinity::AffinityTable;
use crate::cards::{CardDefinition, CardRegistry};
use crate::core::BattleError;

/// Card pool, enemy roster with area encounters, and affinity table.
///
/// ```
/// use deckbattle::data::{EnemyId, GameData};
///
/// let data = GameData::starter();
/// assert!(data.validate().is_ok());
/// assert!(data.enemies.get(&EnemyId::new("slime")).is_some());
/// assert!(data.enemies.area("forest").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameData {
    pub cards: CardRegistry,
    pub enemies: EnemyRegistry,
    pub affinity: AffinityTable,
}

#[derive(Deserialize)]
struct GameDataFile {
    cards: Vec<CardDefinition>,
    #[serde(default)]
    enemies: Vec<EnemyDefinition>,
    #[serde(default)]
    areas: Vec<EncounterTable>,
    #[serde(default)]
    affinity: Option<AffinityTable>,
}

impl GameData {
    /// Assemble and validate a data bundle.
    pub fn new(
        cards: impl IntoIterator<Item = CardDefinition>,
        enemies: impl IntoIterator<Item = EnemyDefinition>,
        affinity: AffinityTable,
    ) -> Result<Self, BattleError> {
        let mut roster = EnemyRegistry::new();
        for enemy in enemies {
            roster.register(enemy);
        }

        let data = Self {
            cards: CardRegistry::from_definitions(cards)?,
            enemies: roster,
            affinity,
        };
        data.validate()?;
        Ok(data)
    }

    /// Add area encounter tables and validate them against the roster.
    pub fn with_areas(mut self, areas: impl IntoIterator<Item = EncounterTable>) -> Result<Self, BattleError> {
        for table in areas {
            self.enemies.register_area(table);
        }
        self.validate()?;
        Ok(self)
    }

    /// The built-in catalog, its areas and the standard affinity wheel.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(
            catalog::starter_cards(),
            catalog::starter_enemies(),
            AffinityTable::standard(),
        )
        .and_then(|data| data.with_areas(catalog::starter_areas()))
        .expect("built-in catalog is consistent")
    }

    /// Load from a JSON document with `cards`, and optional `enemies`,
    /// `areas` and `affinity`. Without an `affinity` section the standard
    /// wheel is used.
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        let file: GameDataFile = serde_json::from_str(json)?;
        Self::new(
            file.cards,
            file.enemies,
            file.affinity.unwrap_or_else(AffinityTable::standard),
        )?
        .with_areas(file.areas)
    }

    /// Check every enemy deck is non-empty and references known cards, and
    /// every area lists known enemies.
    pub fn validate(&self) -> Result<(), BattleError> {
        for enemy in self.enemies.iter() {
            if enemy.deck.is_empty() {
                return Err(BattleError::EmptyDeck {
                    owner: enemy.id.to_string(),
                });
            }
            for card in &enemy.deck {
                self.cards.require(card)?;
            }
        }
        for table in self.enemies.areas() {
            for enemy in table.all() {
                self.enemies.require(enemy)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary::EnemyTier;
    use crate::affinity::Element;
    use crate::cards::{CardId, Rarity};
    use crate::data::starter_deck;

    #[test]
    fn test_starter_is_valid() {
        let data = GameData::starter();
        data.validate().unwrap();
        assert_eq!(data.cards.len(), 21);
        assert_eq!(data.enemies.len(), 14);
        assert_eq!(data.enemies.areas().count(), 4);
        for id in starter_deck() {
            assert!(data.cards.contains(&id), "missing {id}");
        }
    }

    #[test]
    fn test_starter_tiers_and_rarities() {
        let data = GameData::starter();
        assert_eq!(data.enemies.by_tier(EnemyTier::Normal).len(), 6);
        assert_eq!(data.enemies.by_tier(EnemyTier::Elite).len(), 4);
        assert_eq!(data.enemies.by_tier(EnemyTier::Boss).len(), 4);

        let legendary: Vec<_> = data
            .cards
            .by_rarity(Rarity::Legendary)
            .iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(
            legendary,
            vec!["celestial_judgment", "dragon_breath", "eternal_darkness", "world_tree"]
        );
        assert_eq!(data.cards.by_element(Element::Light).len(), 3);
    }

    /// Every area offers at least one enemy of each tier.
    #[test]
    fn test_starter_areas_cover_every_tier() {
        let data = GameData::starter();
        for area in ["forest", "caves", "volcano", "sanctuary"] {
            let table = data.enemies.area(area).unwrap();
            for tier in [EnemyTier::Normal, EnemyTier::Elite, EnemyTier::Boss] {
                assert!(!table.enemies(tier).is_empty(), "{area} has no {tier:?}");
                for id in table.enemies(tier) {
                    assert_eq!(data.enemies.get(id).unwrap().tier, tier, "{id} in {area}");
                }
            }
        }
    }

    #[test]
    fn test_area_with_unknown_enemy() {
        let json = r#"{
            "cards": [
                { "id": "jab", "name": "Jab", "category": "attack", "mana_cost": 1, "base_damage": 3 }
            ],
            "enemies": [
                { "id": "rat", "name": "Rat", "max_hp": 10, "xp_reward": 2,
                  "gold_reward": [1, 2], "deck": ["jab"] }
            ],
            "areas": [ { "area": "sewer", "normal": ["rat", "croc"] } ]
        }"#;
        let err = GameData::from_json(json).unwrap_err();
        assert!(matches!(err, BattleError::UnknownEnemy(id) if id.as_str() == "croc"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "cards": [
                { "id": "jab", "name": "Jab", "category": "attack", "mana_cost": 1, "base_damage": 3 }
            ],
            "enemies": [
                { "id": "rat", "name": "Rat", "max_hp": 10, "xp_reward": 2,
                  "gold_reward": [1, 2], "deck": ["jab", "jab"] }
            ]
        }"#;
        let data = GameData::from_json(json).unwrap();
        assert!(data.cards.contains(&CardId::new("jab")));
        assert!(data.enemies.area("sewer").is_none());
        assert_eq!(data.affinity.modifier(Element::Fire, Element::Earth), 1.5);
    }

    #[test]
    fn test_unknown_card_in_enemy_deck() {
        let json = r#"{
            "cards": [],
            "enemies": [
                { "id": "rat", "name": "Rat", "max_hp": 10, "xp_reward": 2,
                  "gold_reward": [1, 2], "deck": ["bite"] }
            ]
        }"#;
        let err = GameData::from_json(json).unwrap_err();
        assert!(matches!(err, BattleError::UnknownCard(id) if id.as_str() == "bite"));
    }

    #[test]
    fn test_empty_enemy_deck() {
        let err = GameData::new(
            Vec::new(),
            vec![EnemyDefinition::new("rat", "Rat", 10)],
            AffinityTable::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BattleError::EmptyDeck { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameData::from_json("{ \"cards\": 3 }"),
            Err(BattleError::InvalidData(_))
        ));
    }
}
