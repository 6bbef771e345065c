//! Enemy definitions, area encounter tables and lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::adversary::{AiBehavior, EnemyTier};
use crate::affinity::Element;
use crate::cards::CardId;
use crate::core::{BattleError, RandomSource};

/// Identifier for an enemy definition, e.g. `"slime"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyId(pub String);

impl EnemyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EnemyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static enemy data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,
    pub max_hp: i32,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub behavior: AiBehavior,
    #[serde(default)]
    pub tier: EnemyTier,
    pub xp_reward: u32,
    /// Inclusive gold range `(min, max)`.
    pub gold_reward: (u32, u32),
    /// Card ids the enemy's battle deck is built from.
    pub deck: Vec<CardId>,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id: EnemyId::new(id),
            name: name.into(),
            max_hp,
            element: Element::Neutral,
            behavior: AiBehavior::default(),
            tier: EnemyTier::default(),
            xp_reward: 0,
            gold_reward: (0, 0),
            deck: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: AiBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: EnemyTier) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, xp: u32, gold_min: u32, gold_max: u32) -> Self {
        self.xp_reward = xp;
        self.gold_reward = (gold_min.min(gold_max), gold_min.max(gold_max));
        self
    }

    /// Append `copies` of a card to the deck list.
    #[must_use]
    pub fn with_cards(mut self, card: impl Into<CardId>, copies: usize) -> Self {
        let card = card.into();
        self.deck.extend(std::iter::repeat(card).take(copies));
        self
    }
}

/// Which enemies can be met in an area, per tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterTable {
    pub area: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub normal: Vec<EnemyId>,
    #[serde(default)]
    pub elite: Vec<EnemyId>,
    #[serde(default)]
    pub boss: Vec<EnemyId>,
}

impl EncounterTable {
    #[must_use]
    pub fn new(area: impl Into<String>) -> Self {
        let area = area.into();
        Self {
            name: area.clone(),
            area,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add enemies to one tier's list.
    #[must_use]
    pub fn with_enemies(mut self, tier: EnemyTier, enemies: &[&str]) -> Self {
        let list = match tier {
            EnemyTier::Normal => &mut self.normal,
            EnemyTier::Elite => &mut self.elite,
            EnemyTier::Boss => &mut self.boss,
        };
        list.extend(enemies.iter().map(|&id| EnemyId::new(id)));
        self
    }

    #[must_use]
    pub fn enemies(&self, tier: EnemyTier) -> &[EnemyId] {
        match tier {
            EnemyTier::Normal => &self.normal,
            EnemyTier::Elite => &self.elite,
            EnemyTier::Boss => &self.boss,
        }
    }

    /// Every enemy listed, across tiers.
    pub fn all(&self) -> impl Iterator<Item = &EnemyId> {
        self.normal.iter().chain(&self.elite).chain(&self.boss)
    }
}

/// Registry of enemy definitions and area encounter tables.
#[derive(Clone, Debug, Default)]
pub struct EnemyRegistry {
    enemies: FxHashMap<EnemyId, EnemyDefinition>,
    areas: FxHashMap<String, EncounterTable>,
}

impl EnemyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enemy; a later definition with the same id replaces the earlier one.
    pub fn register(&mut self, enemy: EnemyDefinition) {
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    #[must_use]
    pub fn get(&self, id: &EnemyId) -> Option<&EnemyDefinition> {
        self.enemies.get(id)
    }

    pub fn require(&self, id: &EnemyId) -> Result<&EnemyDefinition, BattleError> {
        self.enemies
            .get(id)
            .ok_or_else(|| BattleError::UnknownEnemy(id.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.enemies.values()
    }

    /// Register an area; a later table for the same area replaces it.
    pub fn register_area(&mut self, table: EncounterTable) {
        self.areas.insert(table.area.clone(), table);
    }

    #[must_use]
    pub fn area(&self, area: &str) -> Option<&EncounterTable> {
        self.areas.get(area)
    }

    /// Area tables (unordered).
    pub fn areas(&self) -> impl Iterator<Item = &EncounterTable> {
        self.areas.values()
    }

    /// Enemies of one tier, sorted by id.
    #[must_use]
    pub fn by_tier(&self, tier: EnemyTier) -> Vec<&EnemyDefinition> {
        let mut enemies: Vec<_> = self.enemies.values().filter(|e| e.tier == tier).collect();
        enemies.sort_by(|a, b| a.id.cmp(&b.id));
        enemies
    }

    /// Uniform pick among enemies of `tier`.
    ///
    /// With a known `area`, only enemies its table lists for that tier are
    /// candidates; an unknown area does not narrow the pick. Returns `None`
    /// without consuming a roll when nothing qualifies.
    pub fn random_enemy(
        &self,
        tier: EnemyTier,
        area: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Option<&EnemyDefinition> {
        let mut candidates = self.by_tier(tier);
        if let Some(table) = area.and_then(|a| self.areas.get(a)) {
            let listed = table.enemies(tier);
            candidates.retain(|e| listed.contains(&e.id));
        }
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.gen_index(candidates.len())])
    }
}
