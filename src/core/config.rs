//! Battle configuration.
//!
//! Tunables the engine reads instead of hardcoding: hand limits, shield
//! duration, drop chances, rarity thresholds and level-up growth.
//! Every field has a default, so partial JSON documents are accepted.
//!
//! ```
//! use deckbattle::core::BattleConfig;
//!
//! let config = BattleConfig::from_json(r#"{ "max_hand_size": 5 }"#).unwrap();
//! assert_eq!(config.max_hand_size, 5);
//! assert_eq!(config.starting_hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::BattleError;

/// Cumulative rarity roll thresholds, in percent.
///
/// A roll in `[0, 100)` below `legendary` yields a legendary card, below
/// `epic` an epic card, and so on; anything at or above `uncommon` is common.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityThresholds {
    pub legendary: f64,
    pub epic: f64,
    pub rare: f64,
    pub uncommon: f64,
}

impl Default for RarityThresholds {
    fn default() -> Self {
        Self {
            legendary: 1.0,
            epic: 5.0,
            rare: 20.0,
            uncommon: 50.0,
        }
    }
}

/// Engine configuration shared by the deck, controller and reward resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Maximum cards held in hand. Draws beyond this are no-ops.
    pub max_hand_size: usize,

    /// Cards drawn on the player's first turn.
    pub starting_hand_size: usize,

    /// Turns a card's declared defense persists as a shield.
    pub shield_duration: u32,

    /// Probability that a victory drops a bonus card.
    pub card_drop_chance: f64,

    /// Rarity table for bonus card drops.
    pub rarity_thresholds: RarityThresholds,

    /// Max hp gained per level-up.
    pub hp_per_level: i32,

    /// Multiplier applied to the xp threshold after each level-up.
    pub xp_growth: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_hand_size: 7,
            starting_hand_size: 5,
            shield_duration: 1,
            card_drop_chance: 0.3,
            rarity_thresholds: RarityThresholds::default(),
            hp_per_level: 10,
            xp_growth: 1.5,
        }
    }
}

impl BattleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the maximum hand size.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set how long defense shields last.
    #[must_use]
    pub fn with_shield_duration(mut self, turns: u32) -> Self {
        self.shield_duration = turns;
        self
    }

    /// Set the bonus card drop chance.
    #[must_use]
    pub fn with_card_drop_chance(mut self, chance: f64) -> Self {
        self.card_drop_chance = chance;
        self
    }
}
