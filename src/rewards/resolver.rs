//! Post-battle reward rolls.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardRegistry, Rarity};
use crate::core::{BattleConfig, RandomSource, RarityThresholds};
use crate::data::EnemyDefinition;

/// What a victory pays out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub xp: u32,
    pub gold: u32,
    pub cards: Vec<Arc<CardDefinition>>,
}

/// Rolls gold and bonus cards for a defeated enemy.
///
/// Randomness is consumed in a fixed order (gold, drop chance, rarity,
/// card pick) so a seeded source always yields the same rewards.
pub struct RewardResolver;

impl RewardResolver {
    /// Rewards for defeating `enemy`, drawing bonus cards from `pool`.
    pub fn resolve(
        enemy: &EnemyDefinition,
        pool: &CardRegistry,
        config: &BattleConfig,
        rng: &mut dyn RandomSource,
    ) -> Rewards {
        let (min, max) = enemy.gold_reward;
        let gold = rng.gen_range_inclusive(to_i32(min), to_i32(max));
        let gold = u32::try_from(gold).unwrap_or(0);

        let mut cards = Vec::new();
        if rng.gen_bool(config.card_drop_chance) {
            let roll = rng.gen_unit() * 100.0;
            let rarity = rarity_for_roll(roll, &config.rarity_thresholds);
            match Self::pick_card(pool, rarity, rng) {
                Some(card) => {
                    debug!("{} dropped {} ({:?})", enemy.name, card.id, card.rarity);
                    cards.push(card);
                }
                None => debug!("{} rolled a {:?} drop but the pool is empty", enemy.name, rarity),
            }
        }

        Rewards {
            xp: enemy.xp_reward,
            gold,
            cards,
        }
    }

    /// Uniform pick among cards of `rarity`, falling back to more common
    /// rarities when a tier has no candidates.
    pub fn pick_card(
        pool: &CardRegistry,
        rarity: Rarity,
        rng: &mut dyn RandomSource,
    ) -> Option<Arc<CardDefinition>> {
        let mut tier = Some(rarity);
        while let Some(current) = tier {
            if let Some(card) = pool.random_card(Some(current), rng) {
                return Some(card);
            }
            tier = current.more_common();
        }
        None
    }
}

/// Map a roll in `[0, 100)` to a rarity using cumulative thresholds.
#[must_use]
pub fn rarity_for_roll(roll: f64, thresholds: &RarityThresholds) -> Rarity {
    if roll < thresholds.legendary {
        Rarity::Legendary
    } else if roll < thresholds.epic {
        Rarity::Epic
    } else if roll < thresholds.rare {
        Rarity::Rare
    } else if roll < thresholds.uncommon {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
