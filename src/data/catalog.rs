//! Built-in catalog.
//!
//! The full card pool (21 cards), the enemy roster (14 enemies across three
//! tiers), the four adventure areas and the new player's deck. Enough to run
//! real battles without loading any data files.
//!
//! A card's declared defense already becomes a shield when played, so
//! defense cards carry no separate shield effect.

use crate::adversary::{AiBehavior, EnemyTier};
use crate::affinity::Element;
use crate::cards::{CardCategory, CardDefinition, CardId, Rarity};
use crate::effects::{Effect, EffectSpec};

use super::enemies::{EncounterTable, EnemyDefinition};

pub(crate) fn starter_cards() -> Vec<CardDefinition> {
    use CardCategory::*;

    vec![
        // common
        CardDefinition::new("strike", "Strike", Attack)
            .with_cost(1)
            .with_damage(6)
            .with_text("A basic weapon strike."),
        CardDefinition::new("defend", "Defend", Defense)
            .with_cost(1)
            .with_defense(5)
            .with_text("Raise your guard. Gain 5 shield."),
        CardDefinition::new("spark", "Spark", Magic)
            .with_element(Element::Fire)
            .with_cost(1)
            .with_damage(4)
            .with_text("A small spark of fire."),
        CardDefinition::new("heal", "Heal", Support)
            .with_element(Element::Light)
            .with_cost(1)
            .with_effect(EffectSpec::instant(Effect::Regeneration { amount: 5 }))
            .with_text("Restore 5 hp."),
        // uncommon
        CardDefinition::new("fireball", "Fireball", Attack)
            .with_element(Element::Fire)
            .with_rarity(Rarity::Uncommon)
            .with_cost(2)
            .with_damage(8)
            .with_effect(EffectSpec::persistent(Effect::Burn { damage: 2 }, 2))
            .with_text("Hurl a ball of fire. Burn for 2 over 2 turns."),
        CardDefinition::new("flame_shield", "Flame Shield", Defense)
            .with_element(Element::Fire)
            .with_rarity(Rarity::Uncommon)
            .with_cost(2)
            .with_defense(4)
            .with_effect(EffectSpec::persistent(Effect::Burn { damage: 3 }, 1))
            .with_text("Gain 4 shield. Scorch the opponent for 3."),
        CardDefinition::new("ice_shard", "Ice Shard", Attack)
            .with_element(Element::Water)
            .with_rarity(Rarity::Uncommon)
            .with_cost(2)
            .with_damage(6)
            .with_effect(EffectSpec::persistent(Effect::Frozen, 1).with_chance(0.3))
            .with_text("An icy blow. 30% chance to freeze for 1 turn."),
        CardDefinition::new("tidal_wave", "Tidal Wave", Magic)
            .with_element(Element::Water)
            .with_rarity(Rarity::Uncommon)
            .with_cost(3)
            .with_damage(12)
            .with_text("A crushing wave."),
        CardDefinition::new("stone_wall", "Stone Wall", Defense)
            .with_element(Element::Earth)
            .with_rarity(Rarity::Uncommon)
            .with_cost(2)
            .with_defense(10)
            .with_text("Raise a wall. Gain 10 shield."),
        CardDefinition::new("earthquake", "Earthquake", Attack)
            .with_element(Element::Earth)
            .with_rarity(Rarity::Uncommon)
            .with_cost(3)
            .with_damage(10)
            .with_effect(EffectSpec::persistent(Effect::Stunned, 1).with_chance(0.2))
            .with_text("The ground shakes. 20% chance to stun."),
        // rare
        CardDefinition::new("inferno", "Inferno", Attack)
            .with_element(Element::Fire)
            .with_rarity(Rarity::Rare)
            .with_cost(4)
            .with_damage(15)
            .with_effect(EffectSpec::persistent(Effect::Burn { damage: 4 }, 3))
            .with_text("Hellfire. Burn for 4 over 3 turns."),
        CardDefinition::new("blizzard", "Blizzard", Magic)
            .with_element(Element::Water)
            .with_rarity(Rarity::Rare)
            .with_cost(4)
            .with_damage(10)
            .with_effect(EffectSpec::persistent(Effect::Frozen, 1))
            .with_text("Freeze the opponent for 1 turn."),
        CardDefinition::new("divine_light", "Divine Light", Support)
            .with_element(Element::Light)
            .with_rarity(Rarity::Rare)
            .with_cost(3)
            .with_effect(EffectSpec::instant(Effect::Regeneration { amount: 15 }))
            .with_effect(EffectSpec::persistent(Effect::Strengthened { multiplier: 1.5 }, 2))
            .with_text("Restore 15 hp and deal 50% more damage for 2 turns."),
        CardDefinition::new("shadow_strike", "Shadow Strike", Attack)
            .with_element(Element::Dark)
            .with_rarity(Rarity::Rare)
            .with_cost(3)
            .with_damage(12)
            .with_effect(EffectSpec::persistent(Effect::Weakened { multiplier: 0.5 }, 2))
            .with_text("Strike from the shadows. Weakens for 2 turns."),
        // epic
        CardDefinition::new("phoenix_flame", "Phoenix Flame", Magic)
            .with_element(Element::Fire)
            .with_rarity(Rarity::Epic)
            .with_cost(5)
            .with_damage(20)
            .with_effect(EffectSpec::persistent(Effect::Burn { damage: 5 }, 3))
            .with_effect(EffectSpec::persistent(Effect::Regeneration { amount: 5 }, 3))
            .with_text("Flames of rebirth. Burn the opponent and regenerate."),
        CardDefinition::new("absolute_zero", "Absolute Zero", Magic)
            .with_element(Element::Water)
            .with_rarity(Rarity::Epic)
            .with_cost(5)
            .with_damage(15)
            .with_effect(EffectSpec::persistent(Effect::Frozen, 2))
            .with_text("Freeze the opponent solid for 2 turns."),
        CardDefinition::new("void_curse", "Void Curse", Curse)
            .with_element(Element::Dark)
            .with_rarity(Rarity::Epic)
            .with_cost(4)
            .with_damage(5)
            .with_effect(EffectSpec::persistent(Effect::Poison { damage: 6 }, 4))
            .with_effect(EffectSpec::persistent(Effect::Weakened { multiplier: 0.5 }, 3))
            .with_text("Heavy poison and lasting weakness."),
        // legendary
        CardDefinition::new("dragon_breath", "Dragon Breath", Attack)
            .with_element(Element::Fire)
            .with_rarity(Rarity::Legendary)
            .with_cost(6)
            .with_damage(30)
            .with_effect(EffectSpec::persistent(Effect::Burn { damage: 8 }, 3))
            .with_text("A dragon's fury. Burn for 8 over 3 turns."),
        CardDefinition::new("celestial_judgment", "Celestial Judgment", Magic)
            .with_element(Element::Light)
            .with_rarity(Rarity::Legendary)
            .with_cost(7)
            .with_damage(25)
            .with_effect(EffectSpec::persistent(Effect::Stunned, 1))
            .with_effect(EffectSpec::instant(Effect::Regeneration { amount: 10 }))
            .with_text("Divine power. Stun the opponent and restore 10 hp."),
        CardDefinition::new("eternal_darkness", "Eternal Darkness", Curse)
            .with_element(Element::Dark)
            .with_rarity(Rarity::Legendary)
            .with_cost(6)
            .with_damage(20)
            .with_effect(EffectSpec::persistent(Effect::Poison { damage: 10 }, 5))
            .with_effect(EffectSpec::persistent(Effect::Stunned, 1))
            .with_text("Absolute dark. Deadly poison and a stun."),
        CardDefinition::new("world_tree", "World Tree", Relic)
            .with_element(Element::Earth)
            .with_rarity(Rarity::Legendary)
            .with_cost(5)
            .with_defense(15)
            .with_effect(EffectSpec::persistent(Effect::Regeneration { amount: 5 }, 5))
            .with_effect(EffectSpec::instant(Effect::Draw { count: 2 }))
            .with_text("Gain 15 shield, regenerate 5 for 5 turns and draw 2."),
    ]
}

pub(crate) fn starter_enemies() -> Vec<EnemyDefinition> {
    use AiBehavior::*;
    use EnemyTier::*;

    vec![
        // normal
        EnemyDefinition::new("goblin", "Goblin", 30)
            .with_element(Element::Earth)
            .with_behavior(Aggressive)
            .with_rewards(15, 5, 15)
            .with_cards("strike", 2)
            .with_cards("defend", 1),
        EnemyDefinition::new("skeleton", "Skeleton", 25)
            .with_element(Element::Dark)
            .with_behavior(Balanced)
            .with_rewards(12, 3, 10)
            .with_cards("strike", 2)
            .with_cards("shadow_strike", 1),
        EnemyDefinition::new("slime", "Slime", 35)
            .with_element(Element::Water)
            .with_behavior(Defensive)
            .with_rewards(10, 2, 8)
            .with_cards("defend", 2)
            .with_cards("ice_shard", 1),
        EnemyDefinition::new("wolf", "Wolf", 28)
            .with_behavior(Aggressive)
            .with_rewards(14, 4, 12)
            .with_cards("strike", 3),
        EnemyDefinition::new("imp", "Imp", 22)
            .with_element(Element::Fire)
            .with_behavior(Magical)
            .with_rewards(18, 8, 20)
            .with_cards("spark", 2)
            .with_cards("fireball", 1),
        EnemyDefinition::new("bat", "Giant Bat", 20)
            .with_element(Element::Air)
            .with_behavior(Aggressive)
            .with_rewards(10, 2, 6)
            .with_cards("strike", 2),
        // elite
        EnemyDefinition::new("orc_warrior", "Orc Warrior", 60)
            .with_element(Element::Earth)
            .with_behavior(Aggressive)
            .with_tier(Elite)
            .with_rewards(40, 20, 40)
            .with_cards("strike", 3)
            .with_cards("earthquake", 1)
            .with_cards("stone_wall", 1),
        EnemyDefinition::new("dark_mage", "Dark Mage", 45)
            .with_element(Element::Dark)
            .with_behavior(Magical)
            .with_tier(Elite)
            .with_rewards(50, 25, 50)
            .with_cards("shadow_strike", 2)
            .with_cards("void_curse", 1)
            .with_cards("defend", 1),
        EnemyDefinition::new("ice_golem", "Ice Golem", 80)
            .with_element(Element::Water)
            .with_behavior(Defensive)
            .with_tier(Elite)
            .with_rewards(45, 30, 55)
            .with_cards("ice_shard", 2)
            .with_cards("blizzard", 1)
            .with_cards("defend", 2),
        EnemyDefinition::new("fire_elemental", "Fire Elemental", 55)
            .with_element(Element::Fire)
            .with_behavior(Magical)
            .with_tier(Elite)
            .with_rewards(55, 35, 60)
            .with_cards("fireball", 2)
            .with_cards("inferno", 1)
            .with_cards("flame_shield", 1),
        // boss
        EnemyDefinition::new("dragon", "Elder Dragon", 150)
            .with_element(Element::Fire)
            .with_behavior(Aggressive)
            .with_tier(Boss)
            .with_rewards(200, 100, 200)
            .with_cards("dragon_breath", 2)
            .with_cards("inferno", 1)
            .with_cards("flame_shield", 1)
            .with_cards("strike", 2),
        EnemyDefinition::new("lich_king", "Lich King", 120)
            .with_element(Element::Dark)
            .with_behavior(Magical)
            .with_tier(Boss)
            .with_rewards(180, 80, 180)
            .with_cards("eternal_darkness", 1)
            .with_cards("void_curse", 1)
            .with_cards("shadow_strike", 2)
            .with_cards("heal", 1),
        EnemyDefinition::new("titan", "Earth Titan", 200)
            .with_element(Element::Earth)
            .with_behavior(Defensive)
            .with_tier(Boss)
            .with_rewards(250, 150, 250)
            .with_cards("world_tree", 1)
            .with_cards("earthquake", 2)
            .with_cards("stone_wall", 2)
            .with_cards("strike", 1),
        EnemyDefinition::new("celestial", "Celestial Being", 100)
            .with_element(Element::Light)
            .with_behavior(Balanced)
            .with_tier(Boss)
            .with_rewards(300, 200, 350)
            .with_cards("celestial_judgment", 2)
            .with_cards("divine_light", 1)
            .with_cards("defend", 1)
            .with_cards("heal", 1),
    ]
}

pub(crate) fn starter_areas() -> Vec<EncounterTable> {
    use EnemyTier::*;

    vec![
        EncounterTable::new("forest")
            .with_name("Dark Forest")
            .with_enemies(Normal, &["goblin", "wolf", "slime"])
            .with_enemies(Elite, &["orc_warrior"])
            .with_enemies(Boss, &["titan"]),
        EncounterTable::new("caves")
            .with_name("Deep Caves")
            .with_enemies(Normal, &["bat", "skeleton", "slime"])
            .with_enemies(Elite, &["ice_golem", "dark_mage"])
            .with_enemies(Boss, &["lich_king"]),
        EncounterTable::new("volcano")
            .with_name("Volcanic Peak")
            .with_enemies(Normal, &["imp", "skeleton", "goblin"])
            .with_enemies(Elite, &["fire_elemental", "orc_warrior"])
            .with_enemies(Boss, &["dragon"]),
        EncounterTable::new("sanctuary")
            .with_name("Celestial Sanctuary")
            .with_enemies(Normal, &["imp", "skeleton"])
            .with_enemies(Elite, &["dark_mage", "fire_elemental", "ice_golem"])
            .with_enemies(Boss, &["celestial"]),
    ]
}

/// The deck a new player starts with: 5 strike, 4 defend, 2 spark, 1 heal.
#[must_use]
pub fn starter_deck() -> Vec<CardId> {
    [("strike", 5), ("defend", 4), ("spark", 2), ("heal", 1)]
        .into_iter()
        .flat_map(|(id, copies)| std::iter::repeat(CardId::new(id)).take(copies))
        .collect()
}
