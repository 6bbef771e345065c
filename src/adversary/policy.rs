//! Adversary card selection.
//!
//! Policies are trait-based so the controller can be handed a different
//! decision module:
//! - `HeuristicPolicy`: behavior-profile heuristics (the default)
//! - `FirstCardPolicy`: always plays the first card in hand

use im::Vector;

use super::behavior::AiBehavior;
use crate::battle::Combatant;
use crate::cards::{CardCategory, CardInstance};
use crate::core::{InstanceId, RandomSource};
use crate::effects::EffectKind;

/// Weight of missing hp in the balanced profile's defend roll.
pub const BALANCED_DEFEND_WEIGHT: f64 = 0.7;

/// hp fraction below which the defensive profile turtles.
pub const DEFENSIVE_HP_THRESHOLD: f64 = 0.5;

/// Everything a policy may look at.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub behavior: AiBehavior,
    pub hand: &'a Vector<CardInstance>,
    pub enemy: &'a Combatant,
    pub player: &'a Combatant,
}

/// Chooses which card the enemy plays.
pub trait AdversaryPolicy: Send + Sync {
    /// Pick a card from `ctx.hand`. `None` only when the hand is empty.
    fn select(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RandomSource) -> Option<InstanceId>;
}

/// Always the first card in hand.
#[derive(Clone, Debug, Default)]
pub struct FirstCardPolicy;

impl AdversaryPolicy for FirstCardPolicy {
    fn select(&self, ctx: &DecisionContext<'_>, _rng: &mut dyn RandomSource) -> Option<InstanceId> {
        ctx.hand.front().map(|c| c.instance_id)
    }
}

/// Behavior-profile heuristics.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl AdversaryPolicy for HeuristicPolicy {
    fn select(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RandomSource) -> Option<InstanceId> {
        let hand = ctx.hand;
        let first = hand.front()?;

        let chosen = match ctx.behavior {
            AiBehavior::Aggressive => strongest_attack(hand),
            AiBehavior::Defensive => {
                let turtle = if ctx.enemy.hp_fraction() < DEFENSIVE_HP_THRESHOLD {
                    best_defense(hand)
                } else {
                    None
                };
                turtle.or_else(|| hand.iter().find(|c| c.definition.deals_damage()))
            }
            AiBehavior::Magical => first_with(hand, |k| k.is_control())
                .or_else(|| first_with(hand, |k| k.is_damage_over_time()))
                .or_else(|| hand.iter().find(|c| !c.definition.effects.is_empty()))
                .or_else(|| strongest_attack(hand)),
            AiBehavior::Balanced => {
                let defend_chance = (1.0 - ctx.enemy.hp_fraction()) * BALANCED_DEFEND_WEIGHT;
                let defend = if rng.gen_bool(defend_chance) {
                    hand.iter().find(|c| c.definition.base_defense > 0)
                } else {
                    None
                };
                defend.or_else(|| random_attack(hand, rng))
            }
        };

        Some(chosen.unwrap_or(first).instance_id)
    }
}

/// First card (in hand order) with the greatest key among those passing `keep`.
fn best_by<'a>(
    hand: &'a Vector<CardInstance>,
    keep: impl Fn(&CardInstance) -> bool,
    key: impl Fn(&CardInstance) -> i32,
) -> Option<&'a CardInstance> {
    let mut best: Option<(&CardInstance, i32)> = None;
    for card in hand.iter().filter(|c| keep(c)) {
        let value = key(card);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((card, value));
        }
    }
    best.map(|(card, _)| card)
}

fn strongest_attack(hand: &Vector<CardInstance>) -> Option<&CardInstance> {
    best_by(hand, |c| c.definition.deals_damage(), |c| c.definition.base_damage)
}

/// Highest declared defense among cards with defense or of the defense
/// category, so a zero-defense guard card still counts.
fn best_defense(hand: &Vector<CardInstance>) -> Option<&CardInstance> {
    best_by(
        hand,
        |c| c.definition.base_defense > 0 || c.definition.category == CardCategory::Defense,
        |c| c.definition.base_defense,
    )
}

fn first_with(hand: &Vector<CardInstance>, wanted: impl Fn(EffectKind) -> bool) -> Option<&CardInstance> {
    hand.iter()
        .find(|c| c.definition.effects.iter().any(|spec| wanted(spec.kind())))
}

fn random_attack<'a>(
    hand: &'a Vector<CardInstance>,
    rng: &mut dyn RandomSource,
) -> Option<&'a CardInstance> {
    let attacks: Vec<&CardInstance> = hand.iter().filter(|c| c.definition.deals_damage()).collect();
    if attacks.is_empty() {
        return None;
    }
    Some(attacks[rng.gen_index(attacks.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;
    use crate::core::ScriptedRng;
    use crate::effects::{Effect, EffectSpec};
    use std::sync::Arc;

    fn card(id: u32, def: CardDefinition) -> CardInstance {
        CardInstance::new(InstanceId(id), Arc::new(def))
    }

    fn hand() -> Vector<CardInstance> {
        Vector::from(vec![
            card(0, CardDefinition::new("buff", "Buff", CardCategory::Support).with_effect(
                EffectSpec::persistent(Effect::Strengthened { multiplier: 1.5 }, 2),
            )),
            card(1, CardDefinition::new("jab", "Jab", CardCategory::Attack).with_damage(3)),
            card(2, CardDefinition::new("smash", "Smash", CardCategory::Attack).with_damage(9)),
            card(3, CardDefinition::new("wall", "Wall", CardCategory::Defense).with_defense(8)),
            card(4, CardDefinition::new("venom", "Venom", CardCategory::Magic)
                .with_damage(2)
                .with_effect(EffectSpec::persistent(Effect::Poison { damage: 3 }, 3))),
            card(5, CardDefinition::new("freeze", "Freeze", CardCategory::Magic)
                .with_effect(EffectSpec::persistent(Effect::Frozen, 1))),
        ])
    }

    fn select(behavior: AiBehavior, hand: &Vector<CardInstance>, enemy_hp: i32, rolls: &[f64]) -> Option<InstanceId> {
        let enemy = Combatant::player("Foe", 100, 0, 0).with_hp(enemy_hp);
        let player = Combatant::player("Hero", 100, 10, 3);
        let ctx = DecisionContext {
            behavior,
            hand,
            enemy: &enemy,
            player: &player,
        };
        let mut rng = ScriptedRng::new(rolls.iter().copied());
        HeuristicPolicy.select(&ctx, &mut rng)
    }

    #[test]
    fn test_aggressive_picks_highest_damage() {
        assert_eq!(select(AiBehavior::Aggressive, &hand(), 100, &[]), Some(InstanceId(2)));
    }

    #[test]
    fn test_aggressive_falls_back_to_first() {
        let hand = Vector::from(vec![
            card(7, CardDefinition::new("wall", "Wall", CardCategory::Defense).with_defense(5)),
            card(8, CardDefinition::new("idle", "Idle", CardCategory::Support)),
        ]);
        assert_eq!(select(AiBehavior::Aggressive, &hand, 100, &[]), Some(InstanceId(7)));
    }

    #[test]
    fn test_defensive_turtles_when_hurt() {
        assert_eq!(select(AiBehavior::Defensive, &hand(), 40, &[]), Some(InstanceId(3)));
        // healthy: the first attack in hand, not the strongest
        assert_eq!(select(AiBehavior::Defensive, &hand(), 60, &[]), Some(InstanceId(1)));
    }

    /// A defense card with no declared defense still counts as a defense.
    #[test]
    fn test_defensive_accepts_zero_defense_guard() {
        let hand = Vector::from(vec![
            card(1, CardDefinition::new("jab", "Jab", CardCategory::Attack).with_damage(3)),
            card(2, CardDefinition::new("brace", "Brace", CardCategory::Defense).with_effect(
                EffectSpec::persistent(Effect::Regeneration { amount: 2 }, 2),
            )),
        ]);
        assert_eq!(select(AiBehavior::Defensive, &hand, 40, &[]), Some(InstanceId(2)));
    }

    /// Highest defense wins; an earlier card wins a tie.
    #[test]
    fn test_defensive_prefers_highest_defense() {
        let hand = Vector::from(vec![
            card(1, CardDefinition::new("brace", "Brace", CardCategory::Defense)),
            card(2, CardDefinition::new("bulwark", "Bulwark", CardCategory::Relic).with_defense(6)),
            card(3, CardDefinition::new("wall", "Wall", CardCategory::Defense).with_defense(6)),
        ]);
        assert_eq!(select(AiBehavior::Defensive, &hand, 10, &[]), Some(InstanceId(2)));
    }

    #[test]
    fn test_magical_prefers_control_then_dot() {
        assert_eq!(select(AiBehavior::Magical, &hand(), 100, &[]), Some(InstanceId(5)));

        let no_control: Vector<_> = hand().into_iter().filter(|c| c.instance_id != InstanceId(5)).collect();
        assert_eq!(select(AiBehavior::Magical, &no_control, 100, &[]), Some(InstanceId(4)));
    }

    #[test]
    fn test_balanced_full_hp_attacks() {
        // full hp: defend chance 0, the single roll picks among 3 attacks
        let picked = select(AiBehavior::Balanced, &hand(), 100, &[0.0]);
        assert_eq!(picked, Some(InstanceId(1)));
    }

    #[test]
    fn test_balanced_hurt_can_defend() {
        // 10% hp: defend chance 0.63, roll 0.1 defends
        assert_eq!(select(AiBehavior::Balanced, &hand(), 10, &[0.1]), Some(InstanceId(3)));
    }

    /// Balanced takes the first card with defense, not the biggest one.
    #[test]
    fn test_balanced_defends_with_first_defense_card() {
        let hand = Vector::from(vec![
            card(1, CardDefinition::new("jab", "Jab", CardCategory::Attack).with_damage(3)),
            card(2, CardDefinition::new("parry", "Parry", CardCategory::Defense).with_defense(2)),
            card(3, CardDefinition::new("wall", "Wall", CardCategory::Defense).with_defense(9)),
        ]);
        assert_eq!(select(AiBehavior::Balanced, &hand, 10, &[0.1]), Some(InstanceId(2)));
    }

    #[test]
    fn test_empty_hand() {
        let empty = Vector::new();
        assert_eq!(select(AiBehavior::Aggressive, &empty, 100, &[]), None);
    }

    #[test]
    fn test_first_card_policy() {
        let hand = hand();
        let enemy = Combatant::player("Foe", 100, 0, 0);
        let player = Combatant::player("Hero", 100, 10, 3);
        let ctx = DecisionContext {
            behavior: AiBehavior::Aggressive,
            hand: &hand,
            enemy: &enemy,
            player: &player,
        };
        let mut rng = ScriptedRng::default();
        assert_eq!(FirstCardPolicy.select(&ctx, &mut rng), Some(InstanceId(0)));
    }
}
