//! Status effect engine tests.
//!
//! These tests verify stacking, start-of-turn resolution, shields and the
//! elemental damage model.

use deckbattle::affinity::{AffinityTable, Element};
use deckbattle::battle::Combatant;
use deckbattle::cards::{CardCategory, CardDefinition};
use deckbattle::effects::{Effect, EffectKind, EffectSpec, ShieldResult, StatusEngine};
use proptest::prelude::*;

fn target() -> Combatant {
    Combatant::player("Target", 100, 10, 3)
}

fn poison(damage: i32, duration: i32) -> EffectSpec {
    EffectSpec::persistent(Effect::Poison { damage }, duration)
}

/// Poison 3 and poison 5 stack into one poison 8 with the longer duration.
#[test]
fn test_poison_stacks() {
    let mut target = target();
    StatusEngine::apply(&mut target, &poison(3, 2));
    StatusEngine::apply(&mut target, &poison(5, 4));

    assert_eq!(target.effects().len(), 1);
    let stored = target.effect(EffectKind::Poison).unwrap();
    assert_eq!(stored.effect, Effect::Poison { damage: 8 });
    assert_eq!(stored.duration, 4);
}

/// Non damage-over-time kinds keep their value and take the longer duration.
#[test]
fn test_strengthened_keeps_value() {
    let mut target = target();
    let strong = |multiplier, duration| {
        EffectSpec::persistent(Effect::Strengthened { multiplier }, duration)
    };
    StatusEngine::apply(&mut target, &strong(1.5, 1));
    StatusEngine::apply(&mut target, &strong(2.0, 3));

    let stored = target.effect(EffectKind::Strengthened).unwrap();
    assert_eq!(stored.effect, Effect::Strengthened { multiplier: 1.5 });
    assert_eq!(stored.duration, 3);
}

/// Poison 5 deals 5, 6, 8 over three turns and is then removed.
#[test]
fn test_poison_grows_then_expires() {
    let mut target = target();
    StatusEngine::apply(&mut target, &poison(5, 3));

    let mut dealt = Vec::new();
    for _ in 0..3 {
        dealt.push(StatusEngine::process_start_of_turn(&mut target).damage);
    }

    assert_eq!(dealt, vec![5, 6, 8]);
    assert_eq!(target.hp(), 100 - 19);
    assert!(!target.has_effect(EffectKind::Poison));
}

/// A shield of 5 facing 8 damage absorbs 5, passes 3 and breaks.
#[test]
fn test_shield_breaks() {
    let mut target = target();
    StatusEngine::apply(
        &mut target,
        &EffectSpec::persistent(Effect::Shield { amount: 5 }, 1),
    );

    let result = StatusEngine::consume_shield(&mut target, 8);
    assert_eq!(result, ShieldResult { absorbed: 5, remaining: 3 });
    assert!(!target.has_effect(EffectKind::Shield));
}

/// Stunned blocks the turn and decays like any other effect.
#[test]
fn test_stun_skips_one_turn() {
    let mut target = target();
    StatusEngine::apply(&mut target, &EffectSpec::persistent(Effect::Stunned, 1));

    assert!(!StatusEngine::process_start_of_turn(&mut target).can_act);
    assert!(StatusEngine::process_start_of_turn(&mut target).can_act);
}

/// Damage over time cannot push hp below zero.
#[test]
fn test_dot_clamps_at_zero() {
    let mut target = Combatant::player("Target", 10, 0, 0).with_hp(3);
    StatusEngine::apply(&mut target, &EffectSpec::persistent(Effect::Burn { damage: 7 }, 2));

    let resolution = StatusEngine::process_start_of_turn(&mut target);
    assert_eq!(resolution.damage, 3);
    assert_eq!(target.hp(), 0);
}

/// Fire beats Earth, loses to Water, is neutral to Air.
#[test]
fn test_fire_affinity() {
    let table = AffinityTable::standard();
    assert_eq!(table.modifier(Element::Fire, Element::Earth), 1.5);
    assert_eq!(table.modifier(Element::Fire, Element::Water), 0.5);
    assert_eq!(table.modifier(Element::Fire, Element::Air), 1.0);
}

/// Light and Dark hit each other for 1.5x.
#[test]
fn test_light_dark_mutual() {
    let table = AffinityTable::standard();
    assert_eq!(table.modifier(Element::Light, Element::Dark), 1.5);
    assert_eq!(table.modifier(Element::Dark, Element::Light), 1.5);
    assert_eq!(table.modifier(Element::Neutral, Element::Dark), 1.0);
}

/// Card damage floors after affinity and modifiers.
#[test]
fn test_card_damage_floors() {
    let table = AffinityTable::standard();
    let fireball = CardDefinition::new("fireball", "Fireball", CardCategory::Magic)
        .with_element(Element::Fire)
        .with_damage(7);

    assert_eq!(fireball.calculate_damage(Element::Earth, 1.0, &table), 10);
    assert_eq!(fireball.calculate_damage(Element::Water, 1.0, &table), 3);
    assert_eq!(fireball.calculate_damage(Element::Air, 0.75, &table), 5);
}

fn stackable() -> impl Strategy<Value = (EffectKind, Effect)> {
    prop_oneof![
        (1i32..20).prop_map(|d| (EffectKind::Burn, Effect::Burn { damage: d })),
        (1i32..20).prop_map(|d| (EffectKind::Poison, Effect::Poison { damage: d })),
        (1i32..20).prop_map(|a| (EffectKind::Regeneration, Effect::Regeneration { amount: a })),
        Just((EffectKind::Frozen, Effect::Frozen)),
    ]
}

proptest! {
    /// One entry per kind, longest duration wins, only burn and poison sum.
    #[test]
    fn prop_merge_rule(
        applications in prop::collection::vec((stackable(), 1i32..6), 1..12),
    ) {
        let mut target = target();
        for ((_, effect), duration) in &applications {
            StatusEngine::apply(&mut target, &EffectSpec::persistent(*effect, *duration));
        }

        for kind in [EffectKind::Burn, EffectKind::Poison, EffectKind::Regeneration, EffectKind::Frozen] {
            let applied: Vec<_> = applications.iter().filter(|((k, _), _)| *k == kind).collect();
            let stored: Vec<_> = target.effects().iter().filter(|e| e.kind() == kind).collect();

            if applied.is_empty() {
                prop_assert!(stored.is_empty());
                continue;
            }
            prop_assert_eq!(stored.len(), 1);

            let longest = applied.iter().map(|(_, d)| *d).max().unwrap_or(0);
            prop_assert_eq!(stored[0].duration, longest);

            let ((_, first), _) = applied[0];
            let first = first.magnitude();
            let total: f64 = applied.iter().map(|((_, e), _)| e.magnitude()).sum();
            let expected = if kind.is_damage_over_time() { total } else { first };
            prop_assert_eq!(stored[0].effect.magnitude(), expected);
        }
    }
}
