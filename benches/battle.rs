//! Benchmarks for full autopiloted battles and the hot engine paths.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deckbattle::battle::{AutoPilot, BattleController, Combatant};
use deckbattle::core::{BattleConfig, BattleRng};
use deckbattle::data::{EnemyId, GameData};
use deckbattle::effects::{Effect, EffectSpec, StatusEngine};
use deckbattle::rewards::{PlayerProgress, RewardResolver};

/// One seeded battle per iteration against each starter enemy.
fn benchmark_battles(c: &mut Criterion) {
    let data = GameData::starter();
    let hero = PlayerProgress::starter("Hero");
    let pilot = AutoPilot::new().with_max_turns(50);

    let mut group = c.benchmark_group("Battle");
    for enemy in ["slime", "goblin", "ice_golem", "dragon"] {
        let enemy = EnemyId::new(enemy);
        let mut seed = 0u64;
        group.bench_with_input(BenchmarkId::new("autopilot", &enemy), &enemy, |b, enemy| {
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let mut battle = BattleController::from_progress(
                    &data,
                    &hero,
                    enemy,
                    BattleConfig::default(),
                    BattleRng::new(seed),
                )
                .unwrap();
                black_box(pilot.run(&mut battle).unwrap())
            });
        });
    }
    group.finish();
}

/// Snapshotting mid-battle should stay cheap thanks to structural sharing.
fn benchmark_snapshot(c: &mut Criterion) {
    let data = GameData::starter();
    let mut battle = BattleController::from_progress(
        &data,
        &PlayerProgress::starter("Hero"),
        &EnemyId::new("dragon"),
        BattleConfig::default(),
        BattleRng::new(3),
    )
    .unwrap();
    battle.start_battle().unwrap();

    c.bench_function("snapshot", |b| b.iter(|| black_box(battle.snapshot())));
}

fn benchmark_status_effects(c: &mut Criterion) {
    let specs = [
        EffectSpec::persistent(Effect::Burn { damage: 2 }, 3),
        EffectSpec::persistent(Effect::Poison { damage: 3 }, 3),
        EffectSpec::persistent(Effect::Regeneration { amount: 4 }, 3),
        EffectSpec::persistent(Effect::Weakened { multiplier: 0.75 }, 2),
    ];

    c.bench_function("apply_and_tick", |b| {
        b.iter(|| {
            let mut target = Combatant::player("Target", 200, 10, 1);
            for spec in &specs {
                StatusEngine::apply(&mut target, spec);
            }
            for _ in 0..4 {
                black_box(StatusEngine::process_start_of_turn(&mut target));
            }
        });
    });
}

fn benchmark_rewards(c: &mut Criterion) {
    let data = GameData::starter();
    let config = BattleConfig::default();
    let Some(dragon) = data.enemies.get(&EnemyId::new("dragon")) else {
        return;
    };
    let mut rng = BattleRng::new(9);

    c.bench_function("resolve_rewards", |b| {
        b.iter(|| black_box(RewardResolver::resolve(dragon, &data.cards, &config, &mut rng)));
    });
}

criterion_group!(
    benches,
    benchmark_battles,
    benchmark_snapshot,
    benchmark_status_effects,
    benchmark_rewards
);
criterion_main!(benches);
