//! Headless player for benches, tests and tooling.

use log::debug;

use super::controller::{BattleController, BattleOutcome};
use crate::core::{BattleError, InstanceId, RandomSource};

/// Plays the player's side of a battle without input.
///
/// Each turn it plays the hardest-hitting affordable card (most defense
/// breaks ties) until nothing is affordable, then ends the turn.
#[derive(Clone, Copy, Debug)]
pub struct AutoPilot {
    max_turns: u32,
    max_plays_per_turn: usize,
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self {
            max_turns: 100,
            max_plays_per_turn: 20,
        }
    }
}

impl AutoPilot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after this many turns even if nobody has won.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Cap card plays in one turn (cards that refund mana and draw can chain).
    #[must_use]
    pub fn with_max_plays_per_turn(mut self, plays: usize) -> Self {
        self.max_plays_per_turn = plays;
        self
    }

    /// The card this pilot would play now.
    #[must_use]
    pub fn choose<R: RandomSource>(&self, battle: &BattleController<R>) -> Option<InstanceId> {
        battle
            .playable_cards()
            .max_by_key(|c| (c.definition.base_damage, c.definition.base_defense))
            .map(|c| c.instance_id)
    }

    /// Play one full turn. Returns false once the battle is over.
    pub fn play_turn<R: RandomSource>(&self, battle: &mut BattleController<R>) -> bool {
        for _ in 0..self.max_plays_per_turn {
            let Some(id) = self.choose(battle) else {
                break;
            };
            match battle.play_card(id) {
                Ok(outcome) if outcome.result.is_some() => return false,
                Ok(_) => {}
                Err(_) => break,
            }
        }
        battle.end_player_turn().is_ok() && !battle.is_over()
    }

    /// Run a battle to completion, starting it if needed.
    ///
    /// Returns `None` if the turn cap is reached first.
    pub fn run<R: RandomSource>(
        &self,
        battle: &mut BattleController<R>,
    ) -> Result<Option<BattleOutcome>, BattleError> {
        if battle.turn() == 0 && !battle.is_over() {
            battle.start_battle()?;
        }
        while !battle.is_over() && battle.turn() <= self.max_turns {
            if !self.play_turn(battle) {
                break;
            }
        }
        if !battle.is_over() {
            debug!("autopilot gave up after {} turns", battle.turn());
        }
        Ok(battle.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Phase;
    use crate::core::{BattleConfig, BattleRng};
    use crate::data::{EnemyId, GameData};
    use crate::rewards::PlayerProgress;

    #[test]
    fn test_beats_a_slime() {
        let data = GameData::starter();
        let mut battle = BattleController::from_progress(
            &data,
            &PlayerProgress::starter("Hero"),
            &EnemyId::new("slime"),
            BattleConfig::default(),
            BattleRng::new(11),
        )
        .unwrap();

        let outcome = AutoPilot::new().run(&mut battle).unwrap().unwrap();
        assert_eq!(battle.phase(), outcome.result.phase());
        assert!(outcome.turns >= 1);
    }

    #[test]
    fn test_turn_cap() {
        let data = GameData::starter();
        let mut battle = BattleController::from_progress(
            &data,
            &PlayerProgress::starter("Hero"),
            &EnemyId::new("dragon"),
            BattleConfig::default(),
            BattleRng::new(5),
        )
        .unwrap();

        let outcome = AutoPilot::new().with_max_turns(1).run(&mut battle).unwrap();
        assert!(outcome.is_none());
        assert_eq!(battle.phase(), Phase::PlayerTurn);
        assert_eq!(battle.turn(), 2);
    }
}
