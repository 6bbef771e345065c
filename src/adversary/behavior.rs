//! Enemy behavior profiles and encounter tiers.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Chance an elite enemy gets a second action in a turn.
pub const ELITE_EXTRA_ACTION_CHANCE: f64 = 0.3;

/// Bosses use their special ability every this many turns.
pub const BOSS_SPECIAL_INTERVAL: u32 = 3;

/// How an enemy picks its card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiBehavior {
    /// Always the hardest hitter.
    Aggressive,
    /// Turtles when below half hp.
    Defensive,
    /// Control first, then damage over time.
    Magical,
    /// Defends more the more hurt it is, otherwise attacks at random.
    #[default]
    Balanced,
}

/// Encounter strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyTier {
    #[default]
    Normal,
    Elite,
    Boss,
}

impl EnemyTier {
    /// Actions this enemy takes in a turn.
    ///
    /// Normal: 1. Elite: 1, with a 30% chance of 2. Boss: always 2.
    /// The elite roll only consumes randomness for elites.
    pub fn actions_per_turn(self, rng: &mut dyn RandomSource) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Elite => {
                if rng.gen_bool(ELITE_EXTRA_ACTION_CHANCE) {
                    2
                } else {
                    1
                }
            }
            Self::Boss => 2,
        }
    }

    /// Whether a boss special ability fires on this turn (every third turn).
    #[must_use]
    pub fn special_ability_ready(self, turn: u32) -> bool {
        matches!(self, Self::Boss) && turn > 0 && turn % BOSS_SPECIAL_INTERVAL == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_actions_per_turn() {
        let mut low = ScriptedRng::new([0.1]);
        let mut high = ScriptedRng::new([0.9]);

        assert_eq!(EnemyTier::Normal.actions_per_turn(&mut low), 1);
        assert_eq!(EnemyTier::Boss.actions_per_turn(&mut high), 2);
        assert_eq!(EnemyTier::Elite.actions_per_turn(&mut low), 2);
        assert_eq!(EnemyTier::Elite.actions_per_turn(&mut high), 1);
        assert_eq!(low.consumed(), 1);
    }

    #[test]
    fn test_special_every_third_turn() {
        let ready: Vec<_> = (0..=9)
            .filter(|&t| EnemyTier::Boss.special_ability_ready(t))
            .collect();
        assert_eq!(ready, vec![3, 6, 9]);
        assert!(!EnemyTier::Elite.special_ability_ready(3));
    }
}
