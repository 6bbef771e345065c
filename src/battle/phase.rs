//! Battle phase machine.

use serde::{Deserialize, Serialize};

/// One discrete state of a battle.
///
/// ```text
/// Idle -> PlayerTurn <-> EnemyTurn
///            |              |
///            +-> Victory / Defeat (terminal)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl Phase {
    /// Victory and defeat end the battle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    /// Whether the machine has an edge from `self` to `next`.
    ///
    /// Either side can win or lose during its own turn (damage over time
    /// ticks on the active combatant), so both turn phases reach both
    /// terminal phases. `Idle` only ever starts the player's turn.
    #[must_use]
    pub const fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::PlayerTurn)
                | (Self::PlayerTurn, Self::EnemyTurn)
                | (Self::EnemyTurn, Self::PlayerTurn)
                | (Self::PlayerTurn | Self::EnemyTurn, Self::Victory | Self::Defeat)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::PlayerTurn => "player turn",
            Self::EnemyTurn => "enemy turn",
            Self::Victory => "victory",
            Self::Defeat => "defeat",
        };
        f.write_str(name)
    }
}
