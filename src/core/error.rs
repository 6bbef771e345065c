//! Error taxonomy.
//!
//! - `BattleError`: configuration and setup problems, surfaced before the
//!   turn loop starts (unknown ids, empty decks, malformed data) and
//!   attempts to drive the phase machine along an edge it does not have.
//! - `ActionError`: a rejected player action. Battle state is unchanged.
//!
//! Running out of cards or filling the hand are not errors; the deck
//! reports them as `None`.

use thiserror::Error;

use crate::adversary::EnemyTier;
use crate::battle::Phase;
use crate::cards::CardId;
use crate::core::InstanceId;
use crate::data::EnemyId;

/// Setup, data and state-machine errors.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("unknown card '{0}'")]
    UnknownCard(CardId),

    #[error("unknown enemy '{0}'")]
    UnknownEnemy(EnemyId),

    #[error("card '{0}' is registered twice")]
    DuplicateCard(CardId),

    #[error("deck for '{owner}' is empty")]
    EmptyDeck { owner: String },

    #[error("invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("illegal phase transition {from:?} -> {to:?}")]
    IllegalTransition { from: Phase, to: Phase },

    #[error("no {tier:?} enemy available in area {area:?}")]
    NoEncounter { tier: EnemyTier, area: Option<String> },
}

/// Reasons a player action is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action requires phase {expected:?}, battle is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("{0} is not in hand")]
    CardNotInHand(InstanceId),

    #[error("not enough mana: need {required}, have {available}")]
    InsufficientMana { required: i32, available: i32 },

    #[error("player cannot act this turn")]
    CannotAct,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ActionError::InsufficientMana {
            required: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "not enough mana: need 3, have 1");

        let err = BattleError::UnknownCard(CardId::new("missing"));
        assert_eq!(err.to_string(), "unknown card 'missing'");

        let err = BattleError::NoEncounter {
            tier: EnemyTier::Boss,
            area: Some("swamp".into()),
        };
        assert_eq!(err.to_string(), "no Boss enemy available in area Some(\"swamp\")");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<u32, _> = serde_json::from_str("nope");
        let err: BattleError = parse.unwrap_err().into();
        assert!(matches!(err, BattleError::InvalidData(_)));
    }
}
