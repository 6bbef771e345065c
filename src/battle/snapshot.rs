//! Read-only battle views.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::phase::Phase;
use crate::cards::CardInstance;
use crate::deck::DeckCounts;

/// Everything the presentation layer renders, captured at one moment.
///
/// Cheap to take: the hand is a persistent vector and combatants hold at
/// most a handful of effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub turn: u32,
    /// False during a player turn lost to frozen or stunned.
    pub can_act: bool,
    pub player: Combatant,
    pub enemy: Combatant,
    pub hand: Vector<CardInstance>,
    pub player_counts: DeckCounts,
    pub enemy_counts: DeckCounts,
}
