//! Persistent player record between battles.

use log::info;
use serde::{Deserialize, Serialize};

use super::resolver::Rewards;
use crate::battle::Combatant;
use crate::cards::CardId;
use crate::core::BattleConfig;
use crate::data::starter_deck;

pub const STARTING_HP: i32 = 100;
pub const STARTING_MAX_MANA: i32 = 10;
/// Mana in hand when a battle opens, before turn 1 regenerates.
pub const STARTING_MANA: i32 = 3;
pub const STARTING_MANA_PER_TURN: i32 = 1;
pub const STARTING_XP_TO_NEXT: u32 = 100;

/// Level, stats, gold and cards carried from battle to battle.
///
/// `deck` is the list a battle deck is built from; `collection` is every
/// card owned, deck cards included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub max_mana: i32,
    #[serde(default = "default_starting_mana")]
    pub starting_mana: i32,
    pub mana_per_turn: i32,
    pub gold: u32,
    pub deck: Vec<CardId>,
    pub collection: Vec<CardId>,
}

impl PlayerProgress {
    /// A level 1 player with no cards.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            xp: 0,
            xp_to_next: STARTING_XP_TO_NEXT,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            max_mana: STARTING_MAX_MANA,
            starting_mana: STARTING_MANA,
            mana_per_turn: STARTING_MANA_PER_TURN,
            gold: 0,
            deck: Vec::new(),
            collection: Vec::new(),
        }
    }

    /// A level 1 player owning and using the starter deck.
    #[must_use]
    pub fn starter(name: impl Into<String>) -> Self {
        Self::new(name).with_deck(starter_deck())
    }

    /// Replace the deck; every card in it becomes owned.
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<CardId>) -> Self {
        self.collection = deck.clone();
        self.deck = deck;
        self
    }

    /// The battle participant for these stats.
    #[must_use]
    pub fn combatant(&self) -> Combatant {
        Combatant::player(self.name.clone(), self.max_hp, self.max_mana, self.mana_per_turn)
            .with_starting_mana(self.starting_mana)
    }

    /// Bank a victory. Returns the number of levels gained.
    pub fn apply_rewards(&mut self, rewards: &Rewards, config: &BattleConfig) -> u32 {
        self.gold = self.gold.saturating_add(rewards.gold);
        self.collection
            .extend(rewards.cards.iter().map(|card| card.id.clone()));
        self.gain_xp(rewards.xp, config)
    }

    /// Add xp and level up as many times as it covers.
    ///
    /// Each level raises max hp, heals fully and grows the next threshold
    /// by `config.xp_growth` (rounded down). Leftover xp carries over.
    pub fn gain_xp(&mut self, amount: u32, config: &BattleConfig) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut levels = 0;
        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.max_hp += config.hp_per_level;
            self.hp = self.max_hp;
            let next = (f64::from(self.xp_to_next) * config.xp_growth).floor();
            self.xp_to_next = (next as u32).max(1);
            levels += 1;
            info!("{} reached level {}", self.name, self.level);
        }
        levels
    }

    /// Copies of `card` owned.
    #[must_use]
    pub fn owned(&self, card: &CardId) -> usize {
        self.collection.iter().filter(|c| *c == card).count()
    }

    /// Copies of `card` in the deck.
    #[must_use]
    pub fn in_deck(&self, card: &CardId) -> usize {
        self.deck.iter().filter(|c| *c == card).count()
    }

    /// Put an owned copy of `card` into the deck.
    ///
    /// Returns false if every owned copy is already in the deck.
    pub fn add_to_deck(&mut self, card: &CardId) -> bool {
        if self.in_deck(card) >= self.owned(card) {
            return false;
        }
        self.deck.push(card.clone());
        true
    }

    /// Take one copy of `card` out of the deck. It stays in the collection.
    pub fn remove_from_deck(&mut self, card: &CardId) -> bool {
        match self.deck.iter().position(|c| c == card) {
            Some(index) => {
                self.deck.remove(index);
                true
            }
            None => false,
        }
    }
}

fn default_starting_mana() -> i32 {
    STARTING_MANA
}
