//! Draw pile, hand and discard pile for one combatant.
//!
//! Cards only ever move between the three piles, so the total card count is
//! fixed for the life of a battle. Piles are `im::Vector`s: snapshots handed
//! to the presentation layer are O(1) clones.
//!
//! The draw pile is ordered with its top at the end, matching how
//! a stack: pushing and popping both work on the top card.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{BattleConfig, InstanceId, RandomSource};

/// Pile sizes, for display and invariant checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCounts {
    pub draw: usize,
    pub hand: usize,
    pub discard: usize,
}

impl DeckCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw + self.hand + self.discard
    }
}

/// A combatant's cards for one battle.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use deckbattle::cards::{CardCategory, CardDefinition, CardInstance};
/// use deckbattle::core::{BattleConfig, BattleRng, InstanceId};
/// use deckbattle::deck::Deck;
///
/// let strike = Arc::new(CardDefinition::new("strike", "Strike", CardCategory::Attack));
/// let cards = (0..10).map(|i| CardInstance::new(InstanceId(i), strike.clone())).collect();
///
/// let mut rng = BattleRng::new(7);
/// let mut deck = Deck::new(cards, &BattleConfig::default(), &mut rng);
///
/// let drawn = deck.draw_starting_hand(&mut rng);
/// assert_eq!(drawn.len(), 5);
/// assert_eq!(deck.counts().total(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vector<CardInstance>,
    hand: Vector<CardInstance>,
    discard_pile: Vector<CardInstance>,
    max_hand_size: usize,
    starting_hand_size: usize,
}

impl Deck {
    /// Build a deck from fresh instances and shuffle it.
    pub fn new<R: RandomSource>(cards: Vec<CardInstance>, config: &BattleConfig, rng: &mut R) -> Self {
        let mut deck = Self {
            draw_pile: cards.into_iter().collect(),
            hand: Vector::new(),
            discard_pile: Vector::new(),
            max_hand_size: config.max_hand_size,
            starting_hand_size: config.starting_hand_size,
        };
        deck.shuffle(rng);
        deck
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        let mut cards: Vec<_> = self.draw_pile.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw_pile = cards.into_iter().collect();
    }

    /// Move the top card of the draw pile into the hand.
    ///
    /// An empty draw pile is refilled from the discard pile first. Returns
    /// `None` without touching any pile if both are empty or the hand is full.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Option<CardInstance> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                debug!("draw: both piles empty");
                return None;
            }
            self.reshuffle_discard_into_draw(rng);
        }

        if self.hand.len() >= self.max_hand_size {
            debug!("draw: hand full ({} cards)", self.hand.len());
            return None;
        }

        let card = self.draw_pile.pop_back()?;
        self.hand.push_back(card.clone());
        Some(card)
    }

    /// Draw up to `count` cards, keeping only the successful draws.
    pub fn draw_multiple<R: RandomSource>(&mut self, count: usize, rng: &mut R) -> Vec<CardInstance> {
        (0..count).filter_map(|_| self.draw(rng)).collect()
    }

    /// Draw the configured opening hand.
    pub fn draw_starting_hand<R: RandomSource>(&mut self, rng: &mut R) -> Vec<CardInstance> {
        self.draw_multiple(self.starting_hand_size, rng)
    }

    /// Move a played card from hand to the discard pile.
    pub fn play(&mut self, id: InstanceId) -> Option<CardInstance> {
        self.discard(id)
    }

    /// Move a card from hand to the discard pile without resolving anything.
    pub fn discard(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.instance_id == id)?;
        let mut card = self.hand.remove(index);
        card.deselect();
        self.discard_pile.push_back(card.clone());
        Some(card)
    }

    /// Discard `count` random cards from hand.
    pub fn discard_random<R: RandomSource>(&mut self, count: usize, rng: &mut R) -> Vec<CardInstance> {
        let mut discarded = Vec::new();
        for _ in 0..count {
            if self.hand.is_empty() {
                break;
            }
            let index = rng.gen_index(self.hand.len());
            let id = self.hand[index].instance_id;
            discarded.extend(self.discard(id));
        }
        discarded
    }

    /// Move the whole hand to the discard pile. Returns how many cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        for mut card in std::mem::take(&mut self.hand) {
            card.deselect();
            self.discard_pile.push_back(card);
        }
        count
    }

    /// Shuffle the discard pile into the draw pile.
    ///
    /// Called with an empty draw pile (the normal case) this makes the
    /// shuffled discard pile the new draw pile. Any cards still in the draw
    /// pile are shuffled in with it.
    pub fn reshuffle_discard_into_draw<R: RandomSource>(&mut self, rng: &mut R) {
        debug!(
            "reshuffling {} discarded cards into draw pile of {}",
            self.discard_pile.len(),
            self.draw_pile.len()
        );
        let discarded = std::mem::take(&mut self.discard_pile);
        self.draw_pile.append(discarded);
        self.shuffle(rng);
    }

    #[must_use]
    pub fn counts(&self) -> DeckCounts {
        DeckCounts {
            draw: self.draw_pile.len(),
            hand: self.hand.len(),
            discard: self.discard_pile.len(),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardInstance> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardInstance> {
        &self.discard_pile
    }

    #[must_use]
    pub fn find_in_hand(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == id)
    }

    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Recompute every hand card's playable flag.
    pub fn refresh_playable(&mut self, current_mana: i32) {
        for card in self.hand.iter_mut() {
            card.refresh_playable(current_mana);
        }
    }

    /// Mark one hand card selected and clear the rest. Returns false if absent.
    pub fn select(&mut self, id: InstanceId) -> bool {
        let mut found = false;
        for card in self.hand.iter_mut() {
            if card.instance_id == id {
                card.select();
                found = true;
            } else {
                card.deselect();
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCategory, CardDefinition};
    use crate::core::BattleRng;
    use std::sync::Arc;

    fn cards(n: u32) -> Vec<CardInstance> {
        let def = Arc::new(CardDefinition::new("strike", "Strike", CardCategory::Attack));
        (0..n).map(|i| CardInstance::new(InstanceId(i), def.clone())).collect()
    }

    fn deck(n: u32, config: &BattleConfig, rng: &mut BattleRng) -> Deck {
        Deck::new(cards(n), config, rng)
    }

    #[test]
    fn test_new_deck_all_in_draw_pile() {
        let mut rng = BattleRng::new(1);
        let deck = deck(10, &BattleConfig::default(), &mut rng);
        assert_eq!(deck.counts(), DeckCounts { draw: 10, hand: 0, discard: 0 });
    }

    #[test]
    fn test_draw_takes_top() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(5, &BattleConfig::default(), &mut rng);
        let top = deck.draw_pile().back().map(|c| c.instance_id);

        let drawn = deck.draw(&mut rng).unwrap();
        assert_eq!(Some(drawn.instance_id), top);
        assert!(deck.find_in_hand(drawn.instance_id).is_some());
    }

    #[test]
    fn test_draw_empty_is_noop() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(0, &BattleConfig::default(), &mut rng);
        assert!(deck.draw(&mut rng).is_none());
        assert_eq!(deck.counts().total(), 0);
    }

    #[test]
    fn test_hand_full_does_not_consume() {
        let mut rng = BattleRng::new(1);
        let config = BattleConfig::default().with_max_hand_size(3);
        let mut deck = deck(10, &config, &mut rng);

        assert_eq!(deck.draw_multiple(5, &mut rng).len(), 3);
        assert_eq!(deck.counts(), DeckCounts { draw: 7, hand: 3, discard: 0 });
        assert!(deck.draw(&mut rng).is_none());
        assert_eq!(deck.counts().draw, 7);
    }

    #[test]
    fn test_reshuffle_on_empty_draw() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(3, &BattleConfig::default(), &mut rng);
        let hand = deck.draw_multiple(3, &mut rng);
        for card in &hand {
            deck.play(card.instance_id).unwrap();
        }
        assert_eq!(deck.counts(), DeckCounts { draw: 0, hand: 0, discard: 3 });

        assert!(deck.draw(&mut rng).is_some());
        assert_eq!(deck.counts(), DeckCounts { draw: 2, hand: 1, discard: 0 });
    }

    #[test]
    fn test_play_unknown_is_none() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(3, &BattleConfig::default(), &mut rng);
        deck.draw(&mut rng);
        assert!(deck.play(InstanceId(99)).is_none());
        assert_eq!(deck.counts(), DeckCounts { draw: 2, hand: 1, discard: 0 });
    }

    #[test]
    fn test_discard_hand() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(6, &BattleConfig::default(), &mut rng);
        deck.draw_multiple(4, &mut rng);

        assert_eq!(deck.discard_hand(), 4);
        assert_eq!(deck.counts(), DeckCounts { draw: 2, hand: 0, discard: 4 });
    }

    #[test]
    fn test_discard_random_bounded_by_hand() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(6, &BattleConfig::default(), &mut rng);
        deck.draw_multiple(2, &mut rng);

        assert_eq!(deck.discard_random(5, &mut rng).len(), 2);
        assert_eq!(deck.counts(), DeckCounts { draw: 4, hand: 0, discard: 2 });
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut rng = BattleRng::new(1);
        let mut deck = deck(4, &BattleConfig::default(), &mut rng);
        let hand = deck.draw_multiple(2, &mut rng);

        assert!(deck.select(hand[0].instance_id));
        assert!(deck.select(hand[1].instance_id));
        assert!(!deck.find_in_hand(hand[0].instance_id).unwrap().is_selected);
        assert!(deck.find_in_hand(hand[1].instance_id).unwrap().is_selected);
        assert!(!deck.select(InstanceId(99)));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = BattleRng::new(5);
        let mut b = BattleRng::new(5);
        let da = deck(20, &BattleConfig::default(), &mut a);
        let db = deck(20, &BattleConfig::default(), &mut b);

        let ia: Vec<_> = da.draw_pile().iter().map(|c| c.instance_id).collect();
        let ib: Vec<_> = db.draw_pile().iter().map(|c| c.instance_id).collect();
        assert_eq!(ia, ib);
    }

    /// The draw pile is permuted exactly as the source shuffles a slice.
    #[test]
    fn test_shuffle_follows_random_source() {
        let config = BattleConfig::default();
        let mut expected: Vec<_> = cards(8).into_iter().map(|c| c.instance_id).collect();
        BattleRng::new(11).shuffle(&mut expected);

        let deck = Deck::new(cards(8), &config, &mut BattleRng::new(11));
        let actual: Vec<_> = deck.draw_pile().iter().map(|c| c.instance_id).collect();
        assert_eq!(actual, expected);
    }
}
