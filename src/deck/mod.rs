//! Deck lifecycle: draw pile, hand, discard pile.
//!
//! - `Deck`: shuffle, draw, play, discard, reshuffle-on-empty
//! - `DeckCounts`: read-only pile sizes

mod piles;

pub use piles::{Deck, DeckCounts};
