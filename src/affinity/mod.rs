//! Elemental affinity.
//!
//! - `Element`: alignment of cards and combatants
//! - `ElementRelation`: what an element is strong and weak against
//! - `AffinityTable`: attacker → defender multiplier lookup

mod element;
mod table;

pub use element::Element;
pub use table::{AffinityTable, ElementRelation, STRONG_MULTIPLIER, WEAK_MULTIPLIER};
