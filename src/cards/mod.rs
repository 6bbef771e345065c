//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardCategory` / `Rarity`: classification used by the adversary and drops
//! - `CardDefinition`: Static card data and damage computation
//! - `CardInstance`: One copy of a card in a battle
//! - `CardRegistry`: Card definition lookup and drop pool

pub mod category;
pub mod definition;
pub mod instance;
pub mod registry;

pub use category::{CardCategory, Rarity};
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardRegistry;
