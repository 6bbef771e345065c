//! Card categories and rarities.

use serde::{Deserialize, Serialize};

/// Broad role of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    #[default]
    Attack,
    Defense,
    Magic,
    Support,
    Curse,
    Relic,
}

/// Drop rarity, ordered from most to least common.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// The next more common rarity, if any.
    #[must_use]
    pub const fn more_common(self) -> Option<Rarity> {
        match self {
            Self::Common => None,
            Self::Uncommon => Some(Self::Common),
            Self::Rare => Some(Self::Uncommon),
            Self::Epic => Some(Self::Rare),
            Self::Legendary => Some(Self::Epic),
        }
    }
}
