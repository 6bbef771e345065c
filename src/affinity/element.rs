//! Elements carried by cards and combatants.

use serde::{Deserialize, Serialize};

/// Elemental alignment of a card or combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Element; 7] = [
        Element::Neutral,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
        Element::Light,
        Element::Dark,
    ];

    /// Display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
