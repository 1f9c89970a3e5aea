//! Item rarity tiers
//!
//! Fixed five-tier rarity ladder with a display name and color per tier.
//! The table is closed: every `Rarity` value has an entry by construction,
//! so all lookups are total and infallible.

use bevy::color::Srgba;
use bevy::prelude::*;

/// Item rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Display information for a single rarity tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityInfo {
    /// Display name shown in tooltips and item labels
    pub name: &'static str,
    /// Tint applied to item names and borders
    pub color: Srgba,
}

/// The built-in rarity table, indexed by `Rarity` discriminant.
const RARITY_TABLE: [RarityInfo; 5] = [
    RarityInfo {
        name: "Common",
        color: Srgba::new(1.0, 1.0, 1.0, 1.0),
    },
    RarityInfo {
        name: "Uncommon",
        color: Srgba::new(0.12, 1.0, 0.0, 1.0),
    },
    RarityInfo {
        name: "Rare",
        color: Srgba::new(0.0, 0.44, 0.87, 1.0),
    },
    RarityInfo {
        name: "Epic",
        color: Srgba::new(0.64, 0.21, 0.93, 1.0),
    },
    RarityInfo {
        name: "Legendary",
        color: Srgba::new(1.0, 0.5, 0.0, 1.0),
    },
];

impl Rarity {
    /// All tiers, from Common to Legendary.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Full display info for this tier.
    pub fn info(self) -> &'static RarityInfo {
        &RARITY_TABLE[self as usize]
    }

    /// Display name for this tier (e.g. "Legendary").
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Display color for this tier.
    pub fn color(self) -> Color {
        Color::Srgba(self.info().color)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
