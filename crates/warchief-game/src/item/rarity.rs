//! Item rarity tiers

use serde::{Deserialize, Serialize};
use warchief_core::{palette, Color};

/// Item rarity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl ItemRarity {
    /// All rarities, lowest first
    pub const ALL: [ItemRarity; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    /// Scale applied to an item's weighted stat sum
    pub fn power_multiplier(self) -> f32 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 1.25,
            Self::Rare => 1.5,
            Self::Epic => 2.0,
            Self::Legendary => 3.0,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }

    /// Name text color
    pub fn color(self) -> Color {
        match self {
            Self::Common => palette::RARITY_COMMON,
            Self::Uncommon => palette::RARITY_UNCOMMON,
            Self::Rare => palette::RARITY_RARE,
            Self::Epic => palette::RARITY_EPIC,
            Self::Legendary => palette::RARITY_LEGENDARY,
        }
    }

    /// Parse a rarity name case-insensitively ("mythic" reads as legendary)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "common" => Some(Self::Common),
            "uncommon" => Some(Self::Uncommon),
            "rare" => Some(Self::Rare),
            "epic" => Some(Self::Epic),
            "legendary" | "mythic" => Some(Self::Legendary),
            _ => None,
        }
    }
}
