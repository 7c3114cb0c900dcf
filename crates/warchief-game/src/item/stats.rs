//! Item stat block and per-attribute power weights

use serde::{Deserialize, Serialize};

/// Number of attributes on a stat block
pub const STAT_COUNT: usize = 12;

/// A named attribute of an item's stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatAttribute {
    // Primary
    Strength,
    Agility,
    Intelligence,
    Stamina,
    Spirit,
    Wisdom,
    Luck,

    // Combat
    Armor,
    Damage,
    CritChance,
    Health,
    Mana,
}

impl StatAttribute {
    /// All attributes, primary first
    pub const ALL: [StatAttribute; STAT_COUNT] = [
        Self::Strength,
        Self::Agility,
        Self::Intelligence,
        Self::Stamina,
        Self::Spirit,
        Self::Wisdom,
        Self::Luck,
        Self::Armor,
        Self::Damage,
        Self::CritChance,
        Self::Health,
        Self::Mana,
    ];

    /// Position in [`StatAttribute::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Power contributed by one point of this attribute
    pub fn power_weight(self) -> f32 {
        match self {
            Self::Strength
            | Self::Agility
            | Self::Intelligence
            | Self::Stamina
            | Self::Spirit
            | Self::Wisdom
            | Self::Luck => 1.0,
            Self::Armor => 1.5,
            Self::Damage => 2.0,
            Self::CritChance => 1.0,
            // Pools are authored in much larger numbers
            Self::Health => 0.25,
            Self::Mana => 0.2,
        }
    }

    /// Whether this is one of the seven primary attributes
    pub fn is_primary(self) -> bool {
        !self.is_combat()
    }

    /// Whether this is one of the five combat attributes
    pub fn is_combat(self) -> bool {
        matches!(
            self,
            Self::Armor | Self::Damage | Self::CritChance | Self::Health | Self::Mana
        )
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Intelligence => "Intelligence",
            Self::Stamina => "Stamina",
            Self::Spirit => "Spirit",
            Self::Wisdom => "Wisdom",
            Self::Luck => "Luck",
            Self::Armor => "Armor",
            Self::Damage => "Damage",
            Self::CritChance => "Crit Chance",
            Self::Health => "Health",
            Self::Mana => "Mana",
        }
    }
}

/// Flat stat values on an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStatBlock {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub stamina: u32,
    pub spirit: u32,
    pub wisdom: u32,
    pub luck: u32,
    pub armor: u32,
    pub damage: u32,
    pub crit_chance: u32,
    pub health: u32,
    pub mana: u32,
}

impl ItemStatBlock {
    /// Read one attribute
    pub fn get(&self, attr: StatAttribute) -> u32 {
        match attr {
            StatAttribute::Strength => self.strength,
            StatAttribute::Agility => self.agility,
            StatAttribute::Intelligence => self.intelligence,
            StatAttribute::Stamina => self.stamina,
            StatAttribute::Spirit => self.spirit,
            StatAttribute::Wisdom => self.wisdom,
            StatAttribute::Luck => self.luck,
            StatAttribute::Armor => self.armor,
            StatAttribute::Damage => self.damage,
            StatAttribute::CritChance => self.crit_chance,
            StatAttribute::Health => self.health,
            StatAttribute::Mana => self.mana,
        }
    }

    /// Mutable access to one attribute
    pub fn get_mut(&mut self, attr: StatAttribute) -> &mut u32 {
        match attr {
            StatAttribute::Strength => &mut self.strength,
            StatAttribute::Agility => &mut self.agility,
            StatAttribute::Intelligence => &mut self.intelligence,
            StatAttribute::Stamina => &mut self.stamina,
            StatAttribute::Spirit => &mut self.spirit,
            StatAttribute::Wisdom => &mut self.wisdom,
            StatAttribute::Luck => &mut self.luck,
            StatAttribute::Armor => &mut self.armor,
            StatAttribute::Damage => &mut self.damage,
            StatAttribute::CritChance => &mut self.crit_chance,
            StatAttribute::Health => &mut self.health,
            StatAttribute::Mana => &mut self.mana,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, attr: StatAttribute, value: u32) -> Self {
        *self.get_mut(attr) = value;
        self
    }

    /// Sum of each attribute times its power weight
    pub fn weighted_sum(&self) -> f32 {
        StatAttribute::ALL
            .iter()
            .map(|&attr| self.get(attr) as f32 * attr.power_weight())
            .sum()
    }

    /// Whether every attribute is zero
    pub fn is_empty(&self) -> bool {
        StatAttribute::ALL.iter().all(|&attr| self.get(attr) == 0)
    }
}
