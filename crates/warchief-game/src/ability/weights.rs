//! Fixed tuning constants for the ability balance score
//!
//! Scores are tuned so a plain ability dealing 30 damage on a 3s cooldown
//! lands in the middle of the balanced band.

use super::definition::{AbilityCategory, ChannelEffect, StatusEffect};

/// Cooldowns below this are treated as this (seconds)
pub const MIN_COOLDOWN: f32 = 0.1;

/// Extra sustained value per damage-over-time tick
pub const DOT_TICK_WEIGHT: f32 = 0.25;
/// Healing per second is worth a bit less than damage per second
pub const HEAL_WEIGHT: f32 = 0.8;

/// Area factor per additional target
pub const TARGET_WEIGHT: f32 = 0.35;
/// Area factor per unit of radius
pub const RADIUS_WEIGHT: f32 = 0.05;

/// Flat part of the crowd-control bonus
pub const STATUS_BASE: f32 = 1.0;
/// Crowd-control bonus per (duration x strength)
pub const STATUS_SCALE: f32 = 0.5;

pub const KNOCKBACK_WEIGHT: f32 = 0.2;
pub const PIERCING_BONUS: f32 = 2.0;
pub const RANGE_WEIGHT: f32 = 0.05;
pub const DURATION_WEIGHT: f32 = 0.3;

/// Mana that doubles the cost factor
pub const MANA_COST_SCALE: f32 = 50.0;
/// Secondary resource is scarcer than mana
pub const SECONDARY_MANA_WEIGHT: f32 = 1.5;

/// Telegraph penalty per second of cast + windup
pub const TELEGRAPH_WEIGHT: f32 = 0.25;
/// Multiplier when the caster must stand still
pub const STATIONARY_PENALTY: f32 = 0.85;

impl StatusEffect {
    /// Relative crowd-control value of the status
    pub fn control_weight(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Stun => 3.0,
            Self::Freeze => 2.8,
            Self::Fear => 2.5,
            Self::Root => 2.0,
            Self::Silence => 2.0,
            Self::Slow => 1.2,
            Self::Weaken => 1.2,
            Self::Burn => 1.0,
            Self::Poison => 1.0,
            Self::Bleed => 1.0,
        }
    }
}

impl ChannelEffect {
    /// Flat utility bonus for the channel behavior
    pub fn utility_bonus(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Beam => 2.0,
            Self::Drain => 2.5,
            Self::Barrage => 2.0,
            Self::Meditate => 1.5,
        }
    }
}

impl AbilityCategory {
    /// Power budget the composite is divided by (always > 0)
    pub fn budget(self) -> f32 {
        match self {
            Self::General => 1.0,
            Self::Melee => 1.0,
            Self::Ranged => 1.15,
            Self::Magic => 1.2,
            Self::Healing => 0.9,
            Self::Utility => 0.75,
        }
    }
}
