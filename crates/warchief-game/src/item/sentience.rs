//! Sentience tiers gated by item power
//!
//! Tiers only rise through an explicit selection. Stat edits can only
//! lower the tier: [`SentienceThresholds::resolve`] clamps it to the
//! highest tier the current power level supports.

use serde::{Deserialize, Serialize};
use tracing::debug;
use warchief_core::{palette, Color};

use crate::config::SentienceThresholds;
use crate::error::SentienceError;

/// Sentience tier of an item, lowest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentienceTier {
    #[default]
    Inanimate,
    Imbued,
    Sentient,
}

impl SentienceTier {
    pub const ALL: [SentienceTier; 3] = [Self::Inanimate, Self::Imbued, Self::Sentient];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Inanimate => "Inanimate",
            Self::Imbued => "Imbued",
            Self::Sentient => "Sentient",
        }
    }

    /// Selector color
    pub fn color(self) -> Color {
        match self {
            Self::Inanimate => palette::TIER_INANIMATE,
            Self::Imbued => palette::TIER_IMBUED,
            Self::Sentient => palette::TIER_SENTIENT,
        }
    }
}

impl SentienceThresholds {
    /// Power level needed to hold `tier`
    pub fn required_power(&self, tier: SentienceTier) -> f32 {
        match tier {
            SentienceTier::Inanimate => 0.0,
            SentienceTier::Imbued => self.imbued,
            SentienceTier::Sentient => self.sentient,
        }
    }

    /// Highest tier a power level supports
    pub fn max_supported(&self, power_level: f32) -> SentienceTier {
        if power_level >= self.sentient {
            SentienceTier::Sentient
        } else if power_level >= self.imbued {
            SentienceTier::Imbued
        } else {
            SentienceTier::Inanimate
        }
    }

    /// Downgrade `current` until the power level supports it. Never upgrades.
    pub fn resolve(&self, current: SentienceTier, power_level: f32) -> SentienceTier {
        let resolved = current.min(self.max_supported(power_level));
        if resolved != current {
            debug!(
                from = current.name(),
                to = resolved.name(),
                power_level,
                "Sentience tier downgraded"
            );
        }
        resolved
    }

    /// Explicit tier selection by the user.
    ///
    /// Any tier up to the supported maximum is accepted, so lowering is
    /// always allowed.
    pub fn select(
        &self,
        requested: SentienceTier,
        power_level: f32,
    ) -> Result<SentienceTier, SentienceError> {
        if requested > self.max_supported(power_level) {
            return Err(SentienceError::Unsupported {
                requested,
                required: self.required_power(requested),
                power_level,
            });
        }
        Ok(requested)
    }
}

/// Clamp `current_tier` to what `power_level` supports under the given thresholds
pub fn resolve_sentience_tier(
    current_tier: SentienceTier,
    power_level: f32,
    imbued_threshold: f32,
    sentient_threshold: f32,
) -> SentienceTier {
    SentienceThresholds::new(imbued_threshold, sentient_threshold).resolve(current_tier, power_level)
}
