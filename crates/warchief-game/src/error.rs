use thiserror::Error;

use crate::item::sentience::SentienceTier;

/// Invalid balance configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} threshold must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} threshold must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("imbued threshold ({imbued}) must be below sentient threshold ({sentient})")]
    Unordered { imbued: f32, sentient: f32 },
}

/// Rejected sentience tier selection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentienceError {
    #[error("{requested:?} requires power {required}, item has {power_level}")]
    Unsupported {
        requested: SentienceTier,
        required: f32,
        power_level: f32,
    },
}
