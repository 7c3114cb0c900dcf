//! Tunable thresholds supplied to the scorers
//!
//! Passed explicitly to every call that needs them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_IMBUED_THRESHOLD: f32 = 40.0;
pub const DEFAULT_SENTIENT_THRESHOLD: f32 = 100.0;

/// Power levels an item needs to reach each sentience tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentienceThresholds {
    /// Minimum power for `Imbued`
    pub imbued: f32,
    /// Minimum power for `Sentient`
    pub sentient: f32,
}

impl Default for SentienceThresholds {
    fn default() -> Self {
        Self {
            imbued: DEFAULT_IMBUED_THRESHOLD,
            sentient: DEFAULT_SENTIENT_THRESHOLD,
        }
    }
}

impl SentienceThresholds {
    pub fn new(imbued: f32, sentient: f32) -> Self {
        Self { imbued, sentient }
    }

    /// Check that both thresholds are finite, non-negative and ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("imbued", self.imbued), ("sentient", self.sentient)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.imbued >= self.sentient {
            return Err(ConfigError::Unordered {
                imbued: self.imbued,
                sentient: self.sentient,
            });
        }
        Ok(())
    }
}
