//! Warchief Game - Balance and progression scoring
//!
//! Pure scoring functions behind the ability and item editors: ability
//! balance badges, item power levels, sentience tier gating, and stance
//! modifier aggregation.

pub mod ability;
pub mod balance;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod item;
pub mod stance;

pub use ability::{AbilityCategory, AbilityDefinition, ChannelEffect, ScoreBreakdown, StatusEffect};
pub use balance::{BalanceClass, ScoreResult};
pub use config::SentienceThresholds;
pub use editor::{AbilityForm, ItemForm};
pub use error::{ConfigError, SentienceError};
pub use item::{
    calculate_power_level, resolve_sentience_tier, ItemRarity, ItemStatBlock, SentienceTier,
    StatAttribute,
};
pub use stance::{Stance, StanceModifiers};
