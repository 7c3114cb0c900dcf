//! Item stats, rarity, power level and sentience tiers

pub mod power;
pub mod rarity;
pub mod sentience;
pub mod stats;

pub use power::calculate_power_level;
pub use rarity::ItemRarity;
pub use sentience::{resolve_sentience_tier, SentienceTier};
pub use stats::{ItemStatBlock, StatAttribute, STAT_COUNT};
