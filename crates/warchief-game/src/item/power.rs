//! Item power level
//!
//! power = sum(attribute x weight) x rarity multiplier, unclamped

use tracing::trace;

use super::rarity::ItemRarity;
use super::stats::ItemStatBlock;

/// Compute an item's power level.
///
/// Zero for an empty stat block, otherwise strictly positive and
/// strictly increasing in rarity.
pub fn calculate_power_level(stats: &ItemStatBlock, rarity: ItemRarity) -> f32 {
    let power = stats.weighted_sum() * rarity.power_multiplier();
    trace!(power, rarity = rarity.name(), "Calculated item power");
    power
}
