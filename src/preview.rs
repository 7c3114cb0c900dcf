//! Balance preview report
//!
//! Scores the starter catalog the same way the editor panels do and
//! collects one line per ability (per stance) and per item.

use tracing::{debug, info};
use warchief_game::ability::{self, AbilityCategory};
use warchief_game::catalog::{CatalogAbility, CatalogItem};
use warchief_game::{
    calculate_power_level, ItemRarity, ScoreBreakdown, ScoreResult, SentienceThresholds,
    SentienceTier, Stance,
};

use crate::settings::PreviewSettings;

/// One scored ability
#[derive(Debug, Clone)]
pub struct AbilityLine {
    pub name: String,
    pub category: AbilityCategory,
    /// `None` for the ability as authored
    pub stance: Option<Stance>,
    pub result: ScoreResult,
    pub breakdown: ScoreBreakdown,
}

/// One scored item
#[derive(Debug, Clone)]
pub struct ItemLine {
    pub name: String,
    pub rarity: ItemRarity,
    pub power_level: f32,
    pub stored_tier: SentienceTier,
    pub resolved_tier: SentienceTier,
    pub max_tier: SentienceTier,
}

impl ItemLine {
    /// Whether the stored tier had to be lowered
    pub fn downgraded(&self) -> bool {
        self.resolved_tier != self.stored_tier
    }
}

/// Everything the preview prints
#[derive(Debug, Clone, Default)]
pub struct PreviewReport {
    pub abilities: Vec<AbilityLine>,
    pub items: Vec<ItemLine>,
}

impl PreviewReport {
    /// Score the given catalog
    pub fn build(
        abilities: &[CatalogAbility],
        items: &[CatalogItem],
        thresholds: &SentienceThresholds,
        settings: &PreviewSettings,
    ) -> Self {
        let mut report = Self::default();

        for entry in abilities {
            report.push_ability(entry, None);
            if settings.stances {
                for stance in Stance::ALL.into_iter().filter(|s| *s != Stance::Balanced) {
                    report.push_ability(entry, Some(stance));
                }
            }
        }

        for item in items {
            let power_level = calculate_power_level(&item.stats, item.rarity);
            report.items.push(ItemLine {
                name: item.name.clone(),
                rarity: item.rarity,
                power_level,
                stored_tier: item.tier,
                resolved_tier: thresholds.resolve(item.tier, power_level),
                max_tier: thresholds.max_supported(power_level),
            });
        }

        report
    }

    fn push_ability(&mut self, entry: &CatalogAbility, stance: Option<Stance>) {
        let definition = match stance {
            Some(stance) => stance.modifiers().apply(&entry.definition),
            None => entry.definition.clone(),
        };
        let category = Some(entry.category);
        self.abilities.push(AbilityLine {
            name: entry.definition.name.clone(),
            category: entry.category,
            stance,
            result: ability::score(&definition, category),
            breakdown: ability::breakdown(&definition, category),
        });
    }

    /// Write the report to the log
    pub fn log(&self, settings: &PreviewSettings) {
        info!("Abilities ({} lines)", self.abilities.len());
        for line in &self.abilities {
            let stance = line.stance.map_or("-", Stance::name);
            info!(
                "  {:<18} {:<8} {:<10} {:<20} #{:06X}",
                line.name,
                line.category.name(),
                stance,
                line.result.label,
                line.result.color().to_hex()
            );
            if settings.log_breakdowns {
                let b = &line.breakdown;
                debug!(
                    throughput = b.throughput(),
                    control = b.control,
                    utility = b.utility,
                    cost = b.cost_factor,
                    telegraph = b.telegraph_factor,
                    stationary = b.stationary_factor,
                    budget = b.budget,
                    "    breakdown"
                );
            }
        }

        info!("Items ({} lines)", self.items.len());
        for line in &self.items {
            let note = if line.downgraded() {
                format!(" (was {})", line.stored_tier.name())
            } else {
                String::new()
            };
            info!(
                "  {:<22} {:<9} #{:06X}  power {:>7.1}  tier {} #{:06X}{}  max {}",
                line.name,
                line.rarity.name(),
                line.rarity.color().to_hex(),
                line.power_level,
                line.resolved_tier.name(),
                line.resolved_tier.color().to_hex(),
                note,
                line.max_tier.name()
            );
        }
    }
}
