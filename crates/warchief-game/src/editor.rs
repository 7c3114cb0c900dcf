//! Editor form state for the ability and item panels
//!
//! The panels hold raw text for every numeric field. Text that does not
//! parse (or parses outside the field's domain) is replaced by the field's
//! default before anything reaches the scorers, which expect well formed
//! input.

use tracing::debug;

use crate::ability::{self, AbilityCategory, AbilityDefinition, ChannelEffect, StatusEffect};
use crate::balance::ScoreResult;
use crate::config::SentienceThresholds;
use crate::error::SentienceError;
use crate::item::{
    calculate_power_level, ItemRarity, ItemStatBlock, SentienceTier, StatAttribute, STAT_COUNT,
};

/// Finite, non-negative number or `default`
pub fn parse_f32_or(text: &str, default: f32) -> f32 {
    match text.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

/// Finite, strictly positive number or `default` (cooldowns, multipliers)
pub fn parse_positive_f32_or(text: &str, default: f32) -> f32 {
    match text.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

/// Integer count of at least 1 or `default`
pub fn parse_count_or(text: &str, default: u32) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(v) if v >= 1 => v,
        _ => default,
    }
}

/// Non-negative integer stat or `default`
pub fn parse_stat_or(text: &str, default: u32) -> u32 {
    text.trim().parse::<u32>().unwrap_or(default)
}

/// Match `text` against display names, falling back to the type's default
fn parse_named<T: Copy + Default>(text: &str, all: &[T], name: fn(T) -> &'static str) -> T {
    let text = text.trim();
    all.iter()
        .copied()
        .find(|&v| name(v).eq_ignore_ascii_case(text))
        .unwrap_or_default()
}

/// Editable text fields of the ability editor
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityForm {
    pub name: String,
    pub category: String,
    pub damage: String,
    pub cooldown: String,
    pub duration: String,
    pub range: String,
    pub heal_amount: String,
    pub mana_cost: String,
    pub secondary_mana_cost: String,
    pub status_effect: String,
    pub status_duration: String,
    pub status_strength: String,
    pub aoe_radius: String,
    pub max_targets: String,
    pub dot_ticks: String,
    pub knockback_force: String,
    pub cast_time: String,
    pub windup_time: String,
    pub piercing: bool,
    pub requires_stationary: bool,
    pub channel_effect: String,
}

impl Default for AbilityForm {
    fn default() -> Self {
        Self::from_definition(&AbilityDefinition::default(), AbilityCategory::General)
    }
}

impl AbilityForm {
    /// Populate the form from an existing catalog entry
    pub fn from_definition(def: &AbilityDefinition, category: AbilityCategory) -> Self {
        Self {
            name: def.name.clone(),
            category: category.name().to_string(),
            damage: def.damage.to_string(),
            cooldown: def.cooldown.to_string(),
            duration: def.duration.to_string(),
            range: def.range.to_string(),
            heal_amount: def.heal_amount.to_string(),
            mana_cost: def.mana_cost.to_string(),
            secondary_mana_cost: def.secondary_mana_cost.to_string(),
            status_effect: def.status_effect.name().to_string(),
            status_duration: def.status_duration.to_string(),
            status_strength: def.status_strength.to_string(),
            aoe_radius: def.aoe_radius.to_string(),
            max_targets: def.max_targets.to_string(),
            dot_ticks: def.dot_ticks.to_string(),
            knockback_force: def.knockback_force.to_string(),
            cast_time: def.cast_time.to_string(),
            windup_time: def.windup_time.to_string(),
            piercing: def.piercing,
            requires_stationary: def.requires_stationary,
            channel_effect: def.channel_effect.name().to_string(),
        }
    }

    /// Build a well formed definition, substituting defaults for bad fields
    pub fn to_definition(&self) -> AbilityDefinition {
        AbilityDefinition {
            name: self.name.trim().to_string(),
            damage: parse_f32_or(&self.damage, 0.0),
            cooldown: parse_positive_f32_or(&self.cooldown, 1.0),
            duration: parse_f32_or(&self.duration, 0.0),
            range: parse_f32_or(&self.range, 0.0),
            heal_amount: parse_f32_or(&self.heal_amount, 0.0),
            mana_cost: parse_f32_or(&self.mana_cost, 0.0),
            secondary_mana_cost: parse_f32_or(&self.secondary_mana_cost, 0.0),
            status_effect: parse_named(&self.status_effect, &StatusEffect::ALL, StatusEffect::name),
            status_duration: parse_f32_or(&self.status_duration, 0.0),
            status_strength: parse_f32_or(&self.status_strength, 0.0),
            aoe_radius: parse_f32_or(&self.aoe_radius, 0.0),
            max_targets: parse_count_or(&self.max_targets, 1),
            dot_ticks: parse_stat_or(&self.dot_ticks, 0),
            knockback_force: parse_f32_or(&self.knockback_force, 0.0),
            cast_time: parse_f32_or(&self.cast_time, 0.0),
            windup_time: parse_f32_or(&self.windup_time, 0.0),
            piercing: self.piercing,
            requires_stationary: self.requires_stationary,
            channel_effect: parse_named(&self.channel_effect, &ChannelEffect::ALL, ChannelEffect::name),
        }
    }

    /// Selected category, `General` when unrecognized
    pub fn category(&self) -> AbilityCategory {
        parse_named(&self.category, &AbilityCategory::ALL, AbilityCategory::name)
    }

    /// Live balance badge for the current field values
    pub fn preview(&self) -> ScoreResult {
        ability::score(&self.to_definition(), Some(self.category()))
    }
}

/// Editable fields of the item editor
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub rarity: String,
    /// Raw stat text, indexed by [`StatAttribute::index`]
    stats: [String; STAT_COUNT],
    /// Currently selected tier
    tier: SentienceTier,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            rarity: ItemRarity::Common.name().to_string(),
            stats: std::array::from_fn(|_| "0".to_string()),
            tier: SentienceTier::Inanimate,
        }
    }
}

impl ItemForm {
    /// Populate the form from an existing item
    pub fn from_item(
        name: &str,
        stats: &ItemStatBlock,
        rarity: ItemRarity,
        tier: SentienceTier,
    ) -> Self {
        Self {
            name: name.to_string(),
            rarity: rarity.name().to_string(),
            stats: std::array::from_fn(|i| stats.get(StatAttribute::ALL[i]).to_string()),
            tier,
        }
    }

    /// Raw text of one stat field
    pub fn stat_text(&self, attr: StatAttribute) -> &str {
        &self.stats[attr.index()]
    }

    /// Replace the text of one stat field
    pub fn set_stat(&mut self, attr: StatAttribute, text: impl Into<String>) {
        self.stats[attr.index()] = text.into();
    }

    /// Selected rarity, `Common` when unrecognized
    pub fn rarity(&self) -> ItemRarity {
        ItemRarity::from_name(&self.rarity).unwrap_or_default()
    }

    /// Parsed stat block; unparseable fields read as 0
    pub fn stat_block(&self) -> ItemStatBlock {
        let mut block = ItemStatBlock::default();
        for attr in StatAttribute::ALL {
            *block.get_mut(attr) = parse_stat_or(self.stat_text(attr), 0);
        }
        block
    }

    /// Power level of the current field values
    pub fn power_level(&self) -> f32 {
        calculate_power_level(&self.stat_block(), self.rarity())
    }

    /// Currently selected tier
    pub fn tier(&self) -> SentienceTier {
        self.tier
    }

    /// Pre-render pass: drop the tier to what the power level supports.
    /// Returns true when the tier changed.
    pub fn refresh(&mut self, thresholds: &SentienceThresholds) -> bool {
        let resolved = thresholds.resolve(self.tier, self.power_level());
        let changed = resolved != self.tier;
        self.tier = resolved;
        changed
    }

    /// Explicit tier choice from the tier selector
    pub fn select_tier(
        &mut self,
        requested: SentienceTier,
        thresholds: &SentienceThresholds,
    ) -> Result<(), SentienceError> {
        self.tier = thresholds.select(requested, self.power_level())?;
        debug!(item = %self.name, tier = self.tier.name(), "Sentience tier selected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_f32_or("12.5", 0.0), 12.5);
        assert_eq!(parse_f32_or("  3 ", 0.0), 3.0);
        assert_eq!(parse_f32_or("abc", 0.0), 0.0);
        assert_eq!(parse_f32_or("", 0.0), 0.0);
        assert_eq!(parse_f32_or("-4", 0.0), 0.0);
        assert_eq!(parse_f32_or("NaN", 0.0), 0.0);
        assert_eq!(parse_f32_or("inf", 0.0), 0.0);

        assert_eq!(parse_positive_f32_or("0", 1.0), 1.0);
        assert_eq!(parse_positive_f32_or("2.5", 1.0), 2.5);

        assert_eq!(parse_count_or("0", 1), 1);
        assert_eq!(parse_count_or("4", 1), 4);
        assert_eq!(parse_count_or("-2", 1), 1);

        assert_eq!(parse_stat_or("17", 0), 17);
        assert_eq!(parse_stat_or("1.5", 0), 0);
    }

    #[test]
    fn test_ability_form_roundtrip() {
        let def = AbilityDefinition {
            status_effect: StatusEffect::Root,
            status_duration: 2.0,
            max_targets: 3,
            channel_effect: ChannelEffect::Drain,
            piercing: true,
            ..AbilityDefinition::damage("Vine Lash", 35.0, 6.0)
        };
        let form = AbilityForm::from_definition(&def, AbilityCategory::Magic);
        assert_eq!(form.to_definition(), def);
        assert_eq!(form.category(), AbilityCategory::Magic);
    }

    #[test]
    fn test_ability_form_substitutes_defaults() {
        let form = AbilityForm {
            damage: "lots".to_string(),
            cooldown: "".to_string(),
            max_targets: "0".to_string(),
            status_effect: "stun".to_string(),
            channel_effect: "laser".to_string(),
            category: "nonsense".to_string(),
            ..AbilityForm::default()
        };
        let def = form.to_definition();
        assert_eq!(def.damage, 0.0);
        assert_eq!(def.cooldown, 1.0);
        assert_eq!(def.max_targets, 1);
        assert_eq!(def.status_effect, StatusEffect::Stun);
        assert_eq!(def.channel_effect, ChannelEffect::None);
        assert_eq!(form.category(), AbilityCategory::General);
        assert!(form.preview().score.is_finite());
    }

    #[test]
    fn test_item_form_power() {
        let mut form = ItemForm {
            rarity: "rare".to_string(),
            ..ItemForm::default()
        };
        form.set_stat(StatAttribute::Damage, "20");
        form.set_stat(StatAttribute::Strength, "oops");
        assert_eq!(form.stat_block().damage, 20);
        assert_eq!(form.stat_block().strength, 0);
        assert!((form.power_level() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_item_form_from_item() {
        let stats = ItemStatBlock {
            armor: 12,
            luck: 3,
            ..Default::default()
        };
        let form = ItemForm::from_item("Buckler", &stats, ItemRarity::Epic, SentienceTier::Imbued);
        assert_eq!(form.stat_block(), stats);
        assert_eq!(form.rarity(), ItemRarity::Epic);
        assert_eq!(form.stat_text(StatAttribute::Armor), "12");
        assert_eq!(form.tier(), SentienceTier::Imbued);
    }

    #[test]
    fn test_refresh_downgrades_once() {
        let thresholds = SentienceThresholds::default();
        let mut form = ItemForm::default();
        form.set_stat(StatAttribute::Damage, "60");
        form.select_tier(SentienceTier::Sentient, &thresholds).unwrap();
        assert!(!form.refresh(&thresholds));

        form.set_stat(StatAttribute::Damage, "25");
        assert!(form.refresh(&thresholds));
        assert_eq!(form.tier(), SentienceTier::Imbued);
        assert!(!form.refresh(&thresholds));
        assert_eq!(form.tier(), SentienceTier::Imbued);
    }

    #[test]
    fn test_select_tier_rejects_unsupported() {
        let thresholds = SentienceThresholds::default();
        let mut form = ItemForm::default();
        form.set_stat(StatAttribute::Armor, "10");
        assert!(form.select_tier(SentienceTier::Imbued, &thresholds).is_err());
        assert_eq!(form.tier(), SentienceTier::Inanimate);
    }
}
