//! Ability data model
//!
//! The designer-authored numbers the balance scorer reads.

use serde::{Deserialize, Serialize};

/// Crowd-control or damage-over-time status an ability applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusEffect {
    #[default]
    None,
    Stun,
    Root,
    Silence,
    Fear,
    Slow,
    Weaken,
    Burn,
    Poison,
    Bleed,
    Freeze,
}

impl StatusEffect {
    /// All variants, in editor dropdown order
    pub const ALL: [StatusEffect; 11] = [
        Self::None,
        Self::Stun,
        Self::Root,
        Self::Silence,
        Self::Fear,
        Self::Slow,
        Self::Weaken,
        Self::Burn,
        Self::Poison,
        Self::Bleed,
        Self::Freeze,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Stun => "Stun",
            Self::Root => "Root",
            Self::Silence => "Silence",
            Self::Fear => "Fear",
            Self::Slow => "Slow",
            Self::Weaken => "Weaken",
            Self::Burn => "Burn",
            Self::Poison => "Poison",
            Self::Bleed => "Bleed",
            Self::Freeze => "Freeze",
        }
    }
}

/// Behavior while the ability is being channeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChannelEffect {
    #[default]
    None,
    Beam,
    Drain,
    Barrage,
    Meditate,
}

impl ChannelEffect {
    pub const ALL: [ChannelEffect; 5] = [
        Self::None,
        Self::Beam,
        Self::Drain,
        Self::Barrage,
        Self::Meditate,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Beam => "Beam",
            Self::Drain => "Drain",
            Self::Barrage => "Barrage",
            Self::Meditate => "Meditate",
        }
    }
}

/// Broad role of an ability, used to pick the power budget it is judged against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbilityCategory {
    #[default]
    General,
    Melee,
    Ranged,
    Magic,
    Healing,
    Utility,
}

impl AbilityCategory {
    pub const ALL: [AbilityCategory; 6] = [
        Self::General,
        Self::Melee,
        Self::Ranged,
        Self::Magic,
        Self::Healing,
        Self::Utility,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Melee => "Melee",
            Self::Ranged => "Ranged",
            Self::Magic => "Magic",
            Self::Healing => "Healing",
            Self::Utility => "Utility",
        }
    }
}

/// A complete ability definition as built by the ability editor
///
/// Numbers are expected to be well formed: non-negative, with a strictly
/// positive cooldown and at least one target. The editor layer substitutes
/// defaults before building one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityDefinition {
    pub name: String,
    pub damage: f32,
    /// Seconds between uses
    pub cooldown: f32,
    /// Lingering effect duration in seconds (zones, buffs)
    pub duration: f32,
    pub range: f32,
    pub heal_amount: f32,
    pub mana_cost: f32,
    pub secondary_mana_cost: f32,
    pub status_effect: StatusEffect,
    pub status_duration: f32,
    pub status_strength: f32,
    pub aoe_radius: f32,
    pub max_targets: u32,
    pub dot_ticks: u32,
    pub knockback_force: f32,
    pub cast_time: f32,
    pub windup_time: f32,
    pub piercing: bool,
    pub requires_stationary: bool,
    pub channel_effect: ChannelEffect,
}

impl Default for AbilityDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            damage: 0.0,
            cooldown: 1.0,
            duration: 0.0,
            range: 0.0,
            heal_amount: 0.0,
            mana_cost: 0.0,
            secondary_mana_cost: 0.0,
            status_effect: StatusEffect::None,
            status_duration: 0.0,
            status_strength: 0.0,
            aoe_radius: 0.0,
            max_targets: 1,
            dot_ticks: 0,
            knockback_force: 0.0,
            cast_time: 0.0,
            windup_time: 0.0,
            piercing: false,
            requires_stationary: false,
            channel_effect: ChannelEffect::None,
        }
    }
}

impl AbilityDefinition {
    /// Create a plain single-target damage ability
    pub fn damage(name: &str, damage: f32, cooldown: f32) -> Self {
        Self {
            name: name.to_string(),
            damage,
            cooldown,
            ..Default::default()
        }
    }

    /// Create a plain single-target heal
    pub fn heal(name: &str, heal_amount: f32, cooldown: f32) -> Self {
        Self {
            name: name.to_string(),
            heal_amount,
            cooldown,
            ..Default::default()
        }
    }

    /// Seconds the caster telegraphs before the effect lands.
    /// Negative (or NaN) times count as zero.
    pub fn telegraph_time(&self) -> f32 {
        self.cast_time.max(0.0) + self.windup_time.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let def = AbilityDefinition::default();
        assert_eq!(def.cooldown, 1.0);
        assert_eq!(def.max_targets, 1);
        assert_eq!(def.status_effect, StatusEffect::None);
        assert_eq!(def.channel_effect, ChannelEffect::None);
        assert_eq!(def.telegraph_time(), 0.0);
    }

    #[test]
    fn test_telegraph_time() {
        let def = AbilityDefinition {
            cast_time: 1.5,
            windup_time: 0.5,
            ..Default::default()
        };
        assert_eq!(def.telegraph_time(), 2.0);

        let bad = AbilityDefinition {
            cast_time: -3.0,
            windup_time: f32::NAN,
            ..Default::default()
        };
        assert_eq!(bad.telegraph_time(), 0.0);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let def: AbilityDefinition =
            serde_json::from_str(r#"{ "name": "Cleave", "damage": 40.0, "max_targets": 3 }"#)
                .unwrap();
        assert_eq!(def.name, "Cleave");
        assert_eq!(def.cooldown, 1.0);
        assert_eq!(def.max_targets, 3);
        assert_eq!(def.status_effect, StatusEffect::None);
    }
}
