//! Built-in starter catalog
//!
//! A handful of reference abilities and items the preview tool scores
//! and the tests use as balance anchors.

use serde::{Deserialize, Serialize};

use crate::ability::{AbilityCategory, AbilityDefinition, ChannelEffect, StatusEffect};
use crate::item::{ItemRarity, ItemStatBlock, SentienceTier};

/// An ability together with the category it is judged in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAbility {
    pub category: AbilityCategory,
    pub definition: AbilityDefinition,
}

/// An item as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub rarity: ItemRarity,
    pub stats: ItemStatBlock,
    /// Tier the designer last selected; may be stale relative to the stats
    pub tier: SentienceTier,
}

/// Starter abilities, one or two per category
pub fn starter_abilities() -> Vec<CatalogAbility> {
    vec![
        CatalogAbility {
            category: AbilityCategory::Melee,
            definition: AbilityDefinition {
                range: 3.0,
                windup_time: 0.3,
                ..AbilityDefinition::damage("Sword Strike", 30.0, 3.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Melee,
            definition: AbilityDefinition {
                range: 4.0,
                max_targets: 4,
                aoe_radius: 4.0,
                knockback_force: 8.0,
                mana_cost: 15.0,
                windup_time: 0.6,
                ..AbilityDefinition::damage("Cleaving Sweep", 35.0, 8.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Magic,
            definition: AbilityDefinition {
                range: 30.0,
                mana_cost: 20.0,
                cast_time: 1.5,
                dot_ticks: 3,
                status_effect: StatusEffect::Burn,
                status_duration: 3.0,
                status_strength: 1.0,
                ..AbilityDefinition::damage("Fireball", 45.0, 5.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Magic,
            definition: AbilityDefinition {
                range: 25.0,
                mana_cost: 30.0,
                duration: 3.0,
                requires_stationary: true,
                channel_effect: ChannelEffect::Beam,
                ..AbilityDefinition::damage("Arcane Beam", 60.0, 10.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Ranged,
            definition: AbilityDefinition {
                range: 40.0,
                piercing: true,
                mana_cost: 10.0,
                windup_time: 0.8,
                ..AbilityDefinition::damage("Piercing Arrow", 40.0, 6.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Healing,
            definition: AbilityDefinition {
                range: 20.0,
                mana_cost: 25.0,
                cast_time: 1.0,
                ..AbilityDefinition::heal("Mending Light", 50.0, 6.0)
            },
        },
        CatalogAbility {
            category: AbilityCategory::Utility,
            definition: AbilityDefinition {
                range: 10.0,
                mana_cost: 15.0,
                status_effect: StatusEffect::Stun,
                status_duration: 1.5,
                status_strength: 1.0,
                ..AbilityDefinition::damage("War Stomp", 10.0, 15.0)
            },
        },
    ]
}

/// Starter items across every rarity
pub fn starter_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            name: "Rusty Shortsword".to_string(),
            rarity: ItemRarity::Common,
            stats: ItemStatBlock {
                damage: 6,
                strength: 2,
                ..Default::default()
            },
            tier: SentienceTier::Inanimate,
        },
        CatalogItem {
            name: "Oakheart Buckler".to_string(),
            rarity: ItemRarity::Uncommon,
            stats: ItemStatBlock {
                armor: 14,
                stamina: 6,
                health: 40,
                ..Default::default()
            },
            tier: SentienceTier::Inanimate,
        },
        CatalogItem {
            name: "Emberglass Staff".to_string(),
            rarity: ItemRarity::Rare,
            stats: ItemStatBlock {
                damage: 12,
                intelligence: 10,
                wisdom: 4,
                mana: 60,
                ..Default::default()
            },
            tier: SentienceTier::Imbued,
        },
        CatalogItem {
            name: "Whispering Dirk".to_string(),
            rarity: ItemRarity::Epic,
            stats: ItemStatBlock {
                damage: 9,
                agility: 8,
                crit_chance: 6,
                ..Default::default()
            },
            // Stats were nerfed after the tier was chosen
            tier: SentienceTier::Sentient,
        },
        CatalogItem {
            name: "Crown of the Warchief".to_string(),
            rarity: ItemRarity::Legendary,
            stats: ItemStatBlock {
                strength: 12,
                stamina: 12,
                spirit: 8,
                armor: 10,
                health: 80,
                ..Default::default()
            },
            tier: SentienceTier::Sentient,
        },
    ]
}
