//! End-to-end editor scenarios
//!
//! These drive the public API the way the ability and item panels do:
//! edit text fields, preview the badge, refresh the tier before render.

use warchief_game::catalog::{starter_abilities, starter_items};
use warchief_game::{
    calculate_power_level, resolve_sentience_tier, AbilityDefinition, AbilityForm, BalanceClass,
    ItemForm, ItemRarity, ItemStatBlock, SentienceThresholds, SentienceTier, Stance,
    StanceModifiers, StatAttribute,
};

// =============================================================================
// Ability editor
// =============================================================================

#[test]
fn test_baseline_ability_is_balanced() {
    let form = AbilityForm {
        name: "Strike".to_string(),
        damage: "50".to_string(),
        cooldown: "5".to_string(),
        mana_cost: "20".to_string(),
        ..AbilityForm::default()
    };
    let result = form.preview();
    assert_eq!(result.classification, BalanceClass::Balanced);
    assert!(result.label.starts_with("Balanced"));
}

#[test]
fn test_absurd_ability_is_flagged() {
    let form = AbilityForm {
        damage: "500".to_string(),
        cooldown: "1".to_string(),
        mana_cost: "0".to_string(),
        ..AbilityForm::default()
    };
    let class = form.preview().classification;
    assert!(matches!(class, BalanceClass::Overpowered | BalanceClass::Extreme));
}

#[test]
fn test_typing_damage_walks_through_bands() {
    let mut form = AbilityForm {
        cooldown: "3".to_string(),
        ..AbilityForm::default()
    };
    let mut last = None;
    // Simulates the designer typing a growing damage value
    for damage in ["", "1", "15", "150", "1500"] {
        form.damage = damage.to_string();
        let class = form.preview().classification;
        if let Some(prev) = last {
            assert!(class >= prev, "{damage}: {class:?} < {prev:?}");
        }
        last = Some(class);
    }
    assert_eq!(last, Some(BalanceClass::Extreme));
}

#[test]
fn test_garbage_fields_never_break_preview() {
    let form = AbilityForm {
        damage: "1e40".to_string(),
        cooldown: "-3".to_string(),
        max_targets: "many".to_string(),
        cast_time: "NaN".to_string(),
        status_effect: "Stunned?".to_string(),
        ..AbilityForm::default()
    };
    let def = form.to_definition();
    assert_eq!(def.cooldown, 1.0);
    assert_eq!(def.max_targets, 1);
    assert_eq!(def.cast_time, 0.0);
    assert!(form.preview().score.is_finite());
}

#[test]
fn test_huge_typed_values_stay_finite() {
    let form = AbilityForm {
        damage: "3e38".to_string(),
        cooldown: "0.5".to_string(),
        ..AbilityForm::default()
    };
    let result = form.preview();
    assert!(result.score.is_finite());
    assert_eq!(result.classification, BalanceClass::Extreme);
    assert!(!result.label.contains("inf"));

    let costly = AbilityForm {
        secondary_mana_cost: "3e38".to_string(),
        cooldown: "1".to_string(),
        ..form
    };
    let result = costly.preview();
    assert!(result.score.is_finite());
    assert_eq!(result.classification, BalanceClass::Extreme);
}

#[test]
fn test_stance_preview() {
    let ability = AbilityDefinition {
        mana_cost: 40.0,
        ..AbilityDefinition::damage("Frostbolt", 40.0, 4.0)
    };
    let base = warchief_game::ability::score(&ability, None).score;
    let stacked = StanceModifiers::aggregate(&[
        Stance::Arcane.modifiers(),
        Stance::Swift.modifiers(),
    ]);
    let stanced = warchief_game::ability::score(&stacked.apply(&ability), None).score;
    assert!(stanced > base);
}

// =============================================================================
// Item editor
// =============================================================================

#[test]
fn test_lowering_stats_downgrades_tier() {
    let thresholds = SentienceThresholds::default();
    let mut form = ItemForm::default();
    form.name = "Soulblade".to_string();
    form.rarity = "Legendary".to_string();
    form.set_stat(StatAttribute::Damage, "20");
    assert!((form.power_level() - 120.0).abs() < 1e-3);

    form.select_tier(SentienceTier::Sentient, &thresholds).unwrap();
    assert_eq!(form.tier(), SentienceTier::Sentient);

    // Designer drops damage; the tier follows on the next render
    form.set_stat(StatAttribute::Damage, "10");
    form.refresh(&thresholds);
    assert_eq!(form.tier(), SentienceTier::Imbued);

    form.set_stat(StatAttribute::Damage, "");
    form.refresh(&thresholds);
    assert_eq!(form.tier(), SentienceTier::Inanimate);

    // Raising stats again does not restore the old tier
    form.set_stat(StatAttribute::Damage, "20");
    form.refresh(&thresholds);
    assert_eq!(form.tier(), SentienceTier::Inanimate);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = SentienceThresholds::new(10.0, 20.0);
    thresholds.validate().unwrap();
    assert_eq!(
        resolve_sentience_tier(SentienceTier::Sentient, 15.0, 10.0, 20.0),
        thresholds.resolve(SentienceTier::Sentient, 15.0)
    );
    assert_eq!(thresholds.resolve(SentienceTier::Sentient, 15.0), SentienceTier::Imbued);
}

#[test]
fn test_legendary_beats_common() {
    let stats = ItemStatBlock {
        armor: 5,
        ..Default::default()
    };
    assert!(
        calculate_power_level(&stats, ItemRarity::Legendary)
            > calculate_power_level(&stats, ItemRarity::Common)
    );
}

#[test]
fn test_starter_catalog_tiers_resolve() {
    let thresholds = SentienceThresholds::default();
    for item in starter_items() {
        let power = calculate_power_level(&item.stats, item.rarity);
        let tier = thresholds.resolve(item.tier, power);
        assert!(tier <= item.tier);
        assert!(power >= thresholds.required_power(tier), "{}", item.name);
    }
}

#[test]
fn test_starter_abilities_roundtrip_through_form() {
    for entry in starter_abilities() {
        let form = AbilityForm::from_definition(&entry.definition, entry.category);
        assert_eq!(form.to_definition(), entry.definition);
        assert_eq!(
            form.preview(),
            warchief_game::ability::score(&entry.definition, Some(entry.category))
        );
    }
}
