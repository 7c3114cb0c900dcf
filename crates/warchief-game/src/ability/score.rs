//! Ability balance scoring
//!
//! Pipeline: throughput (damage + heal per second) -> area factor
//!           -> + control and utility bonuses -> / cost factor
//!           -> x telegraph and stationary penalties -> / category budget

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::definition::{AbilityCategory, AbilityDefinition};
use super::weights::*;
use crate::balance::ScoreResult;

/// The intermediate terms of a balance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Damage per second including damage-over-time ticks
    pub damage_per_second: f32,
    /// Weighted healing per second
    pub heal_per_second: f32,
    /// Multiplier from extra targets and radius (>= 1)
    pub area_factor: f32,
    /// Crowd-control bonus
    pub control: f32,
    /// Knockback, piercing, range, duration and channel bonuses
    pub utility: f32,
    /// Mana cost divisor (>= 1)
    pub cost_factor: f32,
    /// Cast/windup penalty (0, 1]
    pub telegraph_factor: f32,
    /// Stand-still penalty (0, 1]
    pub stationary_factor: f32,
    /// Category budget divisor (> 0)
    pub budget: f32,
}

impl ScoreBreakdown {
    /// Throughput after the area factor
    pub fn throughput(&self) -> f32 {
        saturate((self.damage_per_second + self.heal_per_second) * self.area_factor)
    }

    /// Final composite score, in `[0, f32::MAX]`.
    ///
    /// Evaluated in `f64` so that terms near `f32::MAX` cannot overflow
    /// partway through.
    pub fn total(&self) -> f32 {
        let throughput = (f64::from(self.damage_per_second) + f64::from(self.heal_per_second))
            * f64::from(self.area_factor);
        let total = (throughput + f64::from(self.control) + f64::from(self.utility))
            / f64::from(self.cost_factor)
            * f64::from(self.telegraph_factor)
            * f64::from(self.stationary_factor)
            / f64::from(self.budget);
        total.clamp(0.0, f64::from(f32::MAX)) as f32
    }
}

/// Clamp a non-negative term that may have overflowed back to `f32::MAX`
fn saturate(v: f32) -> f32 {
    v.min(f32::MAX)
}

/// Compute the individual terms of an ability's balance score.
///
/// Negative (or NaN) inputs are read as zero, the cooldown is floored at
/// [`MIN_COOLDOWN`] and every term saturates at `f32::MAX`, so the terms
/// are always finite.
pub fn breakdown(ability: &AbilityDefinition, category: Option<AbilityCategory>) -> ScoreBreakdown {
    let cooldown = saturate(ability.cooldown.max(MIN_COOLDOWN));
    let non_negative = |v: f32| saturate(v.max(0.0));

    let dot_factor = 1.0 + ability.dot_ticks as f32 * DOT_TICK_WEIGHT;
    let damage_per_second = saturate(non_negative(ability.damage) / cooldown * dot_factor);
    let heal_per_second = saturate(non_negative(ability.heal_amount) / cooldown * HEAL_WEIGHT);

    let extra_targets = (ability.max_targets.max(1) - 1) as f32;
    let area_factor = saturate(
        1.0 + extra_targets * TARGET_WEIGHT + non_negative(ability.aoe_radius) * RADIUS_WEIGHT,
    );

    let control = saturate(
        ability.status_effect.control_weight()
            * (STATUS_BASE
                + STATUS_SCALE
                    * non_negative(ability.status_duration)
                    * non_negative(ability.status_strength)),
    );

    let mut utility = non_negative(ability.knockback_force) * KNOCKBACK_WEIGHT
        + non_negative(ability.range) * RANGE_WEIGHT
        + non_negative(ability.duration) * DURATION_WEIGHT
        + ability.channel_effect.utility_bonus();
    if ability.piercing {
        utility += PIERCING_BONUS;
    }
    let utility = saturate(utility);

    let mana = non_negative(ability.mana_cost)
        + non_negative(ability.secondary_mana_cost) * SECONDARY_MANA_WEIGHT;
    let cost_factor = saturate(1.0 + saturate(mana) / MANA_COST_SCALE);

    let telegraph = saturate(ability.telegraph_time());
    let telegraph_factor = 1.0 / (1.0 + telegraph * TELEGRAPH_WEIGHT);

    let stationary_factor = if ability.requires_stationary {
        STATIONARY_PENALTY
    } else {
        1.0
    };

    ScoreBreakdown {
        damage_per_second,
        heal_per_second,
        area_factor,
        control,
        utility,
        cost_factor,
        telegraph_factor,
        stationary_factor,
        budget: category.unwrap_or_default().budget(),
    }
}

/// Score an ability and classify the result.
///
/// Pure and cheap; the ability editor calls this on every field edit.
pub fn score(ability: &AbilityDefinition, category: Option<AbilityCategory>) -> ScoreResult {
    let terms = breakdown(ability, category);
    let result = ScoreResult::from_score(terms.total());
    trace!(
        ability = %ability.name,
        score = result.score,
        class = result.classification.name(),
        "Scored ability"
    );
    result
}
