//! Combat stances and modifier aggregation
//!
//! Stance modifiers are multiplicative factors. Several sources (the
//! active stance, talents, buffs) multiply together into one effective set
//! which can be applied to an ability to preview its balance under the stance.

use serde::{Deserialize, Serialize};

use crate::ability::AbilityDefinition;

/// Lowest value any single factor may take
pub const MIN_STANCE_FACTOR: f32 = 0.1;

/// Multiplicative modifiers from a stance or other source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StanceModifiers {
    pub damage: f32,
    pub healing: f32,
    pub cooldown: f32,
    pub mana_cost: f32,
    pub cast_time: f32,
    pub damage_taken: f32,
    pub movement_speed: f32,
}

impl Default for StanceModifiers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StanceModifiers {
    /// Changes nothing
    pub const IDENTITY: StanceModifiers = StanceModifiers {
        damage: 1.0,
        healing: 1.0,
        cooldown: 1.0,
        mana_cost: 1.0,
        cast_time: 1.0,
        damage_taken: 1.0,
        movement_speed: 1.0,
    };

    /// Copy with every factor floored at [`MIN_STANCE_FACTOR`]
    pub fn clamped(&self) -> StanceModifiers {
        let floor = |v: f32| v.max(MIN_STANCE_FACTOR);
        StanceModifiers {
            damage: floor(self.damage),
            healing: floor(self.healing),
            cooldown: floor(self.cooldown),
            mana_cost: floor(self.mana_cost),
            cast_time: floor(self.cast_time),
            damage_taken: floor(self.damage_taken),
            movement_speed: floor(self.movement_speed),
        }
    }

    /// Multiply another set onto this one
    pub fn stack(&mut self, other: &StanceModifiers) {
        let other = other.clamped();
        self.damage *= other.damage;
        self.healing *= other.healing;
        self.cooldown *= other.cooldown;
        self.mana_cost *= other.mana_cost;
        self.cast_time *= other.cast_time;
        self.damage_taken *= other.damage_taken;
        self.movement_speed *= other.movement_speed;
    }

    /// Product of all sources; identity when empty
    pub fn aggregate<'a, I>(sources: I) -> StanceModifiers
    where
        I: IntoIterator<Item = &'a StanceModifiers>,
    {
        sources.into_iter().fold(Self::IDENTITY, |mut total, m| {
            total.stack(m);
            total
        })
    }

    /// The ability as it behaves under these modifiers
    pub fn apply(&self, ability: &AbilityDefinition) -> AbilityDefinition {
        let m = self.clamped();
        AbilityDefinition {
            damage: ability.damage * m.damage,
            heal_amount: ability.heal_amount * m.healing,
            cooldown: ability.cooldown * m.cooldown,
            mana_cost: ability.mana_cost * m.mana_cost,
            secondary_mana_cost: ability.secondary_mana_cost * m.mana_cost,
            cast_time: ability.cast_time * m.cast_time,
            ..ability.clone()
        }
    }
}

/// Selectable combat stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
    Arcane,
    Swift,
}

impl Stance {
    pub const ALL: [Stance; 5] = [
        Self::Balanced,
        Self::Aggressive,
        Self::Defensive,
        Self::Arcane,
        Self::Swift,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
            Self::Defensive => "Defensive",
            Self::Arcane => "Arcane",
            Self::Swift => "Swift",
        }
    }

    /// Fixed modifier set for this stance
    pub fn modifiers(self) -> StanceModifiers {
        match self {
            Self::Balanced => StanceModifiers::IDENTITY,
            Self::Aggressive => StanceModifiers {
                damage: 1.25,
                damage_taken: 1.2,
                healing: 0.8,
                ..StanceModifiers::IDENTITY
            },
            Self::Defensive => StanceModifiers {
                damage: 0.8,
                damage_taken: 0.7,
                movement_speed: 0.9,
                ..StanceModifiers::IDENTITY
            },
            Self::Arcane => StanceModifiers {
                mana_cost: 0.75,
                cast_time: 0.85,
                damage_taken: 1.1,
                ..StanceModifiers::IDENTITY
            },
            Self::Swift => StanceModifiers {
                cooldown: 0.85,
                movement_speed: 1.2,
                damage: 0.9,
                ..StanceModifiers::IDENTITY
            },
        }
    }
}
