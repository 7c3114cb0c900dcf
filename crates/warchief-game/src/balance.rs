//! Balance classification bands
//!
//! Four contiguous bands over the score line:
//! Underpowered < 4.0 <= Balanced < 15.0 <= Overpowered < 30.0 <= Extreme

use serde::{Deserialize, Serialize};
use warchief_core::{palette, Color};

/// Scores below this are underpowered
pub const BALANCED_CUTOFF: f32 = 4.0;
/// Scores at or above this are overpowered
pub const OVERPOWERED_CUTOFF: f32 = 15.0;
/// Scores at or above this are extreme
pub const EXTREME_CUTOFF: f32 = 30.0;

/// Balance classification of an ability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BalanceClass {
    Underpowered,
    Balanced,
    Overpowered,
    Extreme,
}

impl BalanceClass {
    /// Classify a score. NaN falls into `Underpowered`, `+inf` into `Extreme`.
    pub fn classify(score: f32) -> Self {
        if score >= EXTREME_CUTOFF {
            Self::Extreme
        } else if score >= OVERPOWERED_CUTOFF {
            Self::Overpowered
        } else if score >= BALANCED_CUTOFF {
            Self::Balanced
        } else {
            Self::Underpowered
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Underpowered => "Underpowered",
            Self::Balanced => "Balanced",
            Self::Overpowered => "Overpowered",
            Self::Extreme => "Extreme",
        }
    }

    /// Badge color
    pub fn color(self) -> Color {
        match self {
            Self::Underpowered => palette::BADGE_BLUE,
            Self::Balanced => palette::BADGE_GREEN,
            Self::Overpowered => palette::BADGE_ORANGE,
            Self::Extreme => palette::BADGE_RED,
        }
    }

    /// Score interval `(low, high)` covered by this band.
    ///
    /// Every band is half-open `[low, high)` except `Extreme`, which is
    /// closed at `+inf`. Ability scores are clamped to `f32::MAX`, so only
    /// direct `classify` calls can reach the infinite end.
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::Underpowered => (f32::NEG_INFINITY, BALANCED_CUTOFF),
            Self::Balanced => (BALANCED_CUTOFF, OVERPOWERED_CUTOFF),
            Self::Overpowered => (OVERPOWERED_CUTOFF, EXTREME_CUTOFF),
            Self::Extreme => (EXTREME_CUTOFF, f32::INFINITY),
        }
    }
}

/// Outcome of scoring an ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f32,
    pub classification: BalanceClass,
    /// Short badge text, e.g. "Balanced (9.5)"
    pub label: String,
}

impl ScoreResult {
    /// Classify a raw score and build its label
    pub fn from_score(score: f32) -> Self {
        let classification = BalanceClass::classify(score);
        Self {
            score,
            classification,
            label: format!("{} ({:.1})", classification.name(), score),
        }
    }

    /// Badge color for the classification
    pub fn color(&self) -> Color {
        self.classification.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BalanceClass; 4] = [
        BalanceClass::Underpowered,
        BalanceClass::Balanced,
        BalanceClass::Overpowered,
        BalanceClass::Extreme,
    ];

    #[test]
    fn test_cutoffs_ascending() {
        assert!(BALANCED_CUTOFF < OVERPOWERED_CUTOFF);
        assert!(OVERPOWERED_CUTOFF < EXTREME_CUTOFF);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(BalanceClass::classify(3.99), BalanceClass::Underpowered);
        assert_eq!(BalanceClass::classify(4.0), BalanceClass::Balanced);
        assert_eq!(BalanceClass::classify(14.99), BalanceClass::Balanced);
        assert_eq!(BalanceClass::classify(15.0), BalanceClass::Overpowered);
        assert_eq!(BalanceClass::classify(30.0), BalanceClass::Extreme);
        assert_eq!(BalanceClass::classify(f32::INFINITY), BalanceClass::Extreme);
        assert_eq!(BalanceClass::classify(-1.0), BalanceClass::Underpowered);
        assert_eq!(BalanceClass::classify(f32::NAN), BalanceClass::Underpowered);
    }

    #[test]
    fn test_bands_are_contiguous() {
        for pair in ALL.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
        assert_eq!(ALL[0].range().0, f32::NEG_INFINITY);
        assert_eq!(ALL[3].range().1, f32::INFINITY);
    }

    #[test]
    fn test_every_score_lands_in_its_own_band() {
        let mut score = -10.0_f32;
        while score < 50.0 {
            let class = BalanceClass::classify(score);
            let (low, high) = class.range();
            assert!(score >= low && score < high, "score {score} outside {class:?}");
            let containing = ALL
                .iter()
                .filter(|c| {
                    let (l, h) = c.range();
                    score >= l && score < h
                })
                .count();
            assert_eq!(containing, 1);
            score += 0.25;
        }
    }

    #[test]
    fn test_extreme_band_is_closed_above() {
        let (low, high) = BalanceClass::Extreme.range();
        for score in [EXTREME_CUTOFF, f32::MAX, f32::INFINITY] {
            assert!(score >= low && score <= high);
            assert_eq!(BalanceClass::classify(score), BalanceClass::Extreme);
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_label_format() {
        let result = ScoreResult::from_score(9.46);
        assert_eq!(result.classification, BalanceClass::Balanced);
        assert_eq!(result.label, "Balanced (9.5)");
        assert_eq!(result.color(), palette::BADGE_GREEN);
    }
}
