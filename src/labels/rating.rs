//! Rating classification from a win probability.
//!
//! A probability is converted to a whole percent and bucketed into one of six
//! ratings. Buckets have closed lower bounds and are checked from the top down:
//!
//! | Percent   | Rating      | Class            |
//! |-----------|-------------|------------------|
//! | >= 80     | Lock        | rating-lock      |
//! | 70..80    | Green Light | rating-green     |
//! | 60..70    | Favorable   | rating-favorable |
//! | 50..60    | Push        | rating-push      |
//! | 40..50    | Doubt       | rating-doubt     |
//! | < 40      | No-Go       | rating-nogo      |
//!
//! Inputs are never validated or clamped.

use serde::{Deserialize, Serialize};

/// Rating bucket for a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    NoGo,
    Doubt,
    Push,
    Favorable,
    GreenLight,
    Lock,
}

impl Rating {
    /// All ratings from weakest to strongest.
    pub const ALL: [Rating; 6] = [
        Rating::NoGo,
        Rating::Doubt,
        Rating::Push,
        Rating::Favorable,
        Rating::GreenLight,
        Rating::Lock,
    ];

    /// Bucket a whole percent.
    pub fn from_percent(percent: i64) -> Self {
        match percent {
            p if p >= 80 => Rating::Lock,
            p if p >= 70 => Rating::GreenLight,
            p if p >= 60 => Rating::Favorable,
            p if p >= 50 => Rating::Push,
            p if p >= 40 => Rating::Doubt,
            _ => Rating::NoGo,
        }
    }

    /// Bucket a probability after rounding it to a whole percent.
    pub fn from_probability(probability: f64) -> Self {
        Self::from_percent(probability_to_percent(probability))
    }

    /// Display label including the glyph.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Lock => "Lock 🔒",
            Rating::GreenLight => "Green Light 🟢",
            Rating::Favorable => "Favorable ⚾️",
            Rating::Push => "Push 🤔",
            Rating::Doubt => "Doubt ❌",
            Rating::NoGo => "No-Go 🚫",
        }
    }

    /// CSS-style class tag consumed by the rendering layer.
    pub fn class_name(&self) -> &'static str {
        match self {
            Rating::Lock => "rating-lock",
            Rating::GreenLight => "rating-green",
            Rating::Favorable => "rating-favorable",
            Rating::Push => "rating-push",
            Rating::Doubt => "rating-doubt",
            Rating::NoGo => "rating-nogo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::Lock => "Elite edge, high-confidence",
            Rating::GreenLight => "Strong lean",
            Rating::Favorable => "Above average",
            Rating::Push => "Coin toss",
            Rating::Doubt => "Below average, risky",
            Rating::NoGo => "Avoid at all costs",
        }
    }

    /// Record view of this rating.
    pub fn info(&self) -> RatingInfo {
        RatingInfo {
            label: self.label().to_string(),
            class: self.class_name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Annotation record produced by [`classify_rating`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingInfo {
    pub label: String,
    pub class: String,
    pub description: String,
}

/// Convert a probability to a whole percent, rounding half away from zero.
///
/// `NaN` maps to 0 and infinities saturate, so every `f64` has a percent.
pub fn probability_to_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

/// Classify a probability into its rating record.
pub fn classify_rating(probability: f64) -> RatingInfo {
    Rating::from_probability(probability).info()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_percent_boundaries() {
        assert_eq!(Rating::from_percent(100), Rating::Lock);
        assert_eq!(Rating::from_percent(80), Rating::Lock);
        assert_eq!(Rating::from_percent(79), Rating::GreenLight);
        assert_eq!(Rating::from_percent(70), Rating::GreenLight);
        assert_eq!(Rating::from_percent(69), Rating::Favorable);
        assert_eq!(Rating::from_percent(60), Rating::Favorable);
        assert_eq!(Rating::from_percent(59), Rating::Push);
        assert_eq!(Rating::from_percent(50), Rating::Push);
        assert_eq!(Rating::from_percent(49), Rating::Doubt);
        assert_eq!(Rating::from_percent(40), Rating::Doubt);
        assert_eq!(Rating::from_percent(39), Rating::NoGo);
        assert_eq!(Rating::from_percent(0), Rating::NoGo);
    }

    #[test]
    fn test_classify_rating_records() {
        assert_eq!(
            classify_rating(0.8),
            RatingInfo {
                label: "Lock 🔒".into(),
                class: "rating-lock".into(),
                description: "Elite edge, high-confidence".into(),
            }
        );
        assert_eq!(classify_rating(0.5).class, "rating-push");
        assert_eq!(classify_rating(0.5).description, "Coin toss");
        assert_eq!(classify_rating(0.794).label, "Green Light 🟢");
        assert_eq!(classify_rating(0.394).label, "No-Go 🚫");
        assert_eq!(classify_rating(0.65).class, "rating-favorable");
        assert_eq!(classify_rating(0.45).description, "Below average, risky");
    }

    #[test]
    fn test_rounding_crosses_into_higher_bucket() {
        // 79.9 and 39.9 round up to the next bucket's lower bound
        assert_eq!(Rating::from_probability(0.799), Rating::Lock);
        assert_eq!(Rating::from_probability(0.399), Rating::Doubt);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(probability_to_percent(0.625), 63);
        assert_eq!(probability_to_percent(0.125), 13);
        assert_eq!(probability_to_percent(-0.125), -13);
    }

    #[test]
    fn test_half_percent_below_lock_rounds_up() {
        assert_eq!(probability_to_percent(0.795), 80);
        assert_eq!(Rating::from_probability(0.795), Rating::Lock);
    }

    #[test]
    fn test_out_of_range_inputs_are_not_clamped() {
        assert_eq!(Rating::from_probability(1.7), Rating::Lock);
        assert_eq!(Rating::from_probability(-0.3), Rating::NoGo);
        assert_eq!(Rating::from_probability(f64::NAN), Rating::NoGo);
        assert_eq!(Rating::from_probability(f64::INFINITY), Rating::Lock);
        assert_eq!(Rating::from_probability(f64::NEG_INFINITY), Rating::NoGo);
    }

    proptest! {
        #[test]
        fn prop_every_probability_has_one_known_class(p in 0.0f64..=1.0) {
            let info = classify_rating(p);
            let matches = Rating::ALL
                .iter()
                .filter(|r| r.class_name() == info.class)
                .count();
            prop_assert_eq!(matches, 1);
        }

        #[test]
        fn prop_rating_is_monotonic(a in -2.0f64..2.0, b in -2.0f64..2.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Rating::from_probability(lo) <= Rating::from_probability(hi));
        }
    }
}
