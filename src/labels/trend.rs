//! Trend arrows for a game's line movement.
use super::seed::{game_seed, GameId, Seed};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    StrongUp,
    WeakUp,
    WeakDown,
    StrongDown,
}

impl Trend {
    /// Bucket a seed: `[..30)`, `[30,60)`, `[60,80)`, then everything else.
    pub fn from_seed(seed: Seed) -> Self {
        if seed.is_below(30) {
            Trend::StrongUp
        } else if seed.is_below(60) {
            Trend::WeakUp
        } else if seed.is_below(80) {
            Trend::WeakDown
        } else {
            Trend::StrongDown
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Trend::StrongUp => "↑↑",
            Trend::WeakUp => "↑",
            Trend::WeakDown => "↓",
            Trend::StrongDown => "↓↓",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Trend::StrongUp | Trend::WeakUp => "trend-up",
            Trend::WeakDown | Trend::StrongDown => "trend-down",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Trend::StrongUp => "Rising confidence",
            Trend::WeakUp => "Slight improvement",
            Trend::WeakDown => "Slight fade",
            Trend::StrongDown => "Sharp fade",
        }
    }

    pub fn info(&self) -> TrendInfo {
        TrendInfo {
            indicator: self.indicator().to_string(),
            class: self.class_name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Annotation record produced by [`trend_indicator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendInfo {
    pub indicator: String,
    pub class: String,
    pub description: String,
}

/// Trend indicator for a game.
///
/// `_probability` is accepted for call-site compatibility with the display
/// layer; the indicator depends on the game id alone.
pub fn trend_indicator(game_id: &GameId, _probability: f64) -> TrendInfo {
    Trend::from_seed(game_seed(game_id)).info()
}

/// Long description for a trend arrow, including the flat `→` arrow.
pub fn describe_trend(indicator: &str) -> &'static str {
    match indicator {
        "↑↑" => "Rapidly Improving",
        "↑" => "Improving",
        "→" => "Stable",
        "↓" => "Declining",
        "↓↓" => "Rapidly Declining",
        _ => "Unknown Trend",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn trend_of(id: &str) -> Trend {
        Trend::from_seed(game_seed(&GameId::from(id)))
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(trend_of("0"), Trend::StrongUp);
        assert_eq!(trend_of("29"), Trend::StrongUp);
        assert_eq!(trend_of("30"), Trend::WeakUp);
        assert_eq!(trend_of("59"), Trend::WeakUp);
        assert_eq!(trend_of("60"), Trend::WeakDown);
        assert_eq!(trend_of("79"), Trend::WeakDown);
        assert_eq!(trend_of("80"), Trend::StrongDown);
        assert_eq!(trend_of("99"), Trend::StrongDown);
    }

    #[test]
    fn test_trend_indicator_records() {
        assert_eq!(
            trend_indicator(&GameId::from("29"), 0.7),
            TrendInfo {
                indicator: "↑↑".into(),
                class: "trend-up".into(),
                description: "Rising confidence".into(),
            }
        );
        assert_eq!(trend_indicator(&GameId::from("130"), 0.7).indicator, "↑");
        assert_eq!(trend_indicator(&GameId::from(165i64), 0.2).class, "trend-down");
    }

    #[test]
    fn test_negative_and_non_numeric_ids() {
        assert_eq!(trend_of("-85"), Trend::StrongUp);
        assert_eq!(trend_of("game-seven"), Trend::StrongDown);
    }

    #[test]
    fn test_probability_does_not_affect_trend() {
        let id = GameId::from("61");
        assert_eq!(trend_indicator(&id, 0.0), trend_indicator(&id, 1.0));
    }

    #[test]
    fn test_describe_trend() {
        assert_eq!(describe_trend("↑↑"), "Rapidly Improving");
        assert_eq!(describe_trend("→"), "Stable");
        assert_eq!(describe_trend("↓↓"), "Rapidly Declining");
        assert_eq!(describe_trend("?"), "Unknown Trend");
    }

    proptest! {
        #[test]
        fn prop_trend_is_function_of_id_mod_100(id in 0i64..1_000_000) {
            let a = trend_indicator(&GameId::from(id), 0.5);
            let b = trend_indicator(&GameId::from((id % 100).to_string()), 0.9);
            prop_assert_eq!(a, b);
        }
    }
}
