//! Baseball vocabulary for first-inning market ratings.
//!
//! Unlike [`classify_rating`](super::rating::classify_rating), these labels
//! take a percent that is already on the 0-100 scale and compare it unrounded.
//! Descriptions depend on which side of the run line the prediction is for:
//! an under bet is carried by pitching, an over bet by hitting.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First-inning market a prediction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionType {
    #[serde(rename = "under_1_run")]
    Under1Run,
    #[serde(rename = "over_2_5_runs")]
    Over2_5Runs,
    #[serde(rename = "over_3_5_runs")]
    Over3_5Runs,
}

impl PredictionType {
    pub fn key(&self) -> &'static str {
        match self {
            PredictionType::Under1Run => "under_1_run",
            PredictionType::Over2_5Runs => "over_2_5_runs",
            PredictionType::Over3_5Runs => "over_3_5_runs",
        }
    }

    fn is_under(&self) -> bool {
        matches!(self, PredictionType::Under1Run)
    }
}

impl FromStr for PredictionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "under_1_run" => Ok(PredictionType::Under1Run),
            "over_2_5_runs" => Ok(PredictionType::Over2_5Runs),
            "over_3_5_runs" => Ok(PredictionType::Over3_5Runs),
            other => Err(Error::Input(format!(
                "unknown prediction type '{}' (expected under_1_run, over_2_5_runs or over_3_5_runs)",
                other
            ))),
        }
    }
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Label record with a tooltip for hover text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminologyRating {
    pub label: String,
    pub icon: String,
    pub description: String,
    pub tooltip: String,
}

/// Rating vocabulary for a percent and market.
pub fn terminology_rating(percent: f64, prediction_type: PredictionType) -> TerminologyRating {
    let under = prediction_type.is_under();

    let (label, icon, description, tooltip) = if percent >= 80.0 {
        if under {
            (
                "Lock 🔒",
                "🔒",
                "Elite Pitching Matchup",
                "Top-tier pitchers facing struggling offenses, extremely high confidence",
            )
        } else {
            (
                "Lock 🔒",
                "🔒",
                "Elite Hitting Matchup",
                "Top offenses facing struggling pitchers, extremely high confidence",
            )
        }
    } else if percent >= 70.0 {
        if under {
            (
                "Green Light 🟢",
                "🟢",
                "Strong Pitching Edge",
                "Quality starters with history of scoreless first innings",
            )
        } else {
            (
                "Green Light 🟢",
                "🟢",
                "Strong Hitting Edge",
                "Quality offenses with history of early inning scoring",
            )
        }
    } else if percent >= 60.0 {
        if under {
            (
                "Favorable ⚾️",
                "⚾️",
                "Pitching Advantage",
                "Pitchers have edge over opposing lineups in first inning",
            )
        } else {
            (
                "Favorable ⚾️",
                "⚾️",
                "Hitting Advantage",
                "Batters have edge over opposing pitchers in early innings",
            )
        }
    } else if percent >= 50.0 {
        if under {
            (
                "Even Odds",
                "⚖️",
                "Balanced Matchup",
                "Neither pitching nor hitting has a significant advantage",
            )
        } else {
            (
                "Even Odds",
                "⚖️",
                "Balanced Matchup",
                "Neither hitting nor pitching has a significant advantage",
            )
        }
    } else if percent >= 40.0 {
        if under {
            (
                "Caution",
                "⚠️",
                "Hitting Advantage",
                "Offenses likely to score in the first inning",
            )
        } else {
            (
                "Caution",
                "⚠️",
                "Pitching Advantage",
                "Pitchers likely to limit scoring in early innings",
            )
        }
    } else if under {
        (
            "Avoid",
            "🚫",
            "Strong Hitting Matchup",
            "High probability of first inning scoring, avoid this under bet",
        )
    } else {
        (
            "Avoid",
            "🚫",
            "Strong Pitching Matchup",
            "High probability of limited scoring, avoid this over bet",
        )
    };

    TerminologyRating {
        label: label.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        tooltip: tooltip.to_string(),
    }
}
