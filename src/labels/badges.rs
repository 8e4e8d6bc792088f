//! "Why" badges explaining which factors drove a rating.

use serde::{Deserialize, Serialize};

/// Minimum factor score that earns a badge.
pub const BADGE_THRESHOLD: f64 = 80.0;

/// Badge emitted when no factor reaches [`BADGE_THRESHOLD`].
pub const VALUE_PLAY_BADGE: &str = "Value Play 💰";

/// Named prediction factor.
///
/// Variant order is the order badges are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    PitcherPerformance,
    Weather,
    HandednessMatchups,
    Bullpen,
    TeamMomentum,
    DefensiveMetrics,
    UmpireImpact,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::PitcherPerformance,
        Factor::Weather,
        Factor::HandednessMatchups,
        Factor::Bullpen,
        Factor::TeamMomentum,
        Factor::DefensiveMetrics,
        Factor::UmpireImpact,
    ];

    /// Snake-case key as produced by the prediction model.
    pub fn key(&self) -> &'static str {
        match self {
            Factor::PitcherPerformance => "pitcher_performance",
            Factor::Weather => "weather",
            Factor::HandednessMatchups => "handedness_matchups",
            Factor::Bullpen => "bullpen",
            Factor::TeamMomentum => "team_momentum",
            Factor::DefensiveMetrics => "defensive_metrics",
            Factor::UmpireImpact => "umpire_impact",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Factor::PitcherPerformance => "Pitcher Form 🔥",
            Factor::Weather => "Weather Edge 🌦️",
            Factor::HandednessMatchups => "Handedness Matchup 👍",
            Factor::Bullpen => "Bullpen Advantage 💪",
            Factor::TeamMomentum => "Team Momentum 📈",
            Factor::DefensiveMetrics => "Defensive Edge 🧤",
            Factor::UmpireImpact => "Umpire Trend 👁️",
        }
    }

    /// Long human-readable name for tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            Factor::PitcherPerformance => "Starting Pitcher Quality",
            Factor::Weather => "Weather Conditions Effect",
            Factor::HandednessMatchups => "Batter vs. Pitcher Handedness",
            Factor::Bullpen => "Relief Pitcher Availability",
            Factor::TeamMomentum => "Team's Recent Performance Trend",
            Factor::DefensiveMetrics => "Defensive Metrics & Fielding",
            Factor::UmpireImpact => "Home Plate Umpire Tendencies",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Factor scores (0-100) for a single game.
///
/// Factors the model did not report deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorSet {
    pub pitcher_performance: f64,
    pub weather: f64,
    pub handedness_matchups: f64,
    pub bullpen: f64,
    pub team_momentum: f64,
    pub defensive_metrics: f64,
    pub umpire_impact: f64,
}

impl FactorSet {
    pub fn score(&self, factor: Factor) -> f64 {
        match factor {
            Factor::PitcherPerformance => self.pitcher_performance,
            Factor::Weather => self.weather,
            Factor::HandednessMatchups => self.handedness_matchups,
            Factor::Bullpen => self.bullpen,
            Factor::TeamMomentum => self.team_momentum,
            Factor::DefensiveMetrics => self.defensive_metrics,
            Factor::UmpireImpact => self.umpire_impact,
        }
    }

    /// `(key, score)` pairs in declaration order.
    pub fn named_scores(&self) -> Vec<(String, f64)> {
        Factor::ALL
            .into_iter()
            .map(|f| (f.key().to_string(), self.score(f)))
            .collect()
    }

    /// Factors scoring at or above the badge threshold, in declaration order.
    pub fn significant_factors(&self) -> impl Iterator<Item = Factor> + '_ {
        Factor::ALL
            .into_iter()
            .filter(move |f| self.score(*f) >= BADGE_THRESHOLD)
    }
}

/// Select the "why" badges for a factor set.
///
/// Always returns between one and seven badges.
pub fn select_why_badges(factors: &FactorSet) -> Vec<String> {
    let badges: Vec<String> = factors
        .significant_factors()
        .map(|f| f.badge().to_string())
        .collect();

    if badges.is_empty() {
        vec![VALUE_PLAY_BADGE.to_string()]
    } else {
        badges
    }
}

/// Describe a factor key, including keys outside [`FactorSet`].
///
/// Unknown keys are title-cased: `travel_fatigue` becomes `Travel Fatigue`.
pub fn describe_factor_key(key: &str) -> String {
    if let Some(factor) = Factor::from_key(key) {
        return factor.description().to_string();
    }

    let known = match key {
        "batter_matchups" => Some("Batter vs. Pitcher History"),
        "ballpark_factors" => Some("Stadium Run-Scoring Impact"),
        "weather_impact" => Some("Weather Conditions Effect"),
        "defense" => Some("Defensive Metrics & Fielding"),
        "momentum" => Some("Team's Recent Performance Trend"),
        "travel_fatigue" => Some("Travel Schedule Impact"),
        "baserunning" => Some("Base Running Efficiency"),
        _ => None,
    };

    known
        .map(str::to_string)
        .unwrap_or_else(|| title_case(key))
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
