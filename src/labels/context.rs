//! Context badges drawn from game conditions: starters, park, weather and the
//! strongest model factors.

use super::badges::describe_factor_key;
use serde::{Deserialize, Serialize};

/// Starter ERA below this marks an ace.
pub const ACE_ERA: f64 = 3.0;

/// Factor score a top factor must exceed to earn a context badge.
pub const STRONG_FACTOR_SCORE: f64 = 70.0;

const PRECIPITATION: [&str; 3] = ["rain", "drizzle", "thunderstorm"];

/// Game conditions reported alongside a prediction.
///
/// Fields the feed leaves out take neutral values, so they never earn a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameFeatures {
    pub home_pitcher_era: f64,
    pub away_pitcher_era: f64,
    pub ballpark_runs_factor: f64,
    pub weather_condition: String,
    pub temperature: f64,
    pub wind_speed: f64,
}

impl Default for GameFeatures {
    fn default() -> Self {
        Self {
            home_pitcher_era: 5.0,
            away_pitcher_era: 5.0,
            ballpark_runs_factor: 1.0,
            weather_condition: String::new(),
            temperature: 70.0,
            wind_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBadge {
    pub label: String,
    pub icon: String,
    pub description: String,
}

impl ContextBadge {
    fn new(label: &str, icon: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }
}

fn pitching_badge(features: &GameFeatures) -> Option<ContextBadge> {
    (features.home_pitcher_era < ACE_ERA || features.away_pitcher_era < ACE_ERA)
        .then(|| ContextBadge::new("Ace Pitcher", "🔥", "Elite starter on the mound"))
}

fn park_badge(features: &GameFeatures) -> Option<ContextBadge> {
    let factor = features.ballpark_runs_factor;
    if factor < 0.9 {
        Some(ContextBadge::new("Pitcher's Park", "🏟️", "Stadium favors pitchers"))
    } else if factor > 1.1 {
        Some(ContextBadge::new("Hitter's Park", "🏟️", "Stadium favors hitters"))
    } else {
        None
    }
}

/// Precipitation wins over temperature; only one weather badge is given.
fn weather_badge(features: &GameFeatures) -> Option<ContextBadge> {
    let condition = features.weather_condition.to_lowercase();
    if PRECIPITATION.contains(&condition.as_str()) {
        Some(ContextBadge::new("Weather Factor", "🌧️", "Precipitation may affect play"))
    } else if features.temperature < 50.0 {
        Some(ContextBadge::new("Cold Weather", "❄️", "Cold temperatures favor pitchers"))
    } else if features.temperature > 85.0 {
        Some(ContextBadge::new("Hot Weather", "🔥", "Heat favors hitters"))
    } else {
        None
    }
}

fn wind_badge(features: &GameFeatures) -> Option<ContextBadge> {
    (features.wind_speed > 15.0)
        .then(|| ContextBadge::new("Wind Factor", "💨", "Strong winds may affect ball flight"))
}

/// Badges for the two highest-scoring factors that clear [`STRONG_FACTOR_SCORE`].
/// Ties keep input order.
fn top_factor_badges(factors: &[(String, f64)]) -> Vec<ContextBadge> {
    let mut ranked: Vec<&(String, f64)> = factors.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(2)
        .filter(|(_, score)| *score > STRONG_FACTOR_SCORE)
        .map(|(key, _)| {
            let description = describe_factor_key(key);
            ContextBadge {
                icon: "⭐".to_string(),
                description: format!("Strong {} advantage", description.to_lowercase()),
                label: description,
            }
        })
        .collect()
}

/// Context badges for a game, in a fixed order: pitching, park, weather,
/// wind, then top factors.
pub fn context_badges(features: &GameFeatures, factors: &[(String, f64)]) -> Vec<ContextBadge> {
    [
        pitching_badge(features),
        park_badge(features),
        weather_badge(features),
        wind_badge(features),
    ]
    .into_iter()
    .flatten()
    .chain(top_factor_badges(factors))
    .collect()
}
