//! Single-label commands: rate, badges, trend, money.
use crate::cli::FactorArgs;
use crate::labels::{
    classify_rating, game_seed, probability_to_percent, public_money_tag, select_why_badges,
    terminology_rating, trend_indicator, FactorSet, GameId, PredictionType,
};
use crate::output::{RatingReport, Report};
use tracing::debug;

pub fn rate(probability: f64, prediction_type: Option<PredictionType>) -> Report {
    let percent = probability_to_percent(probability);
    let info = classify_rating(probability);
    debug!(probability, percent, class = %info.class, "classified rating");

    Report::Rating(RatingReport {
        percent,
        info,
        terminology: prediction_type.map(|market| terminology_rating(probability * 100.0, market)),
    })
}

impl From<FactorArgs> for FactorSet {
    fn from(args: FactorArgs) -> Self {
        FactorSet {
            pitcher_performance: args.pitcher_performance,
            weather: args.weather,
            handedness_matchups: args.handedness_matchups,
            bullpen: args.bullpen,
            team_momentum: args.team_momentum,
            defensive_metrics: args.defensive_metrics,
            umpire_impact: args.umpire_impact,
        }
    }
}

pub fn badges(factors: FactorSet) -> Report {
    let badges = select_why_badges(&factors);
    debug!(count = badges.len(), "selected badges");
    Report::Badges(badges)
}

pub fn trend(game_id: &str, probability: f64) -> Report {
    let id = GameId::from(game_id);
    debug!(game_id, seed = %game_seed(&id), "derived trend seed");
    Report::Trend(trend_indicator(&id, probability))
}

pub fn money(game_id: &str) -> Report {
    let id = GameId::from(game_id);
    debug!(game_id, seed = %game_seed(&id), "derived public money seed");
    Report::Money(public_money_tag(&id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rate_report() {
        match rate(0.66, Some(PredictionType::Under1Run)) {
            Report::Rating(report) => {
                assert_eq!(report.percent, 66);
                assert_eq!(report.info.class, "rating-favorable");
                assert_eq!(
                    report.terminology.map(|t| t.description),
                    Some("Pitching Advantage".to_string())
                );
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_badges_from_cli_args() {
        let args = FactorArgs {
            weather: 80.0,
            team_momentum: 95.0,
            ..Default::default()
        };
        assert_eq!(
            badges(args.into()),
            Report::Badges(vec![
                "Weather Edge 🌦️".to_string(),
                "Team Momentum 📈".to_string()
            ])
        );
    }

    #[test]
    fn test_trend_and_money_reports() {
        match trend("130", 0.9) {
            Report::Trend(info) => assert_eq!(info.indicator, "↑"),
            other => panic!("unexpected report: {:?}", other),
        }
        match money("45") {
            Report::Money(tag) => assert_eq!(tag.text, "Public Fade"),
            other => panic!("unexpected report: {:?}", other),
        }
    }
}
