//! Whole-game annotation combining every label for one prediction.
use crate::errors::{Error, Result};
use crate::labels::{
    classify_rating, context_badges, probability_to_percent, public_money_tag,
    select_why_badges, terminology_rating, trend_indicator, ContextBadge, FactorSet,
    GameFeatures, GameId, PredictionType, PublicMoneyTag, RatingInfo, TerminologyRating,
    TrendInfo,
};
use serde::{Deserialize, Serialize};

/// Prediction output for a single game, as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// A missing id reads as [`GameId::Unknown`].
    #[serde(default)]
    pub game_id: GameId,
    pub probability: f64,
    #[serde(default)]
    pub factors: FactorSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_type: Option<PredictionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<GameFeatures>,
}

/// Every display label for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAnnotation {
    pub game_id: GameId,
    pub percent: i64,
    pub rating: RatingInfo,
    pub badges: Vec<String>,
    pub trend: TrendInfo,
    pub public_money: PublicMoneyTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminology: Option<TerminologyRating>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<ContextBadge>,
}

pub fn annotate_game(game: &GameRecord) -> GameAnnotation {
    let percent = probability_to_percent(game.probability);

    GameAnnotation {
        game_id: game.game_id.clone(),
        percent,
        rating: classify_rating(game.probability),
        badges: select_why_badges(&game.factors),
        trend: trend_indicator(&game.game_id, game.probability),
        public_money: public_money_tag(&game.game_id),
        terminology: game
            .prediction_type
            .map(|market| terminology_rating(game.probability * 100.0, market)),
        context: game
            .features
            .as_ref()
            .map(|features| context_badges(features, &game.factors.named_scores()))
            .unwrap_or_default(),
    }
}

pub fn annotate_games(games: &[GameRecord]) -> Vec<GameAnnotation> {
    games.iter().map(annotate_game).collect()
}

/// Parse game records from JSON: either one object or an array of them.
pub fn parse_games(json: &str) -> Result<Vec<GameRecord>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<GameRecord>),
        One(GameRecord),
    }

    let parsed: OneOrMany = serde_json::from_str(json)
        .map_err(|e| Error::input(format!("Failed to parse game records: {}", e)))?;

    Ok(match parsed {
        OneOrMany::Many(games) => games,
        OneOrMany::One(game) => vec![game],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn sample_game() -> GameRecord {
        GameRecord {
            game_id: GameId::from("745129"),
            probability: 0.72,
            factors: FactorSet {
                pitcher_performance: 88.0,
                defensive_metrics: 81.0,
                ..Default::default()
            },
            prediction_type: Some(PredictionType::Under1Run),
            features: None,
        }
    }

    #[test]
    fn test_annotate_game_combines_labels() {
        let annotation = annotate_game(&sample_game());

        assert_eq!(annotation.percent, 72);
        assert_eq!(annotation.rating.class, "rating-green");
        assert_eq!(annotation.badges, vec!["Pitcher Form 🔥", "Defensive Edge 🧤"]);
        assert_eq!(annotation.trend.indicator, "↑↑");
        assert_eq!(annotation.public_money.text, "Sharp Money");
        assert_eq!(
            annotation.terminology.map(|t| t.description),
            Some("Strong Pitching Edge".to_string())
        );
    }

    #[test]
    fn test_annotation_is_deterministic() {
        let game = sample_game();
        assert_eq!(annotate_game(&game), annotate_game(&game));
    }

    #[test]
    fn test_parse_games_accepts_object_or_array() {
        let single = parse_games(r#"{"game_id": 17, "probability": 0.41}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].game_id, GameId::Numeric(17));
        assert_eq!(single[0].factors, FactorSet::default());
        assert_eq!(single[0].prediction_type, None);

        let many = parse_games(indoc! {r#"
            [
              {"game_id": "101", "probability": 0.81, "factors": {"bullpen": 90}},
              {"game_id": "nyy-bos", "probability": 0.33, "prediction_type": "over_2_5_runs"}
            ]
        "#})
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].prediction_type, Some(PredictionType::Over2_5Runs));

        let annotations = annotate_games(&many);
        assert_eq!(annotations[0].badges, vec!["Bullpen Advantage 💪"]);
        assert_eq!(annotations[1].trend.indicator, "↓↓");
        assert_eq!(annotations[1].public_money.text, "Public Favorite");
    }

    #[test]
    fn test_loose_game_ids_do_not_fail_the_batch() {
        let games = parse_games(indoc! {r#"
            [
              {"game_id": 745.0, "probability": 0.5},
              {"game_id": null, "probability": 0.5},
              {"probability": 0.5},
              {"game_id": 18446744073709551615, "probability": 0.5}
            ]
        "#})
        .unwrap();
        assert_eq!(games[0].game_id, GameId::Numeric(745));
        assert_eq!(games[1].game_id, GameId::Unknown);
        assert_eq!(games[2].game_id, GameId::Unknown);

        let annotations = annotate_games(&games);
        assert_eq!(annotations[0].public_money.text, "Public Fade");
        assert_eq!(annotations[1].trend.indicator, "↓↓");
        assert_eq!(annotations[2].public_money.text, "Public Favorite");
        assert_eq!(annotations[3].trend.indicator, "↑↑");
    }

    #[test]
    fn test_parse_games_rejects_malformed_input() {
        let err = parse_games(r#"{"game_id": 17}"#).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(parse_games("not json").is_err());
    }

    #[test]
    fn test_features_add_context_badges() {
        let game: GameRecord = serde_json::from_str(indoc! {r#"
            {
              "game_id": 12,
              "probability": 0.66,
              "factors": {"bullpen": 84, "weather": 40},
              "features": {"home_pitcher_era": 2.8, "temperature": 45}
            }
        "#})
        .unwrap();
        let labels: Vec<String> = annotate_game(&game)
            .context
            .into_iter()
            .map(|badge| badge.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Ace Pitcher", "Cold Weather", "Relief Pitcher Availability"]
        );
        assert!(annotate_game(&sample_game()).context.is_empty());
    }

    #[test]
    fn test_annotation_serializes_without_empty_terminology() {
        let mut game = sample_game();
        game.prediction_type = None;
        let json = serde_json::to_value(annotate_game(&game)).unwrap();
        assert!(json.get("terminology").is_none());
        assert!(json.get("context").is_none());
        assert_eq!(json["game_id"], "745129");
        assert_eq!(json["rating"]["label"], "Green Light 🟢");
    }
}
