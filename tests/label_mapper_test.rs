//! Public-API checks for the label mappers.
use edgelabel::{
    classify_rating, public_money_tag, select_why_badges, trend_indicator, FactorSet, GameId,
    Rating,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_rating_examples() {
    assert_eq!(classify_rating(0.8).label, "Lock 🔒");
    assert_eq!(classify_rating(0.5).label, "Push 🤔");
    assert_eq!(classify_rating(0.794).label, "Green Light 🟢");
    assert_eq!(classify_rating(0.394).label, "No-Go 🚫");
    assert_eq!(classify_rating(0.61).class, "rating-favorable");
    assert_eq!(classify_rating(0.41).class, "rating-doubt");
}

#[test]
fn test_every_rating_class_is_reachable() {
    let classes: Vec<String> = [0.1, 0.45, 0.55, 0.65, 0.75, 0.95]
        .iter()
        .map(|p| classify_rating(*p).class)
        .collect();
    let expected: Vec<String> = Rating::ALL
        .iter()
        .map(|r| r.class_name().to_string())
        .collect();
    assert_eq!(classes, expected);
}

#[test]
fn test_seeded_label_examples() {
    assert_eq!(trend_indicator(&GameId::from("29"), 0.6).indicator, "↑↑");
    assert_eq!(trend_indicator(&GameId::from("130"), 0.6).indicator, "↑");
    assert_eq!(public_money_tag(&GameId::from("45")).text, "Public Fade");
}

#[test]
fn test_badges_example() {
    let factors = FactorSet {
        handedness_matchups: 83.0,
        pitcher_performance: 95.0,
        ..Default::default()
    };
    assert_eq!(
        select_why_badges(&factors),
        vec!["Pitcher Form 🔥", "Handedness Matchup 👍"]
    );
}

proptest! {
    #[test]
    fn prop_seeded_labels_are_deterministic(id in "[0-9a-z-]{0,12}") {
        let game = GameId::from(id.as_str());
        prop_assert_eq!(public_money_tag(&game), public_money_tag(&game));
        prop_assert_eq!(trend_indicator(&game, 0.3), trend_indicator(&game, 0.3));
    }

    #[test]
    fn prop_seeded_labels_depend_only_on_id_mod_100(id in 0i64..10_000_000, k in 0i64..1000) {
        let a = GameId::from(id);
        let b = GameId::from(id % 100 + 100 * k);
        prop_assert_eq!(public_money_tag(&a), public_money_tag(&b));
        prop_assert_eq!(trend_indicator(&a, 0.1), trend_indicator(&b, 0.9));
    }
}
