//! Presentation label mapper.
//!
//! Every function here is a pure mapping from probability or factor data to a
//! small annotation record. Nothing is cached and nothing is random, so calls
//! are safe from any number of threads.

pub mod badges;
pub mod context;
pub mod money;
pub mod rating;
pub mod seed;
pub mod terminology;
pub mod trend;

pub use badges::{
    describe_factor_key, select_why_badges, Factor, FactorSet, BADGE_THRESHOLD, VALUE_PLAY_BADGE,
};
pub use context::{context_badges, ContextBadge, GameFeatures};
pub use money::{public_money_tag, PublicMoney, PublicMoneyTag};
pub use rating::{classify_rating, probability_to_percent, Rating, RatingInfo};
pub use seed::{game_seed, GameId, Seed};
pub use terminology::{terminology_rating, PredictionType, TerminologyRating};
pub use trend::{describe_trend, trend_indicator, Trend, TrendInfo};
