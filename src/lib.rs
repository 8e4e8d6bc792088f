//! Display labels for betting-probability data.
//!
//! The [`labels`] module holds the pure mappers: ratings, why-badges, trend
//! arrows and public-money tags. The remaining modules are the shell used by
//! the `edgelabel` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod game;
pub mod labels;
pub mod output;

pub use crate::errors::{Error, Result};

pub use crate::labels::{
    classify_rating, context_badges, describe_factor_key, describe_trend, game_seed,
    public_money_tag, select_why_badges, terminology_rating, trend_indicator, ContextBadge,
    Factor, FactorSet, GameFeatures, GameId, PredictionType, PublicMoney, PublicMoneyTag, Rating, RatingInfo, Seed, TerminologyRating,
    Trend, TrendInfo,
};

pub use crate::game::{annotate_game, annotate_games, GameAnnotation, GameRecord};

pub use crate::output::{create_writer, OutputFormat, OutputWriter, Report};
