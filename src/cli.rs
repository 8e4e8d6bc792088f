use crate::labels::PredictionType;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edgelabel")]
#[command(about = "Display labels for betting-probability data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Plain output: no colors, no emoji
    #[arg(long, global = true)]
    pub plain: bool,

    /// Configuration file (defaults to the nearest .edgelabel.toml)
    #[arg(long, global = true, env = "EDGELABEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rate a win probability (0-1)
    Rate {
        #[arg(allow_negative_numbers = true)]
        probability: f64,

        /// Also show market vocabulary (under_1_run, over_2_5_runs, over_3_5_runs)
        #[arg(long = "prediction-type")]
        prediction_type: Option<PredictionType>,
    },

    /// Show the "why" badges for a set of factor scores (0-100)
    Badges(FactorArgs),

    /// Show the trend indicator for a game
    Trend {
        #[arg(allow_hyphen_values = true)]
        game_id: String,

        /// Win probability shown alongside the trend (does not change it)
        #[arg(long, default_value = "0.5")]
        probability: f64,
    },

    /// Show the public-money tag for a game
    Money {
        #[arg(allow_hyphen_values = true)]
        game_id: String,
    },

    /// Annotate game records read as JSON from a file or stdin
    Annotate {
        /// JSON file with one game record or an array of them (defaults to stdin)
        input: Option<PathBuf>,
    },

    /// Write a default .edgelabel.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FactorArgs {
    #[arg(long, default_value_t = 0.0)]
    pub pitcher_performance: f64,
    #[arg(long, default_value_t = 0.0)]
    pub weather: f64,
    #[arg(long, default_value_t = 0.0)]
    pub handedness_matchups: f64,
    #[arg(long, default_value_t = 0.0)]
    pub bullpen: f64,
    #[arg(long, default_value_t = 0.0)]
    pub team_momentum: f64,
    #[arg(long, default_value_t = 0.0)]
    pub defensive_metrics: f64,
    #[arg(long, default_value_t = 0.0)]
    pub umpire_impact: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rate_with_prediction_type() {
        let cli = Cli::parse_from([
            "edgelabel",
            "rate",
            "0.72",
            "--prediction-type",
            "over_2_5_runs",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Rate {
                probability,
                prediction_type,
            } => {
                assert_eq!(probability, 0.72);
                assert_eq!(prediction_type, Some(PredictionType::Over2_5Runs));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_badges_defaults_to_zero() {
        let cli = Cli::parse_from(["edgelabel", "badges", "--bullpen", "92"]);
        match cli.command {
            Commands::Badges(args) => {
                assert_eq!(args.bullpen, 92.0);
                assert_eq!(args.weather, 0.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_game_ids_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["edgelabel", "trend", "-130"]).unwrap();
        match cli.command {
            Commands::Trend { game_id, .. } => assert_eq!(game_id, "-130"),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["edgelabel", "money", "-12"]).unwrap();
        match cli.command {
            Commands::Money { game_id } => assert_eq!(game_id, "-12"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_prediction_type() {
        let result = Cli::try_parse_from(["edgelabel", "rate", "0.5", "--prediction-type", "nrfi"]);
        assert!(result.is_err());
    }
}
