use anyhow::Result;
use clap::Parser;
use edgelabel::cli::{Cli, Commands};
use edgelabel::commands::{annotate, init, label};
use edgelabel::config::{self, EdgelabelConfig};
use edgelabel::formatting::FormattingConfig;
use edgelabel::output::{create_writer, OutputFormat, Report};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        return init::init_config(&std::env::current_dir()?, force);
    }

    let config = load_config(&cli)?;
    let format = resolve_format(cli.format, &config);
    let formatting = resolve_formatting(cli.plain, &config);

    let report = run_command(cli.command)?;
    let mut writer = create_writer(format, std::io::stdout(), formatting);
    writer.write_report(&report)
}

// Log level comes from EDGELABEL_LOG, raised by -v flags
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("EDGELABEL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<EdgelabelConfig> {
    match &cli.config {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

// Pure function to pick the output format: flag, then config file
fn resolve_format(flag: Option<OutputFormat>, config: &EdgelabelConfig) -> OutputFormat {
    flag.unwrap_or_else(|| config.format())
}

// Pure function to create formatting configuration
fn resolve_formatting(plain: bool, config: &EdgelabelConfig) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        config.formatting()
    }
}

fn run_command(command: Commands) -> Result<Report> {
    let report = match command {
        Commands::Rate {
            probability,
            prediction_type,
        } => label::rate(probability, prediction_type),
        Commands::Badges(factors) => label::badges(factors.into()),
        Commands::Trend {
            game_id,
            probability,
        } => label::trend(&game_id, probability),
        Commands::Money { game_id } => label::money(&game_id),
        Commands::Annotate { input } => annotate::annotate(input.as_deref())?,
        Commands::Init { .. } => anyhow::bail!("init is handled before configuration loads"),
    };
    Ok(report)
}
