//! Writers that render label reports as terminal text, JSON or markdown.
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::game::GameAnnotation;
use crate::labels::{PublicMoneyTag, RatingInfo, TerminologyRating, TrendInfo};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Rating of a single probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingReport {
    pub percent: i64,
    #[serde(flatten)]
    pub info: RatingInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology: Option<TerminologyRating>,
}

/// Anything a command can print. JSON output is the bare inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Rating(RatingReport),
    Badges(Vec<String>),
    Trend(TrendInfo),
    Money(PublicMoneyTag),
    Games(Vec<GameAnnotation>),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: Box::new(ColoredFormatter::new(config)),
        }
    }

    pub fn with_formatter(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    fn write_rating(&mut self, report: &RatingReport) -> anyhow::Result<()> {
        let label = self.formatter.label(&report.info.label);
        writeln!(
            self.writer,
            "{} {}",
            self.formatter
                .class_style(&self.formatter.bold(&label), &report.info.class),
            self.formatter.dim(&format!("({}%)", report.percent))
        )?;
        writeln!(self.writer, "  {}", report.info.description)?;
        if let Some(terminology) = &report.terminology {
            writeln!(
                self.writer,
                "  {}: {}",
                self.formatter.label(&terminology.label),
                terminology.description
            )?;
            writeln!(self.writer, "  {}", self.formatter.dim(&terminology.tooltip))?;
        }
        Ok(())
    }

    fn write_badges(&mut self, badges: &[String]) -> anyhow::Result<()> {
        for badge in badges {
            writeln!(self.writer, "- {}", self.formatter.label(badge))?;
        }
        Ok(())
    }

    fn write_trend(&mut self, trend: &TrendInfo) -> anyhow::Result<()> {
        let arrow = self.trend_arrow(&trend.indicator);
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.class_style(&arrow, &trend.class),
            trend.description
        )?;
        Ok(())
    }

    fn write_money(&mut self, tag: &PublicMoneyTag) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}: {}",
            self.formatter.bold(&tag.text),
            tag.description
        )?;
        Ok(())
    }

    fn write_games(&mut self, games: &[GameAnnotation]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header(&format!("{} game(s)", games.len()))
        )?;
        for game in games {
            writeln!(self.writer)?;
            let label = self.formatter.label(&game.rating.label);
            let arrow = self.trend_arrow(&game.trend.indicator);
            writeln!(
                self.writer,
                "{} {} {} {}",
                self.formatter.bold(&format!("Game {}", game.game_id)),
                self.formatter.class_style(&label, &game.rating.class),
                self.formatter.dim(&format!("({}%)", game.percent)),
                self.formatter.class_style(&arrow, &game.trend.class),
            )?;
            writeln!(self.writer, "  {}", game.rating.description)?;
            let badges: Vec<String> = game
                .badges
                .iter()
                .map(|badge| self.formatter.label(badge))
                .collect();
            writeln!(self.writer, "  Why: {}", badges.join(", "))?;
            writeln!(
                self.writer,
                "  Money: {} ({})",
                game.public_money.text, game.public_money.description
            )?;
            if let Some(terminology) = &game.terminology {
                writeln!(
                    self.writer,
                    "  Market: {} - {}",
                    self.formatter.label(&terminology.label),
                    terminology.description
                )?;
            }
            if !game.context.is_empty() {
                let context: Vec<String> = game
                    .context
                    .iter()
                    .map(|badge| self.formatter.label(&format!("{} {}", badge.label, badge.icon)))
                    .collect();
                writeln!(self.writer, "  Context: {}", context.join(", "))?;
            }
        }
        Ok(())
    }

    fn trend_arrow(&self, indicator: &str) -> String {
        let fallback = match indicator {
            "↑↑" => "++",
            "↑" => "+",
            "↓" => "-",
            "↓↓" => "--",
            other => other,
        };
        self.formatter.emoji(indicator, fallback)
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Rating(rating) => self.write_rating(rating),
            Report::Badges(badges) => self.write_badges(badges),
            Report::Trend(trend) => self.write_trend(trend),
            Report::Money(tag) => self.write_money(tag),
            Report::Games(games) => self.write_games(games),
        }
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_games_table(&mut self, games: &[GameAnnotation]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Game Labels")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Game | Rating | Percent | Trend | Public Money | Why |"
        )?;
        writeln!(
            self.writer,
            "|------|--------|---------|-------|--------------|-----|"
        )?;
        for game in games {
            writeln!(
                self.writer,
                "| {} | {} | {}% | {} | {} | {} |",
                escape_cell(&game.game_id.to_string()),
                game.rating.label,
                game.percent,
                game.trend.indicator,
                game.public_money.text,
                game.badges.join(", ")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Rating(rating) => {
                writeln!(
                    self.writer,
                    "**{}** ({}%): {}",
                    rating.info.label, rating.percent, rating.info.description
                )?;
                if let Some(terminology) = &rating.terminology {
                    writeln!(self.writer)?;
                    writeln!(
                        self.writer,
                        "> {} {}: {}",
                        terminology.icon, terminology.description, terminology.tooltip
                    )?;
                }
            }
            Report::Badges(badges) => {
                for badge in badges {
                    writeln!(self.writer, "- {}", badge)?;
                }
            }
            Report::Trend(trend) => {
                writeln!(self.writer, "**{}** {}", trend.indicator, trend.description)?;
            }
            Report::Money(tag) => {
                writeln!(self.writer, "**{}**: {}", tag.text, tag.description)?;
            }
            Report::Games(games) => self.write_games_table(games)?,
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
