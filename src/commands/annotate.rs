use crate::errors::{Error, Result};
use crate::game::{annotate_games, parse_games};
use crate::output::Report;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Annotate game records from `input`, or from stdin when no path is given.
pub fn annotate(input: Option<&Path>) -> Result<Report> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read game records", path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    annotate_json(&json)
}

pub fn annotate_json(json: &str) -> Result<Report> {
    let games = parse_games(json)?;
    info!(games = games.len(), "annotating games");
    Ok(Report::Games(annotate_games(&games)))
}
