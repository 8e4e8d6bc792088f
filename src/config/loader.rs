use std::fs;
use std::path::{Path, PathBuf};

use super::EdgelabelConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".edgelabel.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<EdgelabelConfig> {
    toml::from_str::<EdgelabelConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load configuration from an explicit path. A missing or invalid file is an error.
pub fn load_config_from_path(path: &Path) -> Result<EdgelabelConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<EdgelabelConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest readable config file
pub fn discover_config(start: PathBuf) -> Option<EdgelabelConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load configuration for the current directory, falling back to defaults
pub fn load_config() -> EdgelabelConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return EdgelabelConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        EdgelabelConfig::default()
    })
}
