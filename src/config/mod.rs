//! `.edgelabel.toml` configuration.
//!
//! ```toml
//! [output]
//! format = "terminal"   # terminal | json | markdown
//! color = "auto"        # auto | always | never
//! emoji = "auto"        # auto | always | never
//! ```
//!
//! Every field is optional; anything missing falls back to its default.

mod loader;

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};

use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgelabelConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiMode>,
}

impl EdgelabelConfig {
    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Display modes from the file, with the color environment variables
    /// applied on top.
    pub fn formatting(&self) -> FormattingConfig {
        FormattingConfig::new(
            self.output.color.unwrap_or_default(),
            self.output.emoji.unwrap_or_default(),
        )
        .with_env_overrides()
    }
}

/// Contents written by `edgelabel init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# edgelabel configuration

[output]
# terminal | json | markdown
format = "terminal"
# auto | always | never
color = "auto"
# auto | always | never
emoji = "auto"
"#;
