use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    #[default]
    Auto, // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            self.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                self.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                self.color = ColorMode::Always;
            }
        }

        self
    }

    /// Create a plain output configuration (no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Style a label by its display class (`rating-lock`, `trend-down`, ...).
    fn class_style(&self, text: &str, class: &str) -> String;
    /// Show a glyph-bearing label, or its text alone when emoji are off.
    fn label(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn use_color(&self) -> bool {
        self.config.color.should_use_color()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn class_style(&self, text: &str, class: &str) -> String {
        if !self.use_color() {
            return text.to_string();
        }
        match class {
            "rating-lock" => text.green().bold().to_string(),
            "rating-green" | "trend-up" => text.green().to_string(),
            "rating-favorable" => text.cyan().to_string(),
            "rating-push" => text.yellow().to_string(),
            "rating-doubt" | "trend-down" => text.red().to_string(),
            "rating-nogo" => text.red().bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn label(&self, text: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            text.to_string()
        } else {
            strip_glyph(text).to_string()
        }
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn class_style(&self, text: &str, _class: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        strip_glyph(text).to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Drop a trailing glyph word from a label: `"Lock 🔒"` becomes `"Lock"`.
///
/// Labels without a trailing glyph are returned unchanged.
pub fn strip_glyph(label: &str) -> &str {
    match label.rsplit_once(' ') {
        Some((text, last)) if !last.chars().any(char::is_alphanumeric) && !text.is_empty() => {
            text.trim_end()
        }
        _ => label,
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    detect_color_support()
}
