//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes for the pane, supporting built-in themes (Catppuccin
//! variants) and custom themes loaded from TOML files, plus utilities for
//! converting hex colors to 24-bit ANSI escape sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! modal_border = "#cba6f7"
//! error_fg = "#f38ba8"
//! notice_fg = "#f9e2af"
//! rating_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{Result, ZinemaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`). The optional header
/// background defaults to `None`, letting themes opt out of a filled header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, pagination, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search box border color.
    pub search_bar_border: String,
    /// Detail modal border color.
    pub modal_border: String,

    /// Inline error banner color.
    pub error_fg: String,
    /// Empty-result notice banner color.
    pub notice_fg: String,
    /// Rating column color.
    pub rating_fg: String,

    /// Idle welcome message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`. Returns
    /// `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZinemaError::Theme`] when the file cannot be read or its
    /// TOML cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ZinemaError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ZinemaError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a leading `#` and parses three byte pairs; falls back to white
    /// on anything unparseable.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which cannot happen for
    /// the compiled-in TOML.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn fg_encodes_hex_as_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0080"), "\u{001b}[38;2;255;0;128m");
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::bg("nope"), "\u{001b}[48;2;255;255;255m");
    }

    #[test]
    fn from_file_reports_missing_file_as_theme_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ZinemaError::Theme(_)));
    }
}
