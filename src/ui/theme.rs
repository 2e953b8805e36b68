//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes
//! and custom themes loaded from TOML files, plus helpers for turning hex
//! colors into ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `wagon-dark`: Purple on dark background (default)
//! - `wagon-light`: Purple on light background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#c9a7eb"
//! header_bg = "#2a1540"        # optional
//! tagline_fg = "#9d8cb5"
//! text_normal = "#e6e1ef"
//! text_dim = "#7d7590"
//! border = "#4a3a63"
//! search_bar_border = "#8e5cc7"
//! accent = "#b58ae6"
//! star_full = "#f5b301"
//! star_empty = "#5a5168"
//! price_fg = "#7bd88f"
//! link_fg = "#6cb6ff"
//! error_fg = "#ff7a85"
//! message_fg = "#c9a7eb"
//! ```

use crate::domain::{Result, WealthWagonError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#c9a7eb"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title color.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Tagline under the title.
    pub tagline_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders, secondary lines).
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Search box frame.
    pub search_bar_border: String,
    /// Popular search tags and results header.
    pub accent: String,

    /// Filled star color.
    pub star_full: String,
    /// Unfilled star color.
    pub star_empty: String,
    /// Price text.
    pub price_fg: String,
    /// "View Deal" link text.
    pub link_fg: String,

    /// Failure notice.
    pub error_fg: String,
    /// Loading and no-results notices.
    pub message_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wealthwagon::ui::Theme;
    ///
    /// let theme = Theme::from_name("wagon-light").unwrap();
    /// assert_eq!(theme.name, "wagon-light");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "wagon-dark" => include_str!("../../themes/wagon-dark.toml"),
            "wagon-light" => include_str!("../../themes/wagon-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WealthWagonError::Theme`] if the file cannot be read or its
    /// contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WealthWagonError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| WealthWagonError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// Linearly interpolates between two hex colors.
    ///
    /// `t = 0` yields `from`, `t = 1` yields `to`; `t` is clamped to `[0, 1]`.
    /// Used to tint a partially filled star by its fill fraction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wealthwagon::ui::Theme;
    ///
    /// assert_eq!(Theme::blend("#000000", "#ffffff", 0.5), "#808080");
    /// assert_eq!(Theme::blend("#102030", "#ffffff", 0.0), "#102030");
    /// ```
    #[must_use]
    pub fn blend(from: &str, to: &str, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (r1, g1, b1) = Self::hex_to_rgb(from);
        let (r2, g2, b2) = Self::hex_to_rgb(to);

        // The result stays within [0, 255], so the casts are exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

        format!("#{:02x}{:02x}{:02x}", mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset escape sequence; clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`wagon-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("wagon-dark").expect("Built-in wagon-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "wagon-dark");
        let light = Theme::from_name("wagon-light").unwrap();
        assert!(light.colors.header_bg.is_none());
    }

    #[test]
    fn fg_renders_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn blend_clamps_fraction() {
        assert_eq!(Theme::blend("#000000", "#ffffff", 2.0), "#ffffff");
        assert_eq!(Theme::blend("#000000", "#ffffff", -1.0), "#000000");
    }

    #[test]
    fn theme_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/wagon-light.toml").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "wagon-light");
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(WealthWagonError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(WealthWagonError::Theme(_))
        ));
    }
}
