//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], a string buffer addressed with ANSI
//! cursor positioning, so that a whole screen can be built, inspected in
//! tests, and written to the terminal in one go.
//!
//! Widths are measured in `char`s rather than bytes: prices (`₹`) and stars
//! (`★`) are multi-byte but occupy one terminal cell.

use std::fmt::Write as _;

/// Off-screen buffer for one rendered frame.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    buf: String,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    ///
    /// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    /// Appends text or escape sequences at the current cursor position.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Returns the raw buffer, escape sequences included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the frame and returns its buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max_width` cells, ending with `...` if cut.
///
/// # Example
///
/// ```rust
/// use wealthwagon::ui::helpers::truncate;
///
/// assert_eq!(truncate("Wireless Headphones", 11), "Wireless...");
/// assert_eq!(truncate("Phone", 10), "Phone");
/// ```
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }

    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Left padding needed to center `width` cells in `cols` cells.
#[must_use]
pub const fn center_offset(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}

/// Removes control characters (C0, DEL and C1) from text received from the
/// network, so it cannot carry escape sequences into the frame.
///
/// Tabs and line breaks become spaces; a card line is a single row.
///
/// # Example
///
/// ```rust
/// use wealthwagon::ui::helpers::sanitize;
///
/// assert_eq!(sanitize("Evil\u{1b}[2J TV"), "Evil[2J TV");
/// assert_eq!(sanitize("two\nlines"), "two lines");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Returns `uri` if it is safe to embed in an OSC 8 hyperlink.
///
/// A URI containing any control character is rejected outright rather than
/// repaired, since a stripped URI would point somewhere else. Blank URIs are
/// rejected too.
#[must_use]
pub fn link_target(uri: &str) -> Option<String> {
    let uri = uri.trim();
    (!uri.is_empty() && !uri.chars().any(char::is_control)).then(|| uri.to_string())
}

/// Wraps `label` in an OSC 8 terminal hyperlink pointing at `uri`.
///
/// Terminals without hyperlink support show the plain label. `uri` must
/// already have passed [`link_target`].
#[must_use]
pub fn hyperlink(uri: &str, label: &str) -> String {
    format!("\u{1b}]8;;{uri}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(display_width("₹999"), 4);
        assert_eq!(display_width("★★☆"), 3);
    }

    #[test]
    fn truncate_handles_tiny_widths() {
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("₹₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn frame_accumulates_output() {
        let mut frame = Frame::new();
        frame.position_cursor(3, 1);
        frame.push("hi");
        frame.pad(2);
        assert_eq!(frame.into_string(), "\u{1b}[3;1Hhi  ");
    }

    #[test]
    fn sanitize_strips_c0_and_c1_controls() {
        let hostile = "Evil\u{1b}[2J\u{1b}]0;pwned\u{7}\u{9b}31m";
        let clean = sanitize(hostile);
        assert!(!clean.chars().any(char::is_control));
        assert_eq!(clean, "Evil[2J]0;pwned31m");
        assert_eq!(sanitize("₹ deal ★"), "₹ deal ★");
    }

    #[test]
    fn link_target_rejects_control_characters() {
        assert_eq!(
            link_target(" https://shop.example/p "),
            Some("https://shop.example/p".to_string())
        );
        assert_eq!(link_target("https://a\u{1b}\\\u{1b}[8m"), None);
        assert_eq!(link_target("   "), None);
    }

    #[test]
    fn hyperlink_wraps_label() {
        let link = hyperlink("https://shop.example/p", "View Deal");
        assert!(link.contains("https://shop.example/p"));
        assert!(link.contains("View Deal"));
    }
}
