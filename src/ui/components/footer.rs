//! Footer component renderer.
//!
//! Renders the centered keybinding hints and the input prompt below them.

use crate::ui::helpers::{center_offset, display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Prompt shown on the last row, where typed input is echoed.
pub const PROMPT: &str = "› ";

/// Renders the keybinding hints at `row`.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = center_offset(text_len, cols);

    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.push(&help_text);
    frame.pad(cols.saturating_sub(padding + text_len));
    frame.push(Theme::reset());
    row + 1
}

/// Renders the input prompt at `row` and leaves the cursor after it.
pub fn render_prompt(frame: &mut Frame, row: usize, theme: &Theme) {
    frame.position_cursor(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.accent));
    frame.push(PROMPT);
    frame.push(Theme::reset());
}
