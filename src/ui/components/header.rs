//! Header component renderer.
//!
//! Renders the application title and tagline centered, with theme-aware
//! colors and an optional title background.

use crate::ui::helpers::{center_offset, display_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the tagline below it.
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = center_offset(title_len, cols);

    frame.position_cursor(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }
    frame.pad(padding);
    frame.push(&header.title);
    frame.pad(cols.saturating_sub(padding + title_len));
    frame.push(Theme::reset());

    let tagline_len = display_width(&header.tagline);
    frame.position_cursor(row + 1, 1);
    frame.push(&Theme::fg(&theme.colors.tagline_fg));
    frame.pad(center_offset(tagline_len, cols));
    frame.push(&header.tagline);
    frame.push(Theme::reset());

    row + 2
}
