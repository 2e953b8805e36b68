//! Search bar component renderer.
//!
//! Renders a bordered box showing the last submitted query, or a dimmed
//! placeholder before the first search.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Label printed before the query inside the box.
const SEARCH_LABEL: &str = " Search: ";

/// Renders the search box at `row`.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines).
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: laptop   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.position_cursor(row, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    let text = truncate(&search.text, inner_width.saturating_sub(SEARCH_LABEL.len()));
    let padding = inner_width.saturating_sub(SEARCH_LABEL.len() + display_width(&text));

    frame.position_cursor(row + 1, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(SEARCH_LABEL);
    if search.is_placeholder {
        frame.push(Theme::dim());
        frame.push(&Theme::fg(&theme.colors.text_dim));
    } else {
        frame.push(Theme::bold());
    }
    frame.push(&text);
    frame.push(Theme::reset());
    frame.pad(padding);
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    row + 3
}
