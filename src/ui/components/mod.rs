//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Frame`] and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and tagline
//! - [`search`]: Search box showing the submitted query
//! - [`welcome`]: Welcome screen with popular searches
//! - [`message`]: Loading, failure and no-results notices
//! - [`grid`]: Results header and product cards
//! - [`stars`]: Star rating glyphs
//! - [`footer`]: Keybinding hints and input prompt
//!
//! # Screen Layout
//!
//! ```text
//! [blank line]
//! [Header: title + tagline]
//! [Border]
//! [Search Bar - 3 lines]
//! [Body: welcome | notice | results header + card grid]
//! [Border]
//! [Footer]
//! [Prompt]
//! ```

mod footer;
mod grid;
mod header;
mod message;
mod search;
mod welcome;
pub mod stars;

use crate::ui::helpers::Frame;
use crate::ui::layout::BODY_START_ROW;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

pub use footer::PROMPT;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.push(Theme::reset());
    row + 1
}

/// Renders a complete screen for `vm`.
///
/// The body is drawn between the search bar and the footer; the footer
/// border, footer and prompt always occupy the last three rows.
pub fn render_screen(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = header::render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    current_row = search::render_search_bar(frame, current_row, &vm.search_bar, theme, cols);
    debug_assert_eq!(current_row, BODY_START_ROW);

    let prompt_row = rows.max(crate::ui::layout::CHROME_ROWS);
    let footer_row = prompt_row - 1;
    let border_row = footer_row - 1;

    match &vm.body {
        Body::Welcome(welcome) => {
            welcome::render_welcome(frame, current_row, welcome, theme, cols);
        }
        Body::Message(message) => {
            message::render_message(frame, current_row, message, theme, cols);
        }
        Body::Results(results) => {
            current_row = grid::render_results_header(frame, current_row, results, theme, cols);
            grid::render_grid(frame, current_row, border_row, results, theme, cols);
        }
    }

    render_border(frame, border_row, &theme.colors.border, cols);
    footer::render_footer(frame, footer_row, &vm.footer, theme, cols);
    footer::render_prompt(frame, prompt_row, theme);
}
