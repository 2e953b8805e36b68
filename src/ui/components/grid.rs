//! Product grid component renderer.
//!
//! Renders the results header and the current page of product cards laid
//! out in columns, left to right then top to bottom, in API order.
//!
//! # Card Layout
//!
//! ```text
//! Wireless Headphones X200
//! ★★★★☆ 4.3
//! From Amazon
//! ₹2999
//! View Deal ↗  Image ↗
//! ```
//!
//! Links are OSC 8 hyperlinks. A rejected deal link leaves plain "View Deal"
//! text; a rejected image URI omits the image link.

use crate::ui::components::stars::star_glyphs;
use crate::ui::helpers::{center_offset, display_width, hyperlink, truncate, Frame};
use crate::ui::layout::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ProductCard, ResultsInfo};

/// Shown when the terminal is too short for a single card row.
const TOO_SMALL_HINT: &str = "Enlarge the terminal to see the deals";

/// Renders the "Best deals for" header line with the page indicator.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_results_header(frame: &mut Frame, row: usize, results: &ResultsInfo, theme: &Theme, cols: usize) -> usize {
    let indicator = if results.page_count > 1 {
        format!("page {}/{}", results.page + 1, results.page_count)
    } else {
        String::new()
    };
    let title = truncate(&results.title, cols.saturating_sub(display_width(&indicator) + 3));

    frame.position_cursor(row, 1);
    frame.push(" ");
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.accent));
    frame.push(&title);
    frame.push(Theme::reset());

    if !indicator.is_empty() {
        let used = 1 + display_width(&title);
        frame.pad(cols.saturating_sub(used + display_width(&indicator) + 1));
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push(&indicator);
        frame.push(Theme::reset());
    }

    row + 1
}

/// Renders the cards of `results` starting at `row`.
///
/// Card rows whose text would reach `limit_row` are not drawn. If not even
/// the first row fits, a one-line hint is shown instead.
///
/// # Returns
///
/// The row after the last rendered card row.
pub fn render_grid(
    frame: &mut Frame,
    row: usize,
    limit_row: usize,
    results: &ResultsInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let columns = results.columns.max(1);
    let grid_width = columns * CARD_WIDTH + (columns - 1) * CARD_GAP;
    let left = center_offset(grid_width, cols) + 1;

    let mut current_row = row;
    for chunk in results.cards.chunks(columns) {
        // The trailing blank line of a card may overlap the limit.
        if current_row + CARD_HEIGHT - 1 > limit_row {
            break;
        }
        for (i, card) in chunk.iter().enumerate() {
            render_card(frame, current_row, left + i * (CARD_WIDTH + CARD_GAP), card, theme);
        }
        current_row += CARD_HEIGHT;
    }

    if current_row == row && !results.cards.is_empty() && row < limit_row {
        frame.position_cursor(row, 2);
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push(&truncate(TOO_SMALL_HINT, cols.saturating_sub(2)));
        frame.push(Theme::reset());
    }

    current_row
}

fn render_card(frame: &mut Frame, row: usize, col: usize, card: &ProductCard, theme: &Theme) {
    frame.position_cursor(row, col);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&truncate(&card.title, CARD_WIDTH));
    frame.push(Theme::reset());

    frame.position_cursor(row + 1, col);
    frame.push(&star_glyphs(&card.stars, theme));
    frame.push(" ");
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(&truncate(&card.rating_text, CARD_WIDTH.saturating_sub(6)));
    frame.push(Theme::reset());

    frame.position_cursor(row + 2, col);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(&truncate(&card.store, CARD_WIDTH));
    frame.push(Theme::reset());

    frame.position_cursor(row + 3, col);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.price_fg));
    frame.push(&truncate(&card.price, CARD_WIDTH));
    frame.push(Theme::reset());

    frame.position_cursor(row + 4, col);
    frame.push(&Theme::fg(&theme.colors.link_fg));
    match &card.link {
        Some(link) => frame.push(&hyperlink(link, "View Deal ↗")),
        None => frame.push("View Deal"),
    }
    if let Some(image) = &card.image {
        frame.pad(2);
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push(&hyperlink(image, "Image ↗"));
    }
    frame.push(Theme::reset());
}
