//! Welcome screen renderer.
//!
//! Shown until the first search is submitted: a title, a short pitch and
//! the popular search shortcuts.

use crate::ui::helpers::{center_offset, display_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::WelcomeInfo;

/// Renders the welcome screen below `row`.
///
/// ```text
///            Start saving with WealthWagon
///   Search for any product to find the best deals ...
///
///                  Popular searches:
///    [:1] Laptops  [:2] Smartphones  [:3] Headphones ...
/// ```
pub fn render_welcome(frame: &mut Frame, row: usize, welcome: &WelcomeInfo, theme: &Theme, cols: usize) -> usize {
    let mut row = row + 2;

    row = centered_line(frame, row, &welcome.title, &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), cols);
    row = centered_line(frame, row, &welcome.subtitle, &Theme::fg(&theme.colors.text_normal), cols);
    row += 1;
    row = centered_line(frame, row, "Popular searches:", &Theme::fg(&theme.colors.text_dim), cols);

    let tags: Vec<String> = welcome
        .popular
        .iter()
        .map(|tag| format!("[{}] {}", tag.shortcut, tag.label))
        .collect();
    let line = tags.join("  ");

    frame.position_cursor(row, 1);
    frame.pad(center_offset(display_width(&line), cols));
    for (i, tag) in welcome.popular.iter().enumerate() {
        if i > 0 {
            frame.pad(2);
        }
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push(&format!("[{}] ", tag.shortcut));
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.accent));
        frame.push(&tag.label);
        frame.push(Theme::reset());
    }

    row + 1
}

fn centered_line(frame: &mut Frame, row: usize, text: &str, style: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.pad(center_offset(display_width(text), cols));
    frame.push(style);
    frame.push(text);
    frame.push(Theme::reset());
    row + 1
}
