//! Notice component renderer.
//!
//! Renders the centered two-line notices used while loading, after a failed
//! search, and when a search found nothing.

use crate::ui::helpers::{center_offset, display_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MessageInfo, MessageKind};

/// Blank rows between the top of the body and the notice.
const MESSAGE_TOP_MARGIN: usize = 3;

/// Renders `message` starting near the top of the body area.
///
/// ```text
/// [3 blank lines]
/// [left padding] Finding the best deals for you... [right padding]
/// [left padding] subtitle                          [right padding]
/// ```
///
/// The first line uses the `error_fg` color for failures and `message_fg`
/// otherwise; the subtitle is dimmed. An empty subtitle is skipped.
pub fn render_message(frame: &mut Frame, row: usize, message: &MessageInfo, theme: &Theme, cols: usize) -> usize {
    let row = row + MESSAGE_TOP_MARGIN;
    let color = match message.kind {
        MessageKind::Error => &theme.colors.error_fg,
        MessageKind::Loading | MessageKind::NoResults => &theme.colors.message_fg,
    };

    let msg_len = display_width(&message.message);
    let msg_padding = center_offset(msg_len, cols);

    frame.position_cursor(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(color));
    frame.pad(msg_padding);
    frame.push(&message.message);
    frame.pad(cols.saturating_sub(msg_padding + msg_len));
    frame.push(Theme::reset());

    if message.subtitle.is_empty() {
        return row + 1;
    }

    let sub_len = display_width(&message.subtitle);
    let sub_padding = center_offset(sub_len, cols);

    frame.position_cursor(row + 1, 1);
    frame.push(Theme::dim());
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.pad(sub_padding);
    frame.push(&message.subtitle);
    frame.pad(cols.saturating_sub(sub_padding + sub_len));
    frame.push(Theme::reset());

    row + 2
}
