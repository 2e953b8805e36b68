//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output is returned as a string so the runtime can write a whole frame at
//! once; nothing here touches the terminal.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the current state as a full-screen ANSI frame.
///
/// # Example
///
/// ```rust
/// use wealthwagon::app::AppState;
/// use wealthwagon::ui::{render, Theme};
///
/// let state = AppState::new(Theme::default());
/// let frame = render(&state);
/// assert!(frame.contains("Start saving with WealthWagon"));
/// ```
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, state.rows, state.cols)
}

/// Renders a pre-computed view model for a `rows` x `cols` terminal.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = Frame::new();
    frame.push(CLEAR_SCREEN);

    components::render_screen(&mut frame, vm, theme, cols, rows);

    frame.into_string()
}
