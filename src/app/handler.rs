//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user input and
//! search completions into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the terminal input or from a finished request
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the runtime to execute
//!
//! # Example
//!
//! ```rust
//! use wealthwagon::app::{handle_event, Action, AppState, Event};
//! use wealthwagon::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, Event::Submit("camera".to_string()));
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Search(_)]));
//! ```

use super::state::POPULAR_SEARCHES;
use crate::app::{Action, AppState};
use crate::client::SearchResponse;

/// Events triggered by user input or by a finished search request.
#[derive(Debug)]
pub enum Event {
    /// Submits the raw text typed in the search box.
    Submit(String),

    /// Triggers the popular search at this zero-based index.
    QuickSearch(usize),

    /// Delivers the outcome of a previously emitted search request.
    SearchCompleted(SearchResponse),

    /// Shows the next page of results.
    NextPage,

    /// Shows the previous page of results.
    PrevPage,

    /// Reports the terminal size.
    Resize {
        rows: usize,
        cols: usize,
    },

    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Returns
///
/// A tuple of whether the screen must be re-rendered and the actions to
/// execute in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match event {
        Event::Submit(raw_query) => submit(state, &raw_query),
        Event::QuickSearch(index) => {
            let Some((label, query)) = POPULAR_SEARCHES.get(index) else {
                tracing::debug!(index, "unknown popular search");
                return (false, vec![]);
            };
            tracing::debug!(label = %label, "popular search selected");
            submit(state, query)
        }
        Event::SearchCompleted(response) => (state.complete(response), vec![]),
        Event::NextPage => (state.next_page(), vec![]),
        Event::PrevPage => (state.prev_page(), vec![]),
        Event::Resize { rows, cols } => {
            if (rows, cols) == (state.rows, state.cols) {
                return (false, vec![]);
            }
            state.resize(rows, cols);
            (true, vec![])
        }
        Event::Quit => (false, vec![Action::Quit]),
    }
}

fn submit(state: &mut AppState, raw_query: &str) -> (bool, Vec<Action>) {
    state
        .submit(raw_query)
        .map_or_else(|| (false, vec![]), |request| (true, vec![Action::Search(request)]))
}
