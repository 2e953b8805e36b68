//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O itself. It mutates [`AppState`]
//! synchronously and returns a `Vec<Action>` describing what the runtime must
//! do next, such as sending a search request.
//!
//! [`AppState`]: crate::app::AppState
//!
//! # Example
//!
//! ```rust
//! use wealthwagon::app::Action;
//! use wealthwagon::client::SearchRequest;
//!
//! let actions = vec![Action::Search(SearchRequest { seq: 1, query: "laptop".to_string() })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::client::SearchRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends one request to the search endpoint.
    ///
    /// The response must come back tagged with the same sequence number so
    /// that stale completions can be recognized.
    Search(SearchRequest),

    /// Ends the session.
    Quit,
}
