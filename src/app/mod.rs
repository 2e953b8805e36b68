//! Application layer coordinating state, events, and actions.
//!
//! This module is the search controller. It sits between the runtime
//! (terminal input and network calls) and the domain/UI layers, and
//! implements a unidirectional data flow:
//!
//! ```text
//! Input line → Event → handle_event → AppState mutation → Actions → Runtime
//!                            ↑                                        │
//!                            └──── SearchCompleted(response) ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`input`]: Parsing of terminal input lines into events
//! - [`modes`]: The [`SearchState`] state machine type
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::parse_input;
pub use modes::SearchState;
pub use state::{AppState, POPULAR_SEARCHES};
