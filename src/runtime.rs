//! Event loop glue between the controller and the outside world.
//!
//! [`Runtime`] owns the [`AppState`], feeds events through
//! [`handle_event`], and executes the resulting actions. Each
//! [`Action::Search`] becomes one tokio task calling the [`SearchClient`];
//! its completion is queued on a channel and handed back to the loop as
//! [`Event::SearchCompleted`]. Several requests may be in flight at once;
//! the controller's sequence numbers decide which completion wins.
//!
//! The runtime never renders or reads input itself, which keeps it usable
//! from tests with a fake client.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::{SearchClient, SearchRequest, SearchResponse};

/// What the caller should do after an event was dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The screen changed and must be redrawn.
    pub render: bool,
    /// The user asked to leave.
    pub quit: bool,
}

/// Owns the application state and runs its side effects.
pub struct Runtime {
    state: AppState,
    client: Arc<dyn SearchClient>,
    completions_tx: mpsc::UnboundedSender<SearchResponse>,
    completions_rx: mpsc::UnboundedReceiver<SearchResponse>,
}

impl Runtime {
    /// Creates a runtime around an initial state and a search client.
    pub fn new(state: AppState, client: Arc<dyn SearchClient>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            completions_tx,
            completions_rx,
        }
    }

    /// Current application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Handles one event and executes the actions it produced.
    ///
    /// Must be called from within a tokio runtime, since searches are
    /// spawned as tasks.
    pub fn dispatch(&mut self, event: Event) -> Dispatch {
        let (render, actions) = handle_event(&mut self.state, event);
        let mut outcome = Dispatch {
            render,
            quit: false,
        };

        for action in actions {
            match action {
                Action::Search(request) => self.spawn_search(request),
                Action::Quit => outcome.quit = true,
            }
        }

        outcome
    }

    /// Waits for the next finished search and returns it as an event.
    ///
    /// Pending forever while nothing is in flight, so it can sit in a
    /// `select!` next to the input stream.
    pub async fn next_completion(&mut self) -> Event {
        // The runtime holds a sender, so the channel never closes.
        match self.completions_rx.recv().await {
            Some(response) => Event::SearchCompleted(response),
            None => std::future::pending().await,
        }
    }

    fn spawn_search(&self, request: SearchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        let span = tracing::debug_span!("search", seq = request.seq, query = %request.query);

        tokio::spawn(
            async move {
                let response = match client.search(&request.query).await {
                    Ok(products) => {
                        tracing::debug!(count = products.len(), "search finished");
                        SearchResponse::products(&request, products)
                    }
                    Err(error) => {
                        tracing::debug!(error = %error, "search failed");
                        SearchResponse::failed(&request, error)
                    }
                };

                if tx.send(response).is_err() {
                    tracing::debug!("runtime gone, dropping search result");
                }
            }
            .instrument(span),
        );
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
