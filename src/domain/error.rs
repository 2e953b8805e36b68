//! Error types for the WealthWagon client.
//!
//! This module defines the crate-wide error type [`WealthWagonError`], the
//! search-specific [`SearchError`] produced by the endpoint client, and a
//! [`Result`] alias. All errors are implemented using the `thiserror` crate.
//!
//! Search failures never escape the search controller: they are folded into
//! [`SearchState::Failed`](crate::app::SearchState::Failed) and only the
//! generic [`FETCH_FAILED_MESSAGE`] is shown to the user.

use thiserror::Error;

/// User-visible message for every failed search, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

/// Failure of a single call to the search endpoint.
///
/// The three variants mirror how a response can go wrong: it never arrived,
/// it arrived with a non-success status, or it arrived but could not be
/// decoded into a product list.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    ///
    /// The body is ignored regardless of its content.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code received.
        status: u16,
    },

    /// The body was not the expected `{"data": [...]}` document.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SearchError {
    /// Returns the generic message shown to the user for this failure.
    ///
    /// Details of the failure are logged, never displayed.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// The main error type for WealthWagon operations.
///
/// Covers startup concerns (configuration, theme loading, filesystem) and
/// wraps [`SearchError`] for callers that drive the endpoint client directly.
///
/// # Examples
///
/// ```
/// use wealthwagon::WealthWagonError;
///
/// fn require_url(url: Option<&str>) -> Result<&str, WealthWagonError> {
///     url.ok_or_else(|| WealthWagonError::Config("WEALTHWAGON_API_URL is not set".to_string()))
/// }
///
/// assert!(require_url(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum WealthWagonError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when the search endpoint base URL is not provided or a value
    /// cannot be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A search request failed.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// A specialized `Result` type for WealthWagon operations.
pub type Result<T> = std::result::Result<T, WealthWagonError>;
