//! Request and response messages exchanged with the search client.
//!
//! Every accepted submit produces one [`SearchRequest`] tagged with a
//! monotonically increasing sequence number. The matching
//! [`SearchResponse`] carries the same number back so the controller can
//! tell the latest search apart from a stale one that finished late.

use crate::domain::{Product, SearchError};
use serde::Deserialize;

/// Result of one call to the search endpoint.
pub type SearchOutcome = std::result::Result<Vec<Product>, SearchError>;

/// A search the runtime should send to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sequence number assigned at submission time.
    pub seq: u64,

    /// Trimmed, non-empty query text.
    pub query: String,
}

/// Completion of a [`SearchRequest`].
#[derive(Debug)]
pub struct SearchResponse {
    /// Sequence number of the request this response answers.
    pub seq: u64,

    /// Decoded products or the failure that prevented decoding them.
    pub outcome: SearchOutcome,
}

impl SearchResponse {
    /// Builds a successful response for `request`.
    #[must_use]
    pub fn products(request: &SearchRequest, products: Vec<Product>) -> Self {
        Self {
            seq: request.seq,
            outcome: Ok(products),
        }
    }

    /// Builds a failed response for `request`.
    #[must_use]
    pub fn failed(request: &SearchRequest, error: SearchError) -> Self {
        Self {
            seq: request.seq,
            outcome: Err(error),
        }
    }
}

/// Body of a successful search response: `{"data": [...]}`.
///
/// Extra fields are ignored; a missing or non-list `data` field is an error.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub data: Vec<Product>,
}

impl SearchEnvelope {
    /// Decodes a response body into the product list it carries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Malformed`] if the body is not JSON, has no
    /// `data` list, or any item lacks a required product field.
    pub(crate) fn decode(body: &[u8]) -> Result<Vec<Product>, SearchError> {
        serde_json::from_slice::<Self>(body)
            .map(|envelope| envelope.data)
            .map_err(|e| SearchError::Malformed(e.to_string()))
    }
}
