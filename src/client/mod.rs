//! Search endpoint client layer.
//!
//! This module owns the contract with the remote search API: the sequence
//! tagged request/response messages used by the controller, the
//! [`SearchClient`] seam, and its HTTP implementation.
//!
//! # Endpoint
//!
//! ```text
//! GET <base>/api/search?product=<url-encoded query>
//!
//! 200 {"data": [{"title", "store", "price", "rating", "image", "link"}, ...]}
//! non-2xx → failure, body ignored
//! ```

pub mod http;
pub mod messages;

pub use http::{HttpSearchClient, SearchClient};
pub use messages::{SearchOutcome, SearchRequest, SearchResponse};
