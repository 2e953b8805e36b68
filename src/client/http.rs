//! Search endpoint client trait and `reqwest`-backed implementation.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::Instrument;

use super::messages::{SearchEnvelope, SearchOutcome};
use crate::domain::SearchError;

/// Path of the search endpoint relative to the configured base URL.
const SEARCH_PATH: &str = "/api/search";

/// Performs product searches against a remote endpoint.
///
/// Implementations make exactly one request per call and never retry.
pub trait SearchClient: Send + Sync {
    /// Searches for `query`, which the caller has already trimmed.
    ///
    /// An empty list is a successful outcome; every failure is reported as a
    /// [`SearchError`](crate::domain::SearchError).
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SearchOutcome>;
}

/// `reqwest`-backed implementation of [`SearchClient`].
///
/// Sends `GET {base}/api/search?product={query}` and decodes the `data` list
/// of the JSON body.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    base_url: String,
    http: Arc<reqwest::Client>,
}

impl HttpSearchClient {
    /// Creates a client targeting `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Arc::new(reqwest::Client::new()),
        }
    }

    /// Returns the full request URL for `query`, percent-encoding the query.
    ///
    /// # Examples
    ///
    /// ```
    /// use wealthwagon::client::HttpSearchClient;
    ///
    /// let client = HttpSearchClient::new("http://localhost:5000/");
    /// assert_eq!(
    ///     client.search_url("usb c hub"),
    ///     "http://localhost:5000/api/search?product=usb%20c%20hub"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{SEARCH_PATH}?product={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

impl SearchClient for HttpSearchClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SearchOutcome> {
        let url = self.search_url(query);
        let span = tracing::debug_span!("http_search", url = %url, status = tracing::field::Empty);

        Box::pin(async move { self.fetch(&url).await }.instrument(span))
    }
}

impl HttpSearchClient {
    async fn fetch(&self, url: &str) -> SearchOutcome {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let products = SearchEnvelope::decode(&body)?;

        tracing::debug!(count = products.len(), "search response decoded");
        Ok(products)
    }
}
