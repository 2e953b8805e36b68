//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the
//! search workflow. It owns the current [`SearchState`], the label of the
//! last accepted query, the sequence counter used to discard stale
//! responses, and the paging position of the results grid.
//!
//! # Search Lifecycle
//!
//! 1. [`AppState::submit`] validates the raw query, records the label,
//!    assigns the next sequence number and moves to `Loading`.
//! 2. The runtime sends the returned [`SearchRequest`].
//! 3. [`AppState::complete`] applies the response only if its sequence
//!    number is still the latest; older responses are dropped silently.
//!
//! State changes are whole-value swaps of [`SearchState`], so readers never
//! observe a half-applied transition.
//!
//! # Example
//!
//! ```rust
//! use wealthwagon::app::{AppState, SearchState};
//! use wealthwagon::client::SearchResponse;
//! use wealthwagon::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let request = state.submit("  laptop ").unwrap();
//! assert_eq!(request.query, "laptop");
//! assert_eq!(state.search, SearchState::Loading);
//!
//! state.complete(SearchResponse::products(&request, vec![]));
//! assert_eq!(state.search, SearchState::Empty);
//! ```

use super::modes::SearchState;
use crate::client::{SearchRequest, SearchResponse};
use crate::domain::{render_stars, Product};
use crate::ui::helpers::{link_target, sanitize};
use crate::ui::layout::GridLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, FooterInfo, HeaderInfo, MessageInfo, MessageKind, PopularTag, ProductCard,
    ResultsInfo, SearchBarInfo, UIViewModel, WelcomeInfo,
};

/// Quick searches offered on the welcome screen as `(label, query)`.
pub const POPULAR_SEARCHES: [(&str, &str); 4] = [
    ("Laptops", "laptop"),
    ("Smartphones", "smartphone"),
    ("Headphones", "headphones"),
    ("Cameras", "camera"),
];

/// Default terminal height used until the runtime reports the real size.
pub const DEFAULT_ROWS: usize = 24;

/// Default terminal width used until the runtime reports the real size.
pub const DEFAULT_COLS: usize = 80;

/// Placeholder shown in the search box before the first search.
const SEARCH_PLACEHOLDER: &str = "Search for any product...";

/// Central application state container.
///
/// Mutated only by the event handler; read by the renderer through
/// [`AppState::compute_viewmodel`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current display mode of the search workflow.
    pub search: SearchState,

    /// Trimmed text of the last accepted query.
    ///
    /// Captured at submission time and used for the "Best deals for" and
    /// "No products found for" labels.
    pub label: String,

    /// Sequence number of the most recent accepted submit, `0` before any.
    pub latest_seq: u64,

    /// Zero-based results page.
    ///
    /// Reset on every accepted submit, clamped when the viewport changes.
    pub page: usize,

    /// Terminal height in rows.
    pub rows: usize,

    /// Terminal width in columns.
    pub cols: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with the default viewport.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            search: SearchState::Idle,
            label: String::new(),
            latest_seq: 0,
            page: 0,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            theme,
        }
    }

    /// Accepts a search trigger.
    ///
    /// Blank or whitespace-only input is ignored: nothing changes and `None`
    /// is returned. Otherwise the trimmed query becomes the label, the state
    /// moves to [`SearchState::Loading`] (discarding any previous products),
    /// and the request the runtime must send is returned.
    pub fn submit(&mut self, raw_query: &str) -> Option<SearchRequest> {
        let query = raw_query.trim();
        if query.is_empty() {
            tracing::trace!("blank query ignored");
            return None;
        }

        self.latest_seq += 1;
        self.label = query.to_string();
        self.search = SearchState::Loading;
        self.page = 0;

        tracing::debug!(seq = self.latest_seq, query = %query, "search submitted");

        Some(SearchRequest {
            seq: self.latest_seq,
            query: query.to_string(),
        })
    }

    /// Applies a search response if it answers the latest submit.
    ///
    /// Returns `true` if the state changed. Responses for superseded
    /// requests are discarded and `false` is returned.
    pub fn complete(&mut self, response: SearchResponse) -> bool {
        let _span = tracing::debug_span!(
            "complete",
            seq = response.seq,
            latest_seq = self.latest_seq
        )
        .entered();

        if response.seq != self.latest_seq || !self.search.is_loading() {
            tracing::debug!("stale search response discarded");
            return false;
        }

        self.search = match response.outcome {
            Ok(products) if products.is_empty() => SearchState::Empty,
            Ok(products) => SearchState::Success(products),
            Err(error) => {
                tracing::warn!(error = %error, query = %self.label, "search failed");
                SearchState::Failed(error.user_message().to_string())
            }
        };

        tracing::debug!(state = self.search.name(), "search completed");
        true
    }

    /// Products of the current successful search, if any.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.search.products()
    }

    /// Grid geometry for the current viewport.
    #[must_use]
    pub fn grid(&self) -> GridLayout {
        GridLayout::for_viewport(self.rows, self.cols)
    }

    /// Number of result pages for the current products and viewport.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.grid().page_count(self.products().len())
    }

    /// Moves to the next results page. Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous results page. Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Updates the viewport and keeps the page within bounds.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: "WealthWagon".to_string(),
                tagline: "Find the best deals, save more money".to_string(),
            },
            search_bar: self.compute_search_bar(),
            body: self.compute_body(),
            footer: self.compute_footer(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        if self.label.is_empty() {
            SearchBarInfo {
                text: SEARCH_PLACEHOLDER.to_string(),
                is_placeholder: true,
            }
        } else {
            SearchBarInfo {
                text: self.label.clone(),
                is_placeholder: false,
            }
        }
    }

    fn compute_body(&self) -> Body {
        match &self.search {
            SearchState::Idle => Body::Welcome(WelcomeInfo {
                title: "Start saving with WealthWagon".to_string(),
                subtitle: "Search for any product to find the best deals across multiple stores"
                    .to_string(),
                popular: POPULAR_SEARCHES
                    .iter()
                    .enumerate()
                    .map(|(i, (label, _))| PopularTag {
                        shortcut: format!(":{}", i + 1),
                        label: (*label).to_string(),
                    })
                    .collect(),
            }),
            SearchState::Loading => Body::Message(MessageInfo {
                kind: MessageKind::Loading,
                message: "Finding the best deals for you...".to_string(),
                subtitle: String::new(),
            }),
            SearchState::Failed(message) => Body::Message(MessageInfo {
                kind: MessageKind::Error,
                message: format!("Oops! {message}"),
                subtitle: "Please try again later.".to_string(),
            }),
            SearchState::Empty => Body::Message(MessageInfo {
                kind: MessageKind::NoResults,
                message: format!("No products found for {}", self.label),
                subtitle: "Try a different search term.".to_string(),
            }),
            SearchState::Success(products) => Body::Results(self.compute_results(products)),
        }
    }

    /// Windows the product list to the current page.
    fn compute_results(&self, products: &[Product]) -> ResultsInfo {
        let grid = self.grid();
        let page_count = grid.page_count(products.len());
        let page = self.page.min(page_count - 1);

        let start = page * grid.per_page();
        let end = (start + grid.per_page()).min(products.len());

        ResultsInfo {
            title: format!("Best deals for {}", self.label),
            page,
            page_count,
            columns: grid.columns,
            cards: products[start..end].iter().map(Self::compute_card).collect(),
        }
    }

    fn compute_card(product: &Product) -> ProductCard {
        ProductCard {
            title: sanitize(&product.title),
            store: format!("From {}", sanitize(&product.store)),
            price: product.display_price(),
            stars: render_stars(product.rating),
            rating_text: product.rating.to_string(),
            link: link_target(&product.link),
            image: link_target(&product.image),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.search {
            SearchState::Idle => "Type a product + Enter: search  :1-:4: popular searches  :q: quit",
            SearchState::Success(_) if self.page_count() > 1 => {
                "Type a product + Enter: search  :n/:p: next/prev page  :q: quit"
            }
            _ => "Type a product + Enter: search  :q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchError;

    fn product(title: &str) -> Product {
        Product {
            title: title.to_string(),
            store: "Croma".to_string(),
            price: 999.0,
            rating: 4.2,
            image: "https://img.example/p.png".to_string(),
            link: "https://shop.example/p".to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    #[test]
    fn blank_submit_changes_nothing() {
        let mut state = state();
        assert!(state.submit("").is_none());
        assert!(state.submit("   \t").is_none());
        assert_eq!(state.search, SearchState::Idle);
        assert_eq!(state.latest_seq, 0);

        let request = state.submit("tv").unwrap();
        state.complete(SearchResponse::products(&request, vec![product("TV")]));
        let before = state.search.clone();

        assert!(state.submit("  ").is_none());
        assert_eq!(state.search, before);
        assert_eq!(state.label, "tv");
    }

    #[test]
    fn submit_moves_to_loading_and_records_trimmed_label() {
        let mut state = state();
        let request = state.submit("  laptop  ").unwrap();

        assert_eq!(request, SearchRequest { seq: 1, query: "laptop".to_string() });
        assert_eq!(state.search, SearchState::Loading);
        assert_eq!(state.label, "laptop");
    }

    #[test]
    fn success_keeps_api_order() {
        let mut state = state();
        let request = state.submit("laptop").unwrap();
        let products = vec![product("C"), product("A"), product("B")];

        assert!(state.complete(SearchResponse::products(&request, products.clone())));
        assert_eq!(state.search, SearchState::Success(products));
        assert_eq!(state.label, "laptop");
    }

    #[test]
    fn empty_list_is_empty_not_failed() {
        let mut state = state();
        let request = state.submit("xyz").unwrap();
        state.complete(SearchResponse::products(&request, vec![]));
        assert_eq!(state.search, SearchState::Empty);
    }

    #[test]
    fn failure_clears_previous_products() {
        let mut state = state();
        let first = state.submit("phone").unwrap();
        state.complete(SearchResponse::products(&first, vec![product("P")]));

        let second = state.submit("phone case").unwrap();
        state.complete(SearchResponse::failed(&second, SearchError::Status { status: 500 }));

        assert_eq!(
            state.search,
            SearchState::Failed("Failed to fetch products".to_string())
        );
        assert!(state.products().is_empty());
    }

    #[test]
    fn stale_response_is_discarded_in_either_order() {
        let mut state = state();
        let a = state.submit("a").unwrap();
        let b = state.submit("b").unwrap();

        assert!(!state.complete(SearchResponse::products(&a, vec![product("from a")])));
        assert_eq!(state.search, SearchState::Loading);

        assert!(state.complete(SearchResponse::products(&b, vec![product("from b")])));
        assert_eq!(state.search, SearchState::Success(vec![product("from b")]));

        let mut state = self::state();
        let a = state.submit("a").unwrap();
        let b = state.submit("b").unwrap();
        state.complete(SearchResponse::products(&b, vec![]));
        assert!(!state.complete(SearchResponse::failed(
            &a,
            SearchError::Malformed("late".to_string())
        )));
        assert_eq!(state.search, SearchState::Empty);
        assert_eq!(state.label, "b");
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut state = state();
        let request = state.submit("a").unwrap();
        assert!(state.complete(SearchResponse::products(&request, vec![product("x")])));
        assert!(!state.complete(SearchResponse::products(&request, vec![])));
        assert_eq!(state.products().len(), 1);
    }

    #[test]
    fn paging_is_clamped_and_reset_on_submit() {
        let mut state = state();
        state.resize(16, 40); // one card per page
        let request = state.submit("mouse").unwrap();
        let products: Vec<Product> = (0..3).map(|i| product(&format!("m{i}"))).collect();
        state.complete(SearchResponse::products(&request, products));

        assert_eq!(state.page_count(), 3);
        assert!(!state.prev_page());
        assert!(state.next_page());
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.page, 2);

        state.resize(60, 200);
        assert_eq!(state.page, 0);

        state.resize(16, 40);
        state.next_page();
        state.submit("keyboard");
        assert_eq!(state.page, 0);
    }

    #[test]
    fn viewmodel_follows_search_state() {
        let mut state = state();
        let vm = state.compute_viewmodel();
        match vm.body {
            Body::Welcome(welcome) => {
                let labels: Vec<&str> = welcome.popular.iter().map(|t| t.label.as_str()).collect();
                assert_eq!(labels, vec!["Laptops", "Smartphones", "Headphones", "Cameras"]);
                assert_eq!(welcome.popular[0].shortcut, ":1");
            }
            other => panic!("expected welcome, got {other:?}"),
        }
        assert!(vm.search_bar.is_placeholder);

        let request = state.submit("xyz").unwrap();
        state.complete(SearchResponse::products(&request, vec![]));
        match state.compute_viewmodel().body {
            Body::Message(msg) => {
                assert_eq!(msg.kind, MessageKind::NoResults);
                assert_eq!(msg.message, "No products found for xyz");
            }
            other => panic!("expected message, got {other:?}"),
        }

        let request = state.submit("laptop").unwrap();
        state.complete(SearchResponse::products(&request, vec![product("L1")]));
        let vm = state.compute_viewmodel();
        assert_eq!(vm.search_bar.text, "laptop");
        match vm.body {
            Body::Results(results) => {
                assert_eq!(results.title, "Best deals for laptop");
                assert_eq!(results.cards.len(), 1);
                assert_eq!(results.cards[0].store, "From Croma");
                assert_eq!(results.cards[0].price, "₹999");
                assert_eq!(results.cards[0].rating_text, "4.2");
                assert_eq!(results.cards[0].link.as_deref(), Some("https://shop.example/p"));
                assert_eq!(results.cards[0].image.as_deref(), Some("https://img.example/p.png"));
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn card_text_from_the_api_has_no_control_characters() {
        let mut state = state();
        let request = state.submit("tv").unwrap();
        let hostile = Product {
            title: "Evil\u{1b}[2J\u{1b}]0;pwned\u{7}".to_string(),
            store: "Sh\u{9b}0mop".to_string(),
            link: "https://a\u{1b}\\\u{1b}[8m".to_string(),
            image: "\u{1b}]8;;x".to_string(),
            ..product("placeholder")
        };
        state.complete(SearchResponse::products(&request, vec![hostile]));

        let Body::Results(results) = state.compute_viewmodel().body else {
            panic!("expected results");
        };
        let card = &results.cards[0];
        assert_eq!(card.title, "Evil[2J]0;pwned");
        assert_eq!(card.store, "From Sh0mop");
        assert_eq!(card.link, None);
        assert_eq!(card.image, None);
    }
}
