//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! text and pre-rendered star segments, never business logic.
//!
//! Exactly one [`Body`] is shown at a time, mirroring the single
//! [`SearchState`](crate::app::SearchState) it was computed from.

use crate::domain::{StarSegment, STAR_COUNT};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Branding at the top of the screen.
    pub header: HeaderInfo,

    /// Search box contents.
    pub search_bar: SearchBarInfo,

    /// Main content area.
    pub body: Body,

    /// Keybinding hints at the bottom of the screen.
    pub footer: FooterInfo,
}

/// Main content area, one variant per search state.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Shown before the first search.
    Welcome(WelcomeInfo),

    /// Loading, failure and no-results notices.
    Message(MessageInfo),

    /// Product grid of a successful search.
    Results(ResultsInfo),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Application name.
    pub title: String,

    /// Line under the title.
    pub tagline: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text shown inside the box: the last submitted query or a placeholder.
    pub text: String,

    /// Whether `text` is the placeholder (rendered dimmed).
    pub is_placeholder: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Welcome screen with popular search shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeInfo {
    pub title: String,
    pub subtitle: String,
    pub popular: Vec<PopularTag>,
}

/// One quick-search shortcut on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularTag {
    /// Command that triggers it, e.g. `:1`.
    pub shortcut: String,

    /// Human label, e.g. `Laptops`.
    pub label: String,
}

/// Tone of a [`MessageInfo`], selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Error,
    NoResults,
}

/// Centered two-line notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub kind: MessageKind,

    /// Primary line.
    pub message: String,

    /// Secondary explanatory line.
    pub subtitle: String,
}

/// Results grid for the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsInfo {
    /// "Best deals for <query>".
    pub title: String,

    /// Zero-based page being shown.
    pub page: usize,

    /// Total number of pages.
    pub page_count: usize,

    /// Cards per grid row.
    pub columns: usize,

    /// Cards on this page, in API order.
    pub cards: Vec<ProductCard>,
}

/// Display information for a single product.
#[derive(Debug, Clone, PartialEq)]
///
/// Text fields are stripped of control characters; see
/// [`sanitize`](crate::ui::helpers::sanitize).
pub struct ProductCard {
    pub title: String,

    /// "From <store>".
    pub store: String,

    /// Formatted price, e.g. `₹54999`.
    pub price: String,

    /// Star segments for the (clamped) rating.
    pub stars: [StarSegment; STAR_COUNT],

    /// Raw rating as returned by the API.
    pub rating_text: String,

    /// Deal page URI, `None` if the API sent an unusable one.
    pub link: Option<String>,

    /// Product image URI, `None` if missing or unusable.
    pub image: Option<String>,
}
