//! Search state machine type.
//!
//! [`SearchState`] is the single display mode of the search workflow. It is
//! one tagged value rather than a set of loading/error/results flags, so
//! contradictory combinations cannot be represented.
//!
//! # State Machine
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok, non-empty──▶ Success(products)
//!                     │    ──ok, empty──────▶ Empty
//!                     │    ──failure────────▶ Failed(message)
//!                     ▲
//! Success/Empty/Failed ──submit──┘
//!
//! blank submit: no transition from any state
//! ```
//!
//! `Idle` is initial. No state is terminal.

use crate::domain::Product;

/// Mutually exclusive display mode of the search workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing has been searched yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// The latest search returned at least one product, in API order.
    Success(Vec<Product>),

    /// The latest search succeeded with zero products.
    Empty,

    /// The latest search failed; holds the user-visible message.
    Failed(String),
}

impl SearchState {
    /// Products of a successful search, or an empty slice in any other state.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Success(products) => products,
            _ => &[],
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}
