//! Domain layer for the WealthWagon client.
//!
//! Core types and pure logic, independent of the terminal, the network, and
//! the runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product model decoded from search responses
//! - [`rating`]: Rating-to-stars conversion
//!
//! # Examples
//!
//! ```
//! use wealthwagon::domain::{render_stars, StarSegment};
//!
//! let stars = render_stars(4.5);
//! assert_eq!(stars[4], StarSegment::Partial(0.5));
//! ```

pub mod error;
pub mod product;
pub mod rating;

pub use error::{Result, SearchError, WealthWagonError, FETCH_FAILED_MESSAGE};
pub use product::Product;
pub use rating::{clamp_rating, render_stars, StarSegment, STAR_COUNT};
