//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled terminal frames through
//! composable rendering components, with theme support and a paged product
//! grid.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer and text measurement utilities
//! - [`layout`]: Grid geometry shared by paging and rendering
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    Body, FooterInfo, HeaderInfo, MessageInfo, MessageKind, ProductCard, ResultsInfo,
    SearchBarInfo, UIViewModel, WelcomeInfo,
};
