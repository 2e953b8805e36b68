//! WealthWagon: a terminal price-comparison client.
//!
//! WealthWagon sends a product query to a search endpoint and shows the
//! returned offers from multiple stores as a grid of cards with star
//! ratings, prices and deal links.
//!
//! - Search with loading, failure and no-results states
//! - Stale responses from superseded searches are discarded
//! - Fractional ratings drawn as five full, partial or empty stars
//! - Popular quick searches and paged results
//! - TOML color themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal binary (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Event loop glue
//! │  - Executes actions, spawns requests on tokio       │
//! │  - Feeds completions back as events                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Application   │   │ UI Layer      │   │ Client Layer  │
//! │ (app/)        │   │ (ui/)         │   │ (client/)     │
//! │ - SearchState │   │ - View model  │   │ - Endpoint    │
//! │ - Events      │   │ - Components  │   │ - Messages    │
//! │ - Actions     │   │ - Theming     │   │ - reqwest     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Product, star rating segments, errors (domain/)  │
//! │  - Platform data directory (infrastructure/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to a JSON file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read once at startup from the process environment (a `.env` file in the
//! working directory is loaded first):
//!
//! | Variable                   | Meaning                                  |
//! |----------------------------|------------------------------------------|
//! | `WEALTHWAGON_API_URL`      | Base URL of the search endpoint (required)|
//! | `WEALTHWAGON_THEME`        | Built-in theme name                      |
//! | `WEALTHWAGON_THEME_FILE`   | Path to a TOML theme, wins over the name |
//! | `WEALTHWAGON_TRACE_LEVEL`  | Enables tracing at this filter level     |
//! | `RUST_LOG`                 | Fallback for the trace level             |
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use wealthwagon::{handle_event, initialize, Action, Config, Event};
//!
//! let vars = BTreeMap::from([(
//!     "WEALTHWAGON_API_URL".to_string(),
//!     "http://localhost:5000".to_string(),
//! )]);
//! let config = Config::from_vars(&vars)?;
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, Event::QuickSearch(0));
//! assert!(matches!(&actions[..], [Action::Search(req)] if req.query == "laptop"));
//! # Ok::<(), wealthwagon::WealthWagonError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SearchState};
pub use client::{HttpSearchClient, SearchClient, SearchRequest, SearchResponse};
pub use domain::{render_stars, Product, Result, StarSegment, WealthWagonError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Environment key holding the search endpoint base URL.
pub const API_URL_VAR: &str = "WEALTHWAGON_API_URL";
const THEME_VAR: &str = "WEALTHWAGON_THEME";
const THEME_FILE_VAR: &str = "WEALTHWAGON_THEME_FILE";
const TRACE_LEVEL_VAR: &str = "WEALTHWAGON_TRACE_LEVEL";
const RUST_LOG_VAR: &str = "RUST_LOG";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the search endpoint, e.g. `http://localhost:5000`.
    ///
    /// Requests go to `{api_url}/api/search?product=…`.
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `wagon-dark`, `wagon-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing, e.g. `debug` or
    /// `wealthwagon=trace`. Tracing is disabled when unset.
    pub trace_level: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// A `.env` file is loaded first if present; variables already set in
    /// the environment win over it.
    ///
    /// # Errors
    ///
    /// Returns [`WealthWagonError::Config`] if the API URL is missing or
    /// blank.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            report_dotenv_error(&e);
        }

        let vars: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("WEALTHWAGON_") || key == RUST_LOG_VAR)
            .collect();

        Self::from_vars(&vars)
    }

    /// Builds configuration from a key/value map using the same variable
    /// names as the environment.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`WealthWagonError::Config`] if the API URL is missing or
    /// blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use wealthwagon::Config;
    ///
    /// let vars = BTreeMap::from([
    ///     ("WEALTHWAGON_API_URL".to_string(), "http://deals.local/".to_string()),
    ///     ("RUST_LOG".to_string(), "debug".to_string()),
    /// ]);
    ///
    /// let config = Config::from_vars(&vars).unwrap();
    /// assert_eq!(config.api_url, "http://deals.local/");
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(Config::from_vars(&BTreeMap::new()).is_err());
    /// ```
    pub fn from_vars(vars: &BTreeMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let api_url = get(API_URL_VAR)
            .ok_or_else(|| WealthWagonError::Config(format!("{API_URL_VAR} is not set")))?;

        Ok(Self {
            api_url,
            theme_name: get(THEME_VAR),
            theme_file: get(THEME_FILE_VAR),
            trace_level: get(TRACE_LEVEL_VAR).or_else(|| get(RUST_LOG_VAR)),
        })
    }

    /// Resolves the configured theme: file first, then built-in name, then
    /// the default. Load failures fall back to the default and are logged.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name
            .as_deref()
            .map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
    }
}

/// Logs a `.env` loading failure. A missing file is normal and stays silent.
///
/// Returns whether the error was reported.
fn report_dotenv_error(error: &dotenvy::Error) -> bool {
    if error.not_found() {
        return false;
    }
    tracing::debug!(error = %error, "failed to load .env file, ignoring it");
    true
}

/// Creates the initial, idle application state for `config`.
///
/// Tracing is not initialized here; the binary calls
/// [`observability::init_tracing`] first so this event is captured.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let theme = config.theme();
    tracing::debug!(api_url = %config.api_url, theme = %theme.name, "initializing wealthwagon");
    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn blank_api_url_is_a_config_error() {
        let result = Config::from_vars(&vars(&[(API_URL_VAR, "   ")]));
        assert!(matches!(result, Err(WealthWagonError::Config(_))));
    }

    #[test]
    fn dedicated_trace_level_wins_over_rust_log() {
        let config = Config::from_vars(&vars(&[
            (API_URL_VAR, "http://localhost:5000"),
            (TRACE_LEVEL_VAR, "trace"),
            (RUST_LOG_VAR, "warn"),
        ]))
        .unwrap();

        assert_eq!(config.trace_level.as_deref(), Some("trace"));
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn theme_resolution_falls_back_to_default() {
        let mut config = Config::from_vars(&vars(&[
            (API_URL_VAR, "http://localhost:5000"),
            (THEME_VAR, "wagon-light"),
        ]))
        .unwrap();
        assert_eq!(config.theme().name, "wagon-light");

        config.theme_name = Some("no-such-theme".to_string());
        assert_eq!(config.theme().name, "wagon-dark");

        config.theme_file = Some("/no/such/theme.toml".to_string());
        assert_eq!(config.theme().name, "wagon-dark");
    }

    #[test]
    fn only_unexpected_dotenv_errors_are_reported() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!report_dotenv_error(&missing));

        let unparsable = dotenvy::Error::LineParse("KEY VALUE".to_string(), 4);
        assert!(report_dotenv_error(&unparsable));
    }

    #[test]
    fn initialize_starts_idle() {
        let config = Config::from_vars(&vars(&[(API_URL_VAR, "http://localhost:5000")])).unwrap();
        let state = initialize(&config);
        assert_eq!(state.search, SearchState::Idle);
        assert_eq!(state.latest_seq, 0);
    }
}
