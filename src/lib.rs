//! Zinema: a Zellij plugin for searching a movie catalog from the terminal.
//!
//! Zinema is a terminal multiplexer pane that searches a TMDB-compatible
//! catalog API: type a query, page through the matching titles, and open a
//! detail view for any of them. There is no backend of our own and nothing
//! persists; the pane talks straight to the catalog with a static bearer
//! credential and rebuilds all state on every open.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Search coordinator
//! │  - Event handling, phase state machine              │
//! │  - Stale-result discard (last-key-wins)             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────────────┐
//! │ UI Layer      │   │ Catalog Layer (catalog/)  │
//! │ (ui/)         │   │ - Request building + keys │
//! │ - Rendering   │   │ - Outcome normalization   │
//! │ - Theming     │   │                           │
//! └───────────────┘   └───────────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Movie record, error types (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! 1. The shim maps key presses into app events; `handle_event` mutates
//!    state and returns actions.
//! 2. A `Fetch` action becomes a non-blocking `web_request`, tagged with its
//!    `(query, page)` key in the request context.
//! 3. The settled result comes back as an event; the catalog layer
//!    normalizes `(status, body)` into a success-or-failure outcome, and the
//!    coordinator applies it only if its key still matches the in-flight
//!    request.
//! 4. Rendering computes a view model from state and paints it with direct
//!    ANSI output.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zinema.wasm" {
//!         api_token "eyJhbGciOi..."
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! When `api_token` is absent the build-time `TMDB_API_TOKEN` environment
//! variable is used instead. A missing or bad token is not validated up
//! front; the provider rejects the first search and that rejection is shown
//! like any other catalog error.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchPhase};
pub use catalog::{SearchOutcome, SearchRequest};
pub use domain::{Movie, Result, ZinemaError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Values arrive as a `BTreeMap<String, String>` during plugin load and are
/// extracted here with typed fallbacks.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bearer credential for the catalog API.
    ///
    /// Falls back to the build-time `TMDB_API_TOKEN` environment variable
    /// when unset. Never validated locally.
    pub api_token: Option<String>,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for the observability layer. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zinema::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_token".to_string(), "tok".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_token.as_deref(), Some("tok"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            api_token: config.get("api_token").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the bearer credential: configuration first, then the
    /// build-time environment, then empty (which the provider will reject).
    #[must_use]
    pub fn resolved_token(&self) -> String {
        self.api_token
            .clone()
            .or_else(|| option_env!("TMDB_API_TOKEN").map(str::to_string))
            .unwrap_or_default()
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// builds an idle `AppState` ready for event processing.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zinema plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_zellij_reads_known_keys() {
        let mut map = BTreeMap::new();
        map.insert("api_token".to_string(), "tok".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_token.as_deref(), Some("tok"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn configured_token_wins_over_environment() {
        let config = Config {
            api_token: Some("configured".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolved_token(), "configured");
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
