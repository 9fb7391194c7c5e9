//! Error types for the Zinema plugin.
//!
//! This module defines the centralized error type [`ZinemaError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Catalog fetch failures are deliberately NOT represented here: the query
//! service absorbs them into [`SearchOutcome::Failure`](crate::catalog::SearchOutcome)
//! so that the app layer branches on data, never on error types. `ZinemaError`
//! covers the plugin's own fallible plumbing — theme loading, URL construction,
//! trace file I/O.

use thiserror::Error;

/// The main error type for Zinema plugin operations.
///
/// Consolidates the error conditions that can occur inside the plugin itself.
/// Variants wrapping underlying errors from external crates use `#[from]` for
/// automatic conversion with `?`.
#[derive(Debug, Error)]
pub enum ZinemaError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Catalog URL construction failed.
    ///
    /// Wraps parse errors from the `url` crate. With a fixed, well-formed
    /// endpoint constant this should not occur in practice, but the seam
    /// propagates rather than panics.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, primarily from the
    /// trace file writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Zinema operations.
///
/// Type alias for `std::result::Result<T, ZinemaError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZinemaError>;
