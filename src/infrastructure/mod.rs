//! Infrastructure layer for filesystem and environment interactions.
//!
//! Utilities for working with the Zellij plugin sandbox, where the host
//! filesystem is mounted under `/host`. Currently only the plugin data
//! directory lives here; it holds the trace export file.

pub mod paths;

pub use paths::plugin_data_dir;
