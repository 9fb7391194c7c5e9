//! Path handling for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for Zinema's files.
///
/// Located at `/host/.local/share/zellij/zinema` in the Zellij sandbox. In
/// the plugin environment `/host` points at the cwd of the last focused
/// terminal (or where Zellij was started), which typically resolves the
/// directory to `~/.local/share/zellij/zinema`. The rotating trace export
/// file is written here.
#[must_use]
pub fn plugin_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zinema")
}
