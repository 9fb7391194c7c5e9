//! Rotating trace file writer.
//!
//! Appends OTLP JSON lines to the trace export file, rotating it once it
//! grows past a size budget and keeping a bounded number of timestamped
//! backups so trace output can never fill the disk.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotate once the active file grows past this size (5 MB).
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated backups to keep.
const KEEP_BACKUPS: usize = 2;

/// Append-only line writer with size-based rotation.
///
/// The file opens lazily on first write. An internal `Mutex` keeps writes
/// whole even if the exporter is ever driven from more than one thread.
pub struct RotatingLogFile {
    path: PathBuf,
    handle: Mutex<Option<File>>,
}

impl RotatingLogFile {
    /// Creates a writer for `path` without touching the filesystem yet.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating the file first if it is over budget.
    ///
    /// The line is flushed to disk before returning, so a crashed pane loses
    /// at most the span being written.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or if another
    /// writer panicked while holding the lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| {
                io::Error::new(io::ErrorKind::Other, format!("trace log lock poisoned: {e}"))
            })?;

        if self.over_budget() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace log file unavailable"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// True when the active file exists and exceeds the rotation budget.
    fn over_budget(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > ROTATE_AT_BYTES)
    }

    /// Renames the active file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> io::Result<()> {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        if self.path.exists() {
            let backup = self.path.with_extension(format!("json.{stamp}"));
            fs::rename(&self.path, &backup)?;
        }

        self.prune_backups();
        Ok(())
    }

    /// Deletes all but the newest `KEEP_BACKUPS` rotated files.
    ///
    /// Individual deletion failures are ignored so pruning keeps going.
    fn prune_backups(&self) {
        let Some(parent) = self.path.parent() else {
            return;
        };
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return;
        };
        let Ok(entries) = fs::read_dir(parent) else {
            return;
        };

        let mut backups: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by_key(|path| {
            std::cmp::Reverse(fs::metadata(path).and_then(|m| m.modified()).ok())
        });

        for stale in backups.iter().skip(KEEP_BACKUPS) {
            let _ = fs::remove_file(stale);
        }
    }
}

impl std::fmt::Debug for RotatingLogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingLogFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_to_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let log = RotatingLogFile::new(path.clone());

        log.append_line("{\"a\":1}").unwrap();
        log.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn opens_lazily_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let log = RotatingLogFile::new(path.clone());

        assert!(!path.exists());
        log.append_line("x").unwrap();
        assert!(path.exists());
    }
}
