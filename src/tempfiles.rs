// src/tempfiles.rs
//! Process-scoped temporary files backing stream and path representations.
//!
//! Clipboard and signal values have no filesystem identity of their own, so
//! turning them into a path or a byte reader means persisting the text to a
//! fresh temp file first. The files are owned by a `TempStore` handle and
//! removed, best effort, when the handle drops.

use crate::error::AppError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, TempPath};

/// Owner of the temp files created during one invocation.
///
/// Keep the store alive until the resolved value has been consumed; dropping
/// it unlinks every file it handed out. Deletion failures are ignored.
#[derive(Default)]
pub struct TempStore {
    files: Vec<TempPath>,
}

impl TempStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `data` to a fresh temp file and returns its path.
    pub fn persist(&mut self, data: &[u8], binary: bool) -> Result<PathBuf, AppError> {
        let suffix = if binary { ".bin" } else { ".txt" };
        let mut file = Builder::new().prefix("plumb_").suffix(suffix).tempfile()?;
        file.write_all(data)?;
        file.flush()?;

        let temp_path = file.into_temp_path();
        let path = temp_path.to_path_buf();
        log::debug!("Persisted {} bytes to {}", data.len(), path.display());
        self.files.push(temp_path);
        Ok(path)
    }
}
