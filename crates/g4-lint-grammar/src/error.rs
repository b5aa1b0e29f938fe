//! Error types for loading grammar files.
//!
//! Extraction itself never fails: any text produces a (possibly partial)
//! [`Grammar`](crate::model::Grammar). The only failure is reading the file.

use std::path::PathBuf;
use thiserror::Error;

/// An error that occurs while loading a grammar file from disk.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The file could not be read (missing, permissions, invalid UTF-8).
    #[error("Failed to read grammar file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GrammarError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            GrammarError::Io { path, .. } => path,
        }
    }
}
