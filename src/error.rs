//! Error types for loading the question collection.
//!
//! Only the fallible loaders in [`crate::store`] return these errors. The
//! browser controller absorbs them at its load boundary: it logs the failure,
//! keeps an empty store and switches to [`crate::browser::LoadState::Failed`].

use std::path::PathBuf;

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a question collection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read.
    #[error("failed to read question source '{path}': {source}")]
    Io {
        /// Path of the source that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source was read but is not a valid question collection.
    #[error("malformed question source: {source}")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}
