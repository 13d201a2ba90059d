//! Pipeline error types

use std::path::PathBuf;

/// Errors surfaced by the content pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No content file matches the requested slug
    #[error("no post found for slug '{slug}'")]
    NotFound { slug: String },

    /// The content directory or a content file could not be read
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration failed validation or could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
