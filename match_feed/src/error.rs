//! Errors raised while loading match data from disk.

use std::path::PathBuf;

/// Failures of the loading layer. Field-level noise never ends up here.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("match document needs two contestants, found {found}")]
    MissingContestants { found: usize },

    #[error("match document has no message stream")]
    MissingMessages,
}

pub type Result<T> = std::result::Result<T, FeedError>;

/// Read and parse a JSON document, tagging failures with the path.
pub(crate) fn read_json(path: &std::path::Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FeedError::Json {
        path: path.to_path_buf(),
        source,
    })
}
