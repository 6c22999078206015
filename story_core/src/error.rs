//! Errors surfaced by the story pipeline's loading and output edges.

use std::path::PathBuf;

use match_feed::FeedError;

/// The scoring, selection and assembly stages cannot fail; only I/O around them can.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize story: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoryError>;
