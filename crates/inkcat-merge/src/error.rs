use thiserror::Error;

use crate::feed::FeedKind;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("required input file not found: {path}")]
    MissingInputFile { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    MalformedInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{feed} feed record #{index} has no name")]
    MalformedRecord { feed: FeedKind, index: usize },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
