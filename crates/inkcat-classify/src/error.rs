use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("input file not found: {path}")]
    MissingInputFile { path: String },

    #[error("malformed JSON in {path}: {source}")]
    MalformedInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to regenerate output directory {path}: {reason}")]
    UnsafeOutputDir { path: String, reason: &'static str },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifyError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ClassifyError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
