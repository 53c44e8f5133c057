// src/infra/errors.rs — Error types for cupdash

use thiserror::Error;

use crate::core::channels::ChannelId;

#[derive(Error, Debug)]
pub enum DashError {
    // Load-time errors (fatal)
    #[error("Cannot read dataset '{path}': {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset '{path}' has no '{column}' column (found: {found})")]
    MissingColumn {
        path: String,
        column: String,
        found: String,
    },

    #[error("Dataset '{path}' has no complete rows ({dropped} rows dropped)")]
    EmptyDataset { path: String, dropped: usize },

    #[error("Unsupported encoding '{0}' (expected latin1 or utf8)")]
    UnsupportedEncoding(String),

    #[error("Dataset '{path}' is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 { path: String, offset: usize },

    // Binder misuse
    #[error("Channel '{expected}' cannot handle an event for '{got}'")]
    ChannelMismatch { expected: ChannelId, got: ChannelId },

    // Presentation
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashError {
    /// Errors raised while loading the dataset. The process exits before
    /// serving when one of these surfaces.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            DashError::DatasetIo { .. }
                | DashError::Csv { .. }
                | DashError::MissingColumn { .. }
                | DashError::EmptyDataset { .. }
                | DashError::UnsupportedEncoding(_)
                | DashError::InvalidUtf8 { .. }
        )
    }
}

pub type DashResult<T> = Result<T, DashError>;
