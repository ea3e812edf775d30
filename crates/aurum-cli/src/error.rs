use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] aurum_core::ValidationError),

    #[error(transparent)]
    Compute(#[from] aurum_core::ComputeError),

    #[error("quote source failure: {0}")]
    Source(#[from] aurum_core::SourceError),

    #[error(transparent)]
    Store(#[from] aurum_core::StoreError),

    #[error("notification failure: {0}")]
    Notify(String),

    #[error("config file '{path}': {message}")]
    Config { path: PathBuf, message: String },

    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 2,
            Self::Config { .. } => 3,
            Self::Source(_) => 4,
            Self::Compute(_) => 5,
            Self::Store(_) => 6,
            Self::Notify(_) => 7,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
