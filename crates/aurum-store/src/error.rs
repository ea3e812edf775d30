use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the history store.
///
/// Read-side corruption is recovered internally (the store loads an
/// empty history instead) and never reaches this type. Write failures
/// are always surfaced: subsequent runs depend on the persisted file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write history file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history")]
    Serialize(#[source] serde_json::Error),
}
