// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that aborts a refresh. Bad cell *values* never land here:
/// they degrade to zero in `core::fields`.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] ::csv::Error),

    /// Missing column or non-integer team number.
    #[error("line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("write failed: {0}")]
    Write(#[from] io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
