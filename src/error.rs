use std::path::PathBuf;

use thiserror::Error;

use crate::boxes::BoundingBox;

/// Errors produced while loading box data or computing overlap statistics.
#[derive(Error, Debug)]
pub enum Error {
    #[error("bounding box data not found in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("malformed result file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ground truth has {ground_truth} frames but candidate has {candidate}")]
    LengthMismatch { ground_truth: usize, candidate: usize },

    #[error("overlap undefined for boxes with zero union area: {a:?} and {b:?}")]
    DegenerateInput { a: BoundingBox, b: BoundingBox },

    #[error("cannot take the mean of an empty series")]
    EmptySeries,

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for missing per-sequence data, the one failure a batch run
    /// downgrades to a skip.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type for tracking analysis operations
pub type Result<T> = std::result::Result<T, Error>;
