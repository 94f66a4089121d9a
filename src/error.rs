use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pagelint operations.
#[derive(Debug, Error)]
pub enum PagelintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse page JSON from {path}: {source}")]
    PageJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write page JSON to {path}: {source}")]
    PageJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode report as JSON: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Analysis found {crossing_count} crossing(s) and {duplicate_count} duplicate(s)")]
    FindingsDetected {
        crossing_count: usize,
        duplicate_count: usize,
    },

    #[error("No pages could be analyzed")]
    NoPagesAnalyzed,
}
