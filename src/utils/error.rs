//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching a profile page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },
}

/// Errors that can occur while cross-tabulating problem records
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("unknown problem type: {0:?}")]
    UnknownType(String),

    #[error("difficulty out of range 0..=7: {0}")]
    UnknownDifficulty(i64),
}

/// Errors that can occur while reshaping a fetched payload
#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field {0} has unexpected type")]
    WrongType(String),

    #[error("problem list is not a valid record array: {0}")]
    InvalidProblemList(#[from] serde_json::Error),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
