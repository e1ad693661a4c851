// Error types for employee-export.
// One enum per failing step (fetch, read, write) plus the umbrella run error.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while populating the local snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or malformed snapshot.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Snapshot not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("User record {index} has an empty name")]
    EmptyName { index: usize },
}

/// Output folder unusable or spreadsheet serialization failed.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Output folder does not exist: {}", .0.display())]
    MissingFolder(PathBuf),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, AppError>;
