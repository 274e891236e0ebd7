//! Explorer error types

use repertoire_core::{InvalidPositionError, UnknownTimeControlError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PGN error in {path}: {message}")]
    Pgn { path: String, message: String },

    #[error("Cache error: {0}")]
    Cache(#[from] bincode::Error),

    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    #[error(transparent)]
    InvalidPosition(#[from] InvalidPositionError),

    #[error(transparent)]
    UnknownTimeControl(#[from] UnknownTimeControlError),
}
