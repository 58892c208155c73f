//! Unified application error type.
//! Store, core logic, HTTP surface and CLI all return AppError so the
//! error handling stays consistent and easy to map to exit codes or
//! HTTP status codes.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage (backing file)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage format error: {0}")]
    Storage(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid kind: '{0}'. Use 'entrada' or 'saida'")]
    InvalidKind(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("Entry not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the backing file could not be read, written or parsed.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Storage(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
