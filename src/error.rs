//! Export Errors
//!
//! Structured error taxonomy for the export pipeline. Every failure kind is
//! distinguishable programmatically; nothing is swallowed into a log line.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors produced while loading a record store.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The store path does not exist. Detected before any connection
    /// attempt, so no SQLite side effects occur.
    #[error("store not found at {0}; ensure the producing application has generated it")]
    MissingStore(PathBuf),

    /// Any failure while reading rows from the store.
    #[error("store read error: {0}")]
    StoreRead(#[from] rusqlite::Error),

    /// A persisted payload whose byte length is not a multiple of 4.
    #[error("row {row_id}: payload length {len} is not a multiple of 4")]
    PayloadDecode { row_id: i64, len: usize },

    /// A decoded vector whose length differs from the first row's,
    /// preventing rectangular stacking.
    #[error("row {row_id}: expected {expected} vector components, got {actual}")]
    ShapeMismatch {
        row_id: i64,
        expected: usize,
        actual: usize,
    },

    /// I/O failure while writing a CSV dump.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
