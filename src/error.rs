//! Error types for the guard engine.

use thiserror::Error;

/// Main error type for guard engine operations
#[derive(Error, Debug)]
pub enum GuardError {
    /// The external linter could not be run at all. Findings, including
    /// zero findings, are never reported through this variant.
    #[error("Linter process failed ({tool}): {message}")]
    LinterProcess { tool: &'static str, message: String },

    #[error("Invalid hook payload: {message}")]
    InvalidHookPayload { message: String },

    #[error("Storage error at {path}: {message}")]
    Storage { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for guard engine operations
pub type Result<T> = std::result::Result<T, GuardError>;
