//! Error types for audit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AuditError` for fatal preconditions that abort the run
//! - Per-file read and parse failures inside checks are *not* errors: they
//!   are converted into issue findings so the audit always completes
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The supplied project root does not exist.
    #[error("Path '{path}' does not exist")]
    ProjectRootNotFound { path: PathBuf },

    /// No project path was given and stdin is not a terminal.
    #[error("No project path given and no terminal to prompt on")]
    MissingProjectPath,

    /// A rule catalog file could not be loaded or parsed.
    #[error("Failed to load catalog {path}: {message}")]
    CatalogLoadError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
