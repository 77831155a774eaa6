//! Error types and handling infrastructure for budgetglance.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! Snapshot reads and widget rendering are total and never return an error;
//! the variants here cover the outer shell only: loading and saving store
//! files, the terminal preview host, and command-line validation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for budgetglance operations.
///
/// This enum covers the fallible edges of the crate: store file handling,
/// the preview terminal, and argument validation. The read-and-render core
/// defaults instead of failing and never produces one of these.
#[derive(Error, Debug)]
pub enum GlanceError {
    /// Store file system errors (file not found, permission denied, etc.)
    #[error("Store operation failed: {message}")]
    StoreError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Store file not found specifically (common case for user feedback)
    #[error("Store file not found: {path}")]
    StoreNotFound { path: PathBuf },

    /// Store file did not parse as a flat JSON key-value object
    #[error("Store file format error: {message}")]
    StoreFormat { message: String },

    /// Preview terminal related errors
    #[error("Preview operation failed: {message}")]
    PreviewError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for budgetglance operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the budgetglance codebase.
pub type Result<T> = std::result::Result<T, GlanceError>;

impl GlanceError {
    /// Create a StoreError from an io::Error with additional context
    pub fn store_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::StoreError {
            message: message.into(),
            source,
        }
    }

    /// Create a StoreFormat error with a descriptive message
    pub fn store_format(message: impl Into<String>) -> Self {
        Self::StoreFormat {
            message: message.into(),
        }
    }

    /// Create a PreviewError from an io::Error with additional context
    pub fn preview(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::PreviewError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to GlanceError
impl From<std::io::Error> for GlanceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                // For NotFound, the path context is lost here; call sites
                // that have it should use StoreNotFound directly.
                Self::StoreError {
                    message: "Store file not found".to_string(),
                    source: err,
                }
            }
            std::io::ErrorKind::PermissionDenied => Self::StoreError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::StoreError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
