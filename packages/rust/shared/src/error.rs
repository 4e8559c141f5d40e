//! Error types for TitleScout.
//!
//! Library crates use [`TitleScoutError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all TitleScout operations.
#[derive(Debug, thiserror::Error)]
pub enum TitleScoutError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The record source has no matching record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed query rejected by the record source (HTTP 400).
    #[error("invalid request: {message}")]
    RequestInvalid { message: String },

    /// Transport failure, timeout, or unspecified lookup error.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Malformed record content returned by a source.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TitleScoutError>;

impl TitleScoutError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a request-invalid error from any displayable message.
    pub fn request_invalid(msg: impl Into<String>) -> Self {
        Self::RequestInvalid {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
