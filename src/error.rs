//! Error types for dirgraph
//!
//! The graph core never fails: missing vertices and empty graphs produce
//! empty results, and filesystem failures during a build are reported to an
//! error sink. `DirGraphError` covers the fallible surfaces around the core
//! (configuration, rendering, logging setup). `EnumerationError` is what a
//! filesystem adapter returns for a single path.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::path::NodePath;

/// Why a filesystem adapter could not enumerate or classify a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCause {
    /// Insufficient permission
    Permission,
    /// The path vanished or never existed
    NotFound,
    /// Transient or device-level I/O failure
    Io,
    /// Anything the adapter could not classify
    Other,
    /// A cancellation-aware adapter was asked to stop. Never produced from
    /// an OS error; `EINTR` is an ordinary `Io` failure.
    Interrupted,
}

impl ErrorCause {
    /// Map an `io::Error` to the cause reported through the adapter seam
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorCause::Permission,
            io::ErrorKind::NotFound => ErrorCause::NotFound,
            io::ErrorKind::Other => ErrorCause::Other,
            _ => ErrorCause::Io,
        }
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCause::Permission => write!(f, "permission denied"),
            ErrorCause::NotFound => write!(f, "not found"),
            ErrorCause::Io => write!(f, "I/O error"),
            ErrorCause::Other => write!(f, "error"),
            ErrorCause::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// A filesystem adapter failed for a specific path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read {path}: {cause}{}", detail_suffix(.detail))]
pub struct EnumerationError {
    pub path: NodePath,
    pub cause: ErrorCause,
    /// Adapter-specific detail, e.g. the OS error message
    pub detail: Option<String>,
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" ({})", d),
        None => String::new(),
    }
}

impl EnumerationError {
    pub fn new(path: NodePath, cause: ErrorCause) -> Self {
        Self {
            path,
            cause,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn from_io(path: NodePath, err: &io::Error) -> Self {
        Self::new(path, ErrorCause::from_io(err)).with_detail(err.to_string())
    }

    pub fn is_interrupted(&self) -> bool {
        self.cause == ErrorCause::Interrupted
    }
}

/// Errors raised by the fallible surfaces around the graph core
#[derive(Error, Debug)]
pub enum DirGraphError {
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl DirGraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        DirGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl fmt::Display,
        error: impl fmt::Display,
    ) -> Self {
        DirGraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for dirgraph operations
pub type Result<T> = std::result::Result<T, DirGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_from_io_kind() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(ErrorCause::from_io(&denied), ErrorCause::Permission);

        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(ErrorCause::from_io(&missing), ErrorCause::NotFound);

        let broken = io::Error::from(io::ErrorKind::BrokenPipe);
        assert_eq!(ErrorCause::from_io(&broken), ErrorCause::Io);
    }

    #[test]
    fn test_eintr_is_not_cancellation() {
        let eintr = io::Error::from(io::ErrorKind::Interrupted);
        assert_eq!(ErrorCause::from_io(&eintr), ErrorCause::Io);

        let err = EnumerationError::from_io(NodePath::from("/r/a"), &eintr);
        assert!(!err.is_interrupted());
    }

    #[test]
    fn test_enumeration_error_message_names_path() {
        let err = EnumerationError::new(NodePath::from("/r/a"), ErrorCause::Permission);
        assert_eq!(err.to_string(), "cannot read /r/a: permission denied");

        let err = err.with_detail("os error 13");
        assert_eq!(
            err.to_string(),
            "cannot read /r/a: permission denied (os error 13)"
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DirGraphError::invalid_value("log level", "dirgraph=loud");
        assert_eq!(err.to_string(), "invalid log level: dirgraph=loud");
    }
}
