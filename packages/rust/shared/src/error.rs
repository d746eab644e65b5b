//! Error types for roster.
//!
//! Library crates use [`RosterError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Configuration loading, validation, or credential/preflight error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The operator declined the selection confirmation prompt.
    ///
    /// Not a failure in the usual sense: the run terminates with no
    /// publish call, reflecting a deliberate operator choice.
    #[error("selection aborted by operator")]
    SelectionAborted,

    /// Repository source (GitHub API) error: network, auth, malformed data.
    #[error("source fetch error: {0}")]
    SourceFetch(String),

    /// Page body rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Article publishing error (authorization or network failure).
    #[error("publish error: {0}")]
    Publish(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (schema mismatch, invalid format, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = RosterError::config("missing API token");
        assert_eq!(err.to_string(), "config error: missing API token");

        let err = RosterError::SelectionAborted;
        assert_eq!(err.to_string(), "selection aborted by operator");

        let err = RosterError::Publish("HTTP 403".into());
        assert!(err.to_string().contains("403"));
    }
}
