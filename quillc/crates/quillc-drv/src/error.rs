//! Error handling for the quillc driver.
//!
//! Lexical failures arrive here already converted into a rendered-ready
//! [`Diagnostic`]; everything else is configuration or I/O trouble.

use quillc_util::{Diagnostic, SourceMapError};
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("failed to read `{path}`")]
    Read {
        /// Path as given on the command line
        path: String,
        /// The underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Scanning a source file failed.
    #[error("{0}")]
    Lex(Box<Diagnostic>),

    /// `check` found files that do not scan.
    #[error("{failed} of {total} files failed to scan")]
    CheckFailed {
        /// Number of files with a lexical error
        failed: usize,
        /// Number of files checked
        total: usize,
    },

    /// A file id did not resolve.
    #[error(transparent)]
    SourceMap(#[from] SourceMapError),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing tokens failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// The diagnostic for a lexical failure, if this is one.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            DriverError::Lex(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_read_error_display() {
        let err = DriverError::Read {
            path: "main.ql".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read `main.ql`");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("no such file"));
    }

    #[test]
    fn test_lex_error_exposes_diagnostic() {
        let err = DriverError::Lex(Box::new(Diagnostic::error("unexpected `..`")));
        assert_eq!(err.to_string(), "error: unexpected `..`");
        assert!(err.diagnostic().is_some());
        assert!(DriverError::Config(String::new()).diagnostic().is_none());
    }

    #[test]
    fn test_check_failed_display() {
        let err = DriverError::CheckFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 files failed to scan");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }
}
