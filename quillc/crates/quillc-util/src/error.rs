//! Core error types for quillc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: id {0}")]
    FileNotFound(usize),

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: u32, max_lines: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
