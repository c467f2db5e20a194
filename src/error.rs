//! Unified error types for chatstats.
//!
//! Two kinds of failure exist in this crate and they are kept apart:
//!
//! - [`ChatstatsError`] aborts a run. It is only produced when the input
//!   cannot be read or decoded at all, or when an output cannot be written.
//! - [`LineIssue`] describes a single line or message that was dropped.
//!   Issues are never returned as `Err`; the pipeline counts them in a
//!   [`ParseReport`](crate::core::models::ParseReport) and keeps going.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatAnalysis;
///
/// fn load() -> Result<ChatAnalysis> {
///     chatstats::analyze_bytes(b"", &Default::default())
/// }
/// # assert!(load().unwrap().is_empty());
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all fatal chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input document is not valid UTF-8.
    ///
    /// This is the only input-side condition that aborts a run; every
    /// other defect degrades to a smaller result.
    #[error("UTF-8 encoding error in {context}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// A requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            path: None,
            source: err.utf8_error(),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a decode error for an input document.
    pub fn undecodable(source: std::str::Utf8Error, path: Option<PathBuf>) -> Self {
        ChatstatsError::Utf8 {
            context: "chat export".to_string(),
            path,
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the input could not be decoded as text.
    pub fn is_undecodable(&self) -> bool {
        matches!(self, ChatstatsError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatstatsError::InvalidConfig { .. })
    }
}

// ============================================================================
// Non-fatal, per-line issues
// ============================================================================

/// Why a line or message was left out of the result.
///
/// Issues are plain data. They are logged through `tracing` and tallied,
/// but never abort processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineIssue {
    /// The line does not match `<date>, <time> <am|pm> - <author>:<body>`.
    UnparseableLine {
        /// 1-based line number in the input document
        line: usize,
    },

    /// The line matched, but its date or time does not exist on the calendar
    /// or the 12-hour clock.
    MalformedTimestamp {
        /// 1-based line number in the input document
        line: usize,
        /// Raw date field
        date: String,
        /// Raw time field
        time: String,
    },
}

impl LineIssue {
    /// Returns the 1-based line number the issue refers to.
    pub fn line(&self) -> usize {
        match self {
            LineIssue::UnparseableLine { line } | LineIssue::MalformedTimestamp { line, .. } => {
                *line
            }
        }
    }
}

impl std::fmt::Display for LineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineIssue::UnparseableLine { line } => write!(f, "line {line}: unparseable line"),
            LineIssue::MalformedTimestamp { line, date, time } => {
                write!(f, "line {line}: malformed timestamp '{date}, {time}'")
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
