//! Unified error types for hangstats.
//!
//! This module provides a single [`HangstatsError`] enum that covers every
//! failure the driver can hit while loading an archive or writing snapshots.
//!
//! The aggregation engine itself never returns errors: unknown senders and
//! unrecognized event categories are logged and degraded gracefully. Errors
//! only originate at the archive boundary (missing file, wrong format,
//! missing top-level structure) and at the output boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for hangstats operations.
///
/// # Example
///
/// ```rust
/// use hangstats::error::Result;
/// use hangstats::ConversationSnapshot;
///
/// fn my_function() -> Result<Vec<ConversationSnapshot>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, HangstatsError>;

/// The error type for all hangstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HangstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The archive file cannot be read
    /// - The output directory cannot be created
    /// - Disk is full (when writing snapshots)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The archive file does not exist.
    #[error("Could not find file: {}", path.display())]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Failed to decode part of the archive.
    #[error("Failed to parse {context}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// What was being decoded (e.g., "conversation #3")
        context: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The input doesn't match the expected format.
    ///
    /// This occurs when:
    /// - The archive path does not end in `.json`
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A required structural key is missing from the archive.
    #[error("Could not find `{key}` in {}", path.as_ref().map(|p| format!("file {}", p.display())).unwrap_or_else(|| "archive".to_string()))]
    MissingField {
        /// The missing key
        key: &'static str,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An unsupported log level was requested.
    #[error("Invalid log level '{input}'. Expected one of: {expected}")]
    InvalidLogLevel {
        /// The rejected input
        input: String,
        /// Accepted values
        expected: &'static str,
    },
}

impl HangstatsError {
    /// Creates a parse error for one archive entry.
    pub fn parse(
        context: impl Into<String>,
        source: serde_json::Error,
        path: Option<PathBuf>,
    ) -> Self {
        HangstatsError::Parse {
            context: context.into(),
            source,
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        HangstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field(key: &'static str, path: Option<PathBuf>) -> Self {
        HangstatsError::MissingField { key, path }
    }

    /// Creates a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        HangstatsError::NotFound { path: path.into() }
    }

    /// Creates an invalid log level error.
    pub fn invalid_log_level(input: impl Into<String>) -> Self {
        HangstatsError::InvalidLogLevel {
            input: input.into(),
            expected: "debug, info, warn, error, 0-3",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, HangstatsError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, HangstatsError::Parse { .. } | HangstatsError::Json(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, HangstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if a required archive key was missing.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, HangstatsError::MissingField { .. })
    }

    /// Returns `true` if the archive file was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HangstatsError::NotFound { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
