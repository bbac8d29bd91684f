//! Unified error types for chatstat.
//!
//! Two layers of errors exist:
//!
//! - [`ChatstatError`] covers the systemic failures that are surfaced to the
//!   caller (unreadable file, input that is not UTF-8, output writer failures).
//! - [`RecordError`] covers a single message that could not be normalized.
//!   These never cross the parser boundary: the message is excluded from the
//!   record table and counted in [`ParseStats`](crate::parser::ParseStats).

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::RecordTable;
///
/// fn load() -> Result<RecordTable> {
///     Ok(RecordTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all fallible chatstat operations.
///
/// Malformed individual lines are never reported through this type; only
/// conditions that prevent processing the input as a whole are.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input or output content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An output format was requested that is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
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

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

/// Why a single assembled message could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The leading timestamp matched the line grammar but does not name a
    /// real calendar instant (month 13, February 30th, hour 24, ...).
    #[error("Malformed timestamp '{raw}'")]
    MalformedTimestamp {
        /// The timestamp text as it appeared in the export
        raw: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a UTF-8 error for undecodable input.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatstatError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatstatError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatstatError::InvalidConfig { .. })
    }
}
