//! Error types for the tzlab library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a local date-time could not be mapped to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// The local time was skipped by a "spring forward" transition.
    Gap,
    /// The local time occurs twice because of a "fall back" transition.
    Fold,
}

impl fmt::Display for AmbiguityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbiguityKind::Gap => f.write_str("does not exist (DST gap)"),
            AmbiguityKind::Fold => f.write_str("occurs twice (DST overlap)"),
        }
    }
}

/// Comprehensive error type for all conversion and storage operations.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Text did not match the pattern, or a field was out of range
    #[error("Failed to parse '{input}' with pattern '{pattern}': {reason}")]
    Parse {
        input: String,
        pattern: String,
        reason: String,
    },
    /// Pattern string could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    /// Zone identifier not found in the rules database
    #[error("Unknown time zone '{zone}'")]
    UnknownZone {
        zone: String,
        #[source]
        source: jiff::Error,
    },
    /// Local time falls in a gap or fold and the policy rejects it
    #[error("Local time {local} in zone '{zone}' {kind}")]
    AmbiguousLocalTime {
        local: String,
        zone: String,
        kind: AmbiguityKind,
    },
    /// Instant or wire timestamp outside the supported range
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A blocking store task panicked or was cancelled
    #[error("Background task failed: {message}")]
    Task { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ConversionError {
        ConversionError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for parse errors that share an input and pattern.
pub struct ParseErrorBuilder {
    input: String,
    pattern: String,
}

impl ParseErrorBuilder {
    /// Create a parse error builder for `input` read with `pattern`.
    pub fn new(input: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pattern: pattern.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ConversionError {
        ConversionError::Parse {
            input: self.input,
            pattern: self.pattern,
            reason: reason.into(),
        }
    }
}

impl ConversionError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for parse errors.
    pub fn parse(input: impl Into<String>, pattern: impl Into<String>) -> ParseErrorBuilder {
        ParseErrorBuilder::new(input, pattern)
    }

    /// Creates an error for a pattern that failed to compile.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        ConversionError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside the supported instant range.
    pub fn out_of_range(what: &'static str, value: impl fmt::Display) -> Self {
        ConversionError::OutOfRange {
            what,
            value: value.to_string(),
        }
    }

    fn task_join(err: impl fmt::Display) -> Self {
        ConversionError::Task {
            message: err.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for ConversionError {
    fn from(err: tokio::task::JoinError) -> Self {
        ConversionError::task_join(err)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ConversionError::database(message).with_source(e))
    }
}

/// Result type alias for tzlab operations
pub type Result<T> = std::result::Result<T, ConversionError>;
