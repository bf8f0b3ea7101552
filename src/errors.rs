//! Error types for snapshot processing.
//!
//! Every failure while loading a snapshot's artifacts is fatal for the run, so
//! the taxonomy is about telling the operator *which* upstream tool produced a
//! bad artifact rather than about recovery:
//!
//! - `Io`: a required artifact could not be opened or read
//! - `ColumnCount` / `InvalidField`: a row did not match the source's schema
//! - `MetricNotFound` / `MalformedMetric`: the decoupling summary lacked a metric
//! - `Config`: configuration file or CLI value rejected
//! - `Discovery`: the results root could not be walked
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Artifact schema errors
//! - E020-E029: Scalar metric errors
//! - E030-E039: Configuration errors

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");
    /// Discovery error - results root could not be walked
    pub const IO_DISCOVERY: ErrorCode = ErrorCode("E005");

    /// Schema error - row shorter than the source requires
    pub const SCHEMA_COLUMN_COUNT: ErrorCode = ErrorCode("E010");
    /// Schema error - field is not a valid number
    pub const SCHEMA_INVALID_FIELD: ErrorCode = ErrorCode("E011");

    /// Metric error - no list item mentions the metric
    pub const METRIC_NOT_FOUND: ErrorCode = ErrorCode("E020");
    /// Metric error - list item found but the value is unreadable
    pub const METRIC_MALFORMED: ErrorCode = ErrorCode("E021");

    /// Config error - generic
    pub const CONFIG_GENERIC: ErrorCode = ErrorCode("E030");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for smellmap operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A required artifact could not be opened, read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row has fewer columns than the source schema needs
    #[error(
        "{} line {line}: {source_name} row has {actual} column(s), expected at least {expected}",
        path.display()
    )]
    ColumnCount {
        path: PathBuf,
        source_name: &'static str,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A numeric column could not be parsed
    #[error(
        "{} line {line}: column {column} ({column_name}) has invalid value '{value}'",
        path.display()
    )]
    InvalidField {
        path: PathBuf,
        line: usize,
        column: usize,
        column_name: &'static str,
        value: String,
    },

    /// No list item in the summary mentions the metric
    #[error("metric '{metric}' not found in {}", path.display())]
    MetricNotFound { metric: String, path: PathBuf },

    /// The metric's list item exists but carries no readable percentage
    #[error("metric '{metric}' in {} has unreadable value '{text}'", path.display())]
    MalformedMetric {
        metric: String,
        path: PathBuf,
        text: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The results root could not be walked
    #[error("Discovery error under {}: {message}", root.display())]
    Discovery { root: PathBuf, message: String },
}

impl SnapshotError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn discovery(root: &Path, message: impl Into<String>) -> Self {
        Self::Discovery {
            root: root.to_path_buf(),
            message: message.into(),
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
                _ => ErrorCode::IO_GENERIC,
            },
            Self::ColumnCount { .. } => ErrorCode::SCHEMA_COLUMN_COUNT,
            Self::InvalidField { .. } => ErrorCode::SCHEMA_INVALID_FIELD,
            Self::MetricNotFound { .. } => ErrorCode::METRIC_NOT_FOUND,
            Self::MalformedMetric { .. } => ErrorCode::METRIC_MALFORMED,
            Self::Config(_) => ErrorCode::CONFIG_GENERIC,
            Self::Discovery { .. } => ErrorCode::IO_DISCOVERY,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Discovery { .. } => "I/O",
            Self::ColumnCount { .. } | Self::InvalidField { .. } => "Schema",
            Self::MetricNotFound { .. } | Self::MalformedMetric { .. } => "Metric",
            Self::Config(_) => "Config",
        }
    }

    /// Process exit code for this error.
    ///
    /// - 1: I/O
    /// - 2: schema
    /// - 3: metric
    /// - 4: configuration
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            "Schema" => 2,
            "Metric" => 3,
            "Config" => 4,
            _ => 1,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SnapshotError>;
