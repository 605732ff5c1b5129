//! Domain error types
//!
//! This module defines the error hierarchy for logship. All errors are
//! domain-specific and don't expose AWS SDK types; adapters convert SDK
//! failures into these variants at the boundary.

use thiserror::Error;

/// Main logship error type
///
/// This is the primary error type used throughout the application.
/// It wraps the per-service error types and provides context for error
/// handling.
#[derive(Debug, Error)]
pub enum LogshipError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invocation input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Log service (CloudWatch Logs) errors
    #[error("Log service error: {0}")]
    LogService(#[from] LogServiceError),

    /// Object store (S3) errors
    #[error("Object store error: {0}")]
    ObjectStore(#[from] ObjectStoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Log service-specific errors
///
/// Errors that occur when interacting with the CloudWatch Logs API.
#[derive(Debug, Error)]
pub enum LogServiceError {
    /// DescribeLogGroups call failed
    #[error("Failed to describe log groups: {0}")]
    DescribeGroupsFailed(String),

    /// DescribeLogStreams call failed
    #[error("Failed to describe log streams: {0}")]
    DescribeStreamsFailed(String),

    /// CreateExportTask call was rejected
    #[error("Export task rejected: {0}")]
    ExportTaskRejected(String),

    /// Response was missing an expected field
    #[error("Invalid response from log service: {0}")]
    InvalidResponse(String),
}

/// Object store-specific errors
///
/// Errors that occur when reading or writing watermark documents in S3.
/// A missing document is not an error; stores report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    /// Object read failed for a reason other than "not found"
    #[error("Failed to read object {key}: {message}")]
    ReadFailed { key: String, message: String },

    /// Object write failed
    #[error("Failed to write object {key}: {message}")]
    WriteFailed { key: String, message: String },

    /// Object exists but does not parse as a watermark document
    #[error("Invalid watermark document at {key}: {message}")]
    InvalidDocument { key: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for LogshipError {
    fn from(err: std::io::Error) -> Self {
        LogshipError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LogshipError {
    fn from(err: serde_json::Error) -> Self {
        LogshipError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LogshipError {
    fn from(err: toml::de::Error) -> Self {
        LogshipError::Configuration(format!("TOML parse error: {err}"))
    }
}
