//! Result type alias for logship
//!
//! This module provides a convenient Result type alias that uses
//! LogshipError as the error type.

use super::errors::LogshipError;

/// Result type alias for logship operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use logship::domain::result::Result;
/// use logship::domain::errors::LogshipError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LogshipError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LogshipError>;
