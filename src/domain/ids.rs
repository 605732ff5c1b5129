//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers logship passes between the
//! orchestrator and the service adapters. Each type validates on
//! construction so the rest of the code never sees an empty name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log group name newtype wrapper
///
/// Identifies the CloudWatch Logs log group being exported. Group names
/// commonly contain `/` separators (e.g. `/aws/lambda/my-function`), which
/// are not usable in the derived S3 key or export task name, so the type
/// also provides a flattened form.
///
/// # Examples
///
/// ```
/// use logship::domain::ids::LogGroupName;
/// use std::str::FromStr;
///
/// let group = LogGroupName::from_str("/aws/lambda/billing").unwrap();
/// assert_eq!(group.as_str(), "/aws/lambda/billing");
/// assert_eq!(group.flat_name(), "-aws-lambda-billing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogGroupName(String);

impl LogGroupName {
    /// Creates a new LogGroupName from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Log group name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the log group name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name with path separators replaced by hyphens
    ///
    /// Used wherever the group name becomes part of an S3 key, export task
    /// name, or destination prefix.
    pub fn flat_name(&self) -> String {
        self.0.replace('/', "-")
    }
}

impl fmt::Display for LogGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogGroupName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LogGroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Destination bucket name newtype wrapper
///
/// Identifies the S3 bucket that receives both the exported log data and
/// the watermark documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketName(String);

impl BucketName {
    /// Creates a new BucketName from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Bucket name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BucketName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Export task identifier assigned by the log service
///
/// Opaque to logship; it is surfaced in the invocation outcome and never
/// used to poll task completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new TaskId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Task id cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the task id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
