//! Domain models and types for logship.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`LogGroupName`], [`BucketName`], [`TaskId`])
//! - **Timestamps** ([`EpochMillis`], milliseconds since epoch as used by the log service)
//! - **Error types** ([`LogshipError`], [`LogServiceError`], [`ObjectStoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so different kinds of names cannot be
//! mixed up:
//!
//! ```rust
//! use logship::domain::{LogGroupName, BucketName};
//!
//! # fn example() -> Result<(), String> {
//! let group = LogGroupName::new("/aws/lambda/billing")?;
//! let bucket = BucketName::new("log-archive")?;
//!
//! // This won't compile - type safety prevents mixing names
//! // let wrong: BucketName = group;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`] with [`LogshipError`]; the
//! `?` operator converts per-service errors automatically.

pub mod errors;
pub mod ids;
pub mod result;
pub mod time;

// Re-export commonly used types for convenience
pub use errors::{LogServiceError, LogshipError, ObjectStoreError};
pub use ids::{BucketName, LogGroupName, TaskId};
pub use result::Result;
pub use time::EpochMillis;
