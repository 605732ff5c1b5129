//! Watermark model for tracking export state
//!
//! A watermark records the upper bound of previously exported data for one
//! log group. It is persisted as a small JSON document in the destination
//! bucket, one document per group, and overwritten wholesale on each
//! successful export.

use crate::domain::ids::LogGroupName;
use crate::domain::time::EpochMillis;
use serde::{Deserialize, Serialize};

/// Default key prefix under which watermark documents are stored
pub const DEFAULT_KEY_PREFIX: &str = "export-watermarks/";

/// Per-group export watermark
///
/// The persisted document is exactly `{"last_export_time": <int ms>}`.
/// A document that fails to parse into this shape is treated as corrupt by
/// the orchestrator, which then falls back to its default start time.
///
/// # Examples
///
/// ```
/// use logship::core::state::watermark::Watermark;
/// use logship::domain::EpochMillis;
///
/// let watermark = Watermark::new(EpochMillis::new(1_700_000_000_000));
/// let json = serde_json::to_string(&watermark).unwrap();
/// assert_eq!(json, r#"{"last_export_time":1700000000000}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watermark {
    /// Time of the last successful export request, in ms since epoch
    pub last_export_time: EpochMillis,
}

impl Watermark {
    /// Creates a watermark for the given export time
    pub fn new(last_export_time: EpochMillis) -> Self {
        Self { last_export_time }
    }

    /// Derives the deterministic object key for a group's watermark
    ///
    /// The key is `<prefix><group name with '/' replaced by '-'>.json`, so
    /// every group maps to exactly one document under the prefix.
    pub fn object_key(prefix: &str, group: &LogGroupName) -> String {
        format!("{prefix}{}.json", group.flat_name())
    }
}
