//! Epoch-millisecond timestamp type
//!
//! Watermarks, export intervals, and stream activity timestamps are all
//! integer milliseconds since the Unix epoch, matching what the log service
//! accepts and returns. This module provides a small newtype so those
//! values cannot be confused with other integers.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Milliseconds since the Unix epoch
///
/// # Examples
///
/// ```
/// use logship::domain::time::EpochMillis;
///
/// let ts = EpochMillis::new(1_700_000_000_000);
/// assert_eq!(ts.as_i64(), 1_700_000_000_000);
/// assert!(ts.minus_hours(24) < ts);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EpochMillis(i64);

impl EpochMillis {
    /// Creates a timestamp from raw milliseconds
    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the raw millisecond value
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Converts a UTC datetime to epoch milliseconds
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }

    /// Converts back to a UTC datetime, if the value is in chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// Returns this timestamp shifted back by the given milliseconds
    pub fn minus_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }

    /// Returns this timestamp shifted back by the given hours
    pub fn minus_hours(self, hours: i64) -> Self {
        self.minus_millis(hours.saturating_mul(MILLIS_PER_HOUR))
    }

    /// Formats as `YYYYmmdd-HHMMSS` for use in S3 prefixes and task names
    ///
    /// Falls back to the raw millisecond value for timestamps outside
    /// chrono's representable range.
    pub fn format_compact(self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%Y%m%d-%H%M%S").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_hours() {
        let now = EpochMillis::new(1_700_000_000_000);
        let day_before = now.minus_hours(24);
        assert_eq!(now.as_i64() - day_before.as_i64(), 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_minus_millis() {
        let ts = EpochMillis::new(1_000);
        assert_eq!(ts.minus_millis(1).as_i64(), 999);
    }

    #[test]
    fn test_format_compact() {
        // 2023-11-14T22:13:20Z
        let ts = EpochMillis::new(1_700_000_000_000);
        assert_eq!(ts.format_compact(), "20231114-221320");
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = Utc::now();
        let ts = EpochMillis::from_datetime(dt);
        assert_eq!(ts.to_datetime().unwrap().timestamp_millis(), ts.as_i64());
    }

    #[test]
    fn test_serde_transparent() {
        let ts = EpochMillis::new(42);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
        let back: EpochMillis = serde_json::from_str("42").unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_ordering() {
        assert!(EpochMillis::new(1) < EpochMillis::new(2));
    }
}
