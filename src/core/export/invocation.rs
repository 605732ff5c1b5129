//! Invocation context
//!
//! The three values every invocation requires: which log group to export,
//! which bucket receives the data, and which region the services live in.
//! Construction is validation; an [`Invocation`] that exists is complete.

use crate::domain::ids::{BucketName, LogGroupName};
use crate::domain::{LogshipError, Result};

/// Validated invocation context
///
/// # Examples
///
/// ```
/// use logship::core::export::Invocation;
///
/// let invocation = Invocation::from_parts(
///     Some("/aws/lambda/billing"),
///     Some("log-archive"),
///     Some("us-east-1"),
/// )
/// .unwrap();
/// assert_eq!(invocation.region(), "us-east-1");
///
/// let missing = Invocation::from_parts(None, Some("log-archive"), Some("us-east-1"));
/// assert!(missing.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Invocation {
    log_group: LogGroupName,
    destination_bucket: BucketName,
    region: String,
}

impl Invocation {
    /// Builds an invocation from optional raw parameters
    ///
    /// All three parameters are required; a missing or empty value fails
    /// validation before any external call is made.
    ///
    /// # Errors
    ///
    /// Returns [`LogshipError::Validation`] naming every missing parameter.
    pub fn from_parts(
        log_group: Option<&str>,
        destination_bucket: Option<&str>,
        region: Option<&str>,
    ) -> Result<Self> {
        let mut missing = Vec::new();
        if is_blank(log_group) {
            missing.push("log_group");
        }
        if is_blank(destination_bucket) {
            missing.push("destination_bucket");
        }
        if is_blank(region) {
            missing.push("region");
        }
        if !missing.is_empty() {
            return Err(LogshipError::Validation(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        }

        let log_group =
            LogGroupName::new(log_group.unwrap_or_default()).map_err(LogshipError::Validation)?;
        let destination_bucket = BucketName::new(destination_bucket.unwrap_or_default())
            .map_err(LogshipError::Validation)?;

        Ok(Self {
            log_group,
            destination_bucket,
            region: region.unwrap_or_default().to_string(),
        })
    }

    /// The log group to export
    pub fn log_group(&self) -> &LogGroupName {
        &self.log_group
    }

    /// The bucket that receives exported data and the watermark document
    pub fn destination_bucket(&self) -> &BucketName {
        &self.destination_bucket
    }

    /// The service region
    pub fn region(&self) -> &str {
        &self.region
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_parts_present() {
        let invocation =
            Invocation::from_parts(Some("/ecs/web"), Some("archive"), Some("eu-west-1")).unwrap();
        assert_eq!(invocation.log_group().as_str(), "/ecs/web");
        assert_eq!(invocation.destination_bucket().as_str(), "archive");
        assert_eq!(invocation.region(), "eu-west-1");
    }

    #[test]
    fn test_missing_single_part() {
        let err = Invocation::from_parts(None, Some("archive"), Some("eu-west-1")).unwrap_err();
        assert!(matches!(err, LogshipError::Validation(_)));
        assert!(err.to_string().contains("log_group"));
        assert!(!err.to_string().contains("destination_bucket"));
    }

    #[test]
    fn test_missing_all_parts() {
        let err = Invocation::from_parts(None, None, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("log_group"));
        assert!(message.contains("destination_bucket"));
        assert!(message.contains("region"));
    }

    #[test]
    fn test_empty_counts_as_missing() {
        let err = Invocation::from_parts(Some("/ecs/web"), Some("  "), Some("eu-west-1"));
        assert!(err.is_err());
    }
}
