//! Export request value object
//!
//! An ephemeral description of one export task submission: the source
//! group, the time interval, and the destination. Built fresh per
//! invocation and never persisted; the log service executes the task
//! asynchronously under an opaque task id.

use crate::core::export::invocation::Invocation;
use crate::domain::ids::{BucketName, LogGroupName};
use crate::domain::time::EpochMillis;

/// Root path under which exported log data lands in the bucket
const DESTINATION_ROOT: &str = "logs";

/// A single export task submission
///
/// The interval is `[from, now - 1]`; the upper bound backs off one
/// millisecond from the captured invocation time so the task cannot race
/// with events still being written at `now`.
///
/// The destination prefix namespaces by flattened group name and by the
/// starting watermark, so repeated runs land in distinguishable prefixes:
/// `logs/<flat-group>/<from as YYYYmmdd-HHMMSS>`.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    task_name: String,
    log_group: LogGroupName,
    from: EpochMillis,
    to: EpochMillis,
    destination_bucket: BucketName,
    destination_prefix: String,
}

impl ExportRequest {
    /// Builds the request for an invocation, exporting `[from, now - 1]`
    pub fn new(invocation: &Invocation, from: EpochMillis, now: EpochMillis) -> Self {
        let flat = invocation.log_group().flat_name();
        Self {
            task_name: format!("ExportTask-{flat}-{}", now.format_compact()),
            log_group: invocation.log_group().clone(),
            from,
            to: now.minus_millis(1),
            destination_bucket: invocation.destination_bucket().clone(),
            destination_prefix: format!("{DESTINATION_ROOT}/{flat}/{}", from.format_compact()),
        }
    }

    /// Task name submitted to the log service
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Source log group
    pub fn log_group(&self) -> &LogGroupName {
        &self.log_group
    }

    /// Inclusive lower bound of the exported interval
    pub fn from(&self) -> EpochMillis {
        self.from
    }

    /// Inclusive upper bound of the exported interval (`now - 1`)
    pub fn to(&self) -> EpochMillis {
        self.to
    }

    /// Destination bucket
    pub fn destination_bucket(&self) -> &BucketName {
        &self.destination_bucket
    }

    /// Destination prefix inside the bucket
    pub fn destination_prefix(&self) -> &str {
        &self.destination_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation() -> Invocation {
        Invocation::from_parts(Some("/aws/lambda/billing"), Some("archive"), Some("us-east-1"))
            .unwrap()
    }

    #[test]
    fn test_interval_backs_off_one_millisecond() {
        // from = 2023-11-14T22:13:20Z
        let from = EpochMillis::new(1_700_000_000_000);
        let now = EpochMillis::new(1_700_003_600_000);
        let request = ExportRequest::new(&invocation(), from, now);

        assert_eq!(request.from(), from);
        assert_eq!(request.to().as_i64(), now.as_i64() - 1);
    }

    #[test]
    fn test_destination_prefix_namespaces_by_group_and_start() {
        let from = EpochMillis::new(1_700_000_000_000);
        let now = EpochMillis::new(1_700_003_600_000);
        let request = ExportRequest::new(&invocation(), from, now);

        assert_eq!(
            request.destination_prefix(),
            "logs/-aws-lambda-billing/20231114-221320"
        );
    }

    #[test]
    fn test_task_name_uses_flattened_group_and_now() {
        let from = EpochMillis::new(1_700_000_000_000);
        let now = EpochMillis::new(1_700_003_600_000);
        let request = ExportRequest::new(&invocation(), from, now);

        assert_eq!(
            request.task_name(),
            "ExportTask--aws-lambda-billing-20231114-231320"
        );
    }
}
