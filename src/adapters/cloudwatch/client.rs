//! CloudWatch Logs implementation of [`LogSource`]
//!
//! Wraps the AWS SDK client and converts its failures into domain errors;
//! no SDK types cross this boundary.

use crate::adapters::traits::LogSource;
use crate::core::export::request::ExportRequest;
use crate::domain::ids::{LogGroupName, TaskId};
use crate::domain::time::EpochMillis;
use crate::domain::{LogServiceError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatchlogs::types::OrderBy;

/// CloudWatch Logs client for logship
pub struct CloudWatchLogsSource {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogsSource {
    /// Creates a log source from shared SDK configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudwatchlogs::Client::new(config),
        }
    }
}

#[async_trait]
impl LogSource for CloudWatchLogsSource {
    async fn group_creation_time(&self, group: &LogGroupName) -> Result<Option<EpochMillis>> {
        let output = self
            .client
            .describe_log_groups()
            .log_group_name_prefix(group.as_str())
            .send()
            .await
            .map_err(|e| LogServiceError::DescribeGroupsFailed(e.to_string()))?;

        // The prefix query can match sibling groups; only the exact name counts.
        Ok(output
            .log_groups()
            .iter()
            .find(|g| g.log_group_name() == Some(group.as_str()))
            .and_then(|g| g.creation_time())
            .map(EpochMillis::new))
    }

    async fn latest_event_timestamp(&self, group: &LogGroupName) -> Result<Option<EpochMillis>> {
        let output = self
            .client
            .describe_log_streams()
            .log_group_name(group.as_str())
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .limit(1)
            .send()
            .await
            .map_err(|e| LogServiceError::DescribeStreamsFailed(e.to_string()))?;

        Ok(output
            .log_streams()
            .first()
            .and_then(|stream| stream.last_event_timestamp())
            .map(EpochMillis::new))
    }

    async fn create_export_task(&self, request: &ExportRequest) -> Result<TaskId> {
        let output = self
            .client
            .create_export_task()
            .task_name(request.task_name())
            .log_group_name(request.log_group().as_str())
            .from(request.from().as_i64())
            .to(request.to().as_i64())
            .destination(request.destination_bucket().as_str())
            .destination_prefix(request.destination_prefix())
            .send()
            .await
            .map_err(|e| LogServiceError::ExportTaskRejected(e.to_string()))?;

        let task_id = output.task_id().ok_or_else(|| {
            LogServiceError::InvalidResponse(
                "CreateExportTask response did not include a task id".to_string(),
            )
        })?;

        Ok(TaskId::new(task_id).map_err(LogServiceError::InvalidResponse)?)
    }
}
