//! Invocation outcomes
//!
//! Every invocation resolves to exactly one of three outcomes: an export
//! task was submitted, there was nothing new to export, or the invocation
//! failed. The outcome serializes to the structured response contract
//! consumed by whatever triggered the invocation.

use crate::domain::ids::{LogGroupName, TaskId};
use crate::domain::time::EpochMillis;
use crate::domain::LogshipError;
use serde::{Deserialize, Serialize};

/// Result of one export invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// An export task was submitted for `[from, to]`
    Exported {
        message: String,
        task_id: TaskId,
        from: EpochMillis,
        to: EpochMillis,
    },
    /// No activity newer than the watermark; nothing was submitted
    Skipped { message: String },
    /// Validation or submission failed; the watermark was left untouched
    Failed { message: String, error: String },
}

impl ExportOutcome {
    /// Outcome for a successfully submitted export task
    pub fn exported(
        group: &LogGroupName,
        task_id: TaskId,
        from: EpochMillis,
        to: EpochMillis,
    ) -> Self {
        Self::Exported {
            message: format!("Log export task created for {group}"),
            task_id,
            from,
            to,
        }
    }

    /// Outcome for an invocation that found no new activity
    pub fn skipped(group: &LogGroupName) -> Self {
        Self::Skipped {
            message: format!("No new logs detected for {group}"),
        }
    }

    /// Outcome for a failed invocation
    pub fn failed(error: &LogshipError) -> Self {
        Self::Failed {
            message: "Export invocation failed".to_string(),
            error: error.to_string(),
        }
    }

    /// HTTP-style status code of the outcome
    pub fn status(&self) -> u16 {
        match self {
            Self::Exported { .. } => 200,
            Self::Skipped { .. } => 204,
            Self::Failed { .. } => 500,
        }
    }

    /// True when the invocation failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Converts the outcome into its wire-shaped response
    pub fn to_response(&self) -> InvocationResponse {
        match self {
            Self::Exported {
                message,
                task_id,
                from,
                to,
            } => InvocationResponse {
                status: 200,
                message: message.clone(),
                task_id: Some(task_id.clone()),
                from: Some(*from),
                to: Some(*to),
                error: None,
            },
            Self::Skipped { message } => InvocationResponse {
                status: 204,
                message: message.clone(),
                task_id: None,
                from: None,
                to: None,
                error: None,
            },
            Self::Failed { message, error } => InvocationResponse {
                status: 500,
                message: message.clone(),
                task_id: None,
                from: None,
                to: None,
                error: Some(error.clone()),
            },
        }
    }
}

/// Wire shape of an invocation outcome
///
/// Serializes as:
/// - exported: `{"status":200,"message":...,"taskId":...,"from":<ms>,"to":<ms>}`
/// - skipped:  `{"status":204,"message":...}`
/// - failed:   `{"status":500,"message":...,"error":...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<EpochMillis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<EpochMillis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> LogGroupName {
        LogGroupName::new("/aws/lambda/billing").unwrap()
    }

    #[test]
    fn test_exported_response_shape() {
        let outcome = ExportOutcome::exported(
            &group(),
            TaskId::new("task-123").unwrap(),
            EpochMillis::new(1_000),
            EpochMillis::new(1_999),
        );
        assert_eq!(outcome.status(), 200);

        let json = serde_json::to_value(outcome.to_response()).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["taskId"], "task-123");
        assert_eq!(json["from"], 1_000);
        assert_eq!(json["to"], 1_999);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("/aws/lambda/billing"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_skipped_response_shape() {
        let outcome = ExportOutcome::skipped(&group());
        assert_eq!(outcome.status(), 204);
        assert!(!outcome.is_failed());

        let json = serde_json::to_value(outcome.to_response()).unwrap();
        assert_eq!(json["status"], 204);
        assert!(json.get("taskId").is_none());
        assert!(json.get("from").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_response_shape() {
        let error = LogshipError::Validation("Missing required parameters: region".to_string());
        let outcome = ExportOutcome::failed(&error);
        assert_eq!(outcome.status(), 500);
        assert!(outcome.is_failed());

        let json = serde_json::to_value(outcome.to_response()).unwrap();
        assert_eq!(json["status"], 500);
        assert!(json["error"].as_str().unwrap().contains("region"));
        assert!(json.get("taskId").is_none());
    }
}
