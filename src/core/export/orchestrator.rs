//! Export orchestrator - main orchestration for one invocation
//!
//! This module runs the full export sequence for a single log group:
//! resolve the starting watermark, check for activity newer than it,
//! submit an export task when there is any, and record the new watermark.
//! Every path converts to a structured [`ExportOutcome`]; no error escapes
//! to the caller.

use crate::adapters::traits::{LogSource, WatermarkStore};
use crate::core::clock::{Clock, SystemClock};
use crate::core::export::invocation::Invocation;
use crate::core::export::outcome::ExportOutcome;
use crate::core::export::request::ExportRequest;
use crate::core::state::Watermark;
use crate::domain::ids::LogGroupName;
use crate::domain::time::EpochMillis;
use std::sync::Arc;

/// Hours to look back when neither a watermark nor a group creation time
/// is available
const DEFAULT_LOOKBACK_HOURS: i64 = 24;

/// Export orchestrator
///
/// Holds the two service capabilities and a clock; one instance can serve
/// any number of invocations, each independent of the last.
pub struct ExportOrchestrator {
    log_source: Arc<dyn LogSource>,
    watermark_store: Arc<dyn WatermarkStore>,
    clock: Arc<dyn Clock>,
}

impl ExportOrchestrator {
    /// Creates an orchestrator using the system wall clock
    pub fn new(log_source: Arc<dyn LogSource>, watermark_store: Arc<dyn WatermarkStore>) -> Self {
        Self::with_clock(log_source, watermark_store, Arc::new(SystemClock))
    }

    /// Creates an orchestrator with an explicit clock
    pub fn with_clock(
        log_source: Arc<dyn LogSource>,
        watermark_store: Arc<dyn WatermarkStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            log_source,
            watermark_store,
            clock,
        }
    }

    /// Runs one export invocation
    ///
    /// The sequence is linear:
    /// 1. Resolve the starting watermark (stored record, else group
    ///    creation time, else `now - 24h`).
    /// 2. Capture `now` once; it becomes both the export upper bound and
    ///    the new watermark.
    /// 3. Check the most recently active stream; any failure counts as
    ///    "no new activity".
    /// 4. Submit the export task for `[start, now - 1]` when activity is
    ///    newer than the start.
    /// 5. Persist `now` as the new watermark only after the task was
    ///    accepted; a failed write is logged but does not fail the
    ///    invocation.
    pub async fn run(&self, invocation: &Invocation) -> ExportOutcome {
        let group = invocation.log_group();

        let start = self.resolve_start_time(group).await;
        let now = self.clock.now_millis();

        if !self.has_new_events(group, start).await {
            tracing::info!(
                log_group = %group,
                last_export_time = %start,
                "No new logs detected; skipping export task creation"
            );
            return ExportOutcome::skipped(group);
        }

        let request = ExportRequest::new(invocation, start, now);
        match self.log_source.create_export_task(&request).await {
            Ok(task_id) => {
                tracing::info!(
                    log_group = %group,
                    task_id = %task_id,
                    from = %request.from(),
                    to = %request.to(),
                    destination_prefix = %request.destination_prefix(),
                    "Export task created"
                );
                self.record_watermark(group, now).await;
                ExportOutcome::exported(group, task_id, request.from(), request.to())
            }
            Err(e) => {
                tracing::error!(
                    log_group = %group,
                    error = %e,
                    "Failed to create export task; watermark left unchanged"
                );
                ExportOutcome::failed(&e)
            }
        }
    }

    /// Resolves the starting watermark with the three-tier fallback
    ///
    /// Stored record → group creation time → `now - 24h`. A corrupt or
    /// unreadable record skips the creation-time lookup and falls straight
    /// to the default, matching the stored record's unknown age.
    async fn resolve_start_time(&self, group: &LogGroupName) -> EpochMillis {
        match self.watermark_store.load(group).await {
            Ok(Some(watermark)) => {
                tracing::info!(
                    log_group = %group,
                    last_export_time = %watermark.last_export_time,
                    "Loaded watermark"
                );
                watermark.last_export_time
            }
            Ok(None) => {
                tracing::warn!(
                    log_group = %group,
                    "No watermark found; starting from log group creation time"
                );
                self.creation_time_or_default(group).await
            }
            Err(e) => {
                tracing::error!(
                    log_group = %group,
                    error = %e,
                    "Failed to read watermark; using default start time"
                );
                self.default_start_time()
            }
        }
    }

    async fn creation_time_or_default(&self, group: &LogGroupName) -> EpochMillis {
        match self.log_source.group_creation_time(group).await {
            Ok(Some(created)) => {
                tracing::info!(
                    log_group = %group,
                    creation_time = %created,
                    "Using log group creation time as start time"
                );
                created
            }
            Ok(None) => {
                tracing::warn!(log_group = %group, "Log group not found; using default start time");
                self.default_start_time()
            }
            Err(e) => {
                tracing::error!(
                    log_group = %group,
                    error = %e,
                    "Failed to look up log group creation time; using default start time"
                );
                self.default_start_time()
            }
        }
    }

    fn default_start_time(&self) -> EpochMillis {
        self.clock.now_millis().minus_hours(DEFAULT_LOOKBACK_HOURS)
    }

    /// Checks whether the group has events newer than `since`
    ///
    /// Fails closed: a lookup error means "no new activity", so a flaky
    /// stream listing skips one export instead of failing the invocation.
    async fn has_new_events(&self, group: &LogGroupName, since: EpochMillis) -> bool {
        match self.log_source.latest_event_timestamp(group).await {
            Ok(Some(latest)) => {
                tracing::info!(
                    log_group = %group,
                    latest_event_timestamp = %latest,
                    last_export_time = %since,
                    "Checked latest stream activity"
                );
                latest > since
            }
            Ok(None) => {
                tracing::info!(log_group = %group, "Log group has no streams with events");
                false
            }
            Err(e) => {
                tracing::error!(
                    log_group = %group,
                    error = %e,
                    "Failed to check for new logs; treating as no new activity"
                );
                false
            }
        }
    }

    /// Persists the new watermark after a successful submission
    ///
    /// A failed write is logged and absorbed: the task id was already
    /// handed out by the log service, so the invocation still reports
    /// success and the next run may re-export the same window.
    async fn record_watermark(&self, group: &LogGroupName, now: EpochMillis) {
        let watermark = Watermark::new(now);
        match self.watermark_store.save(group, &watermark).await {
            Ok(()) => {
                tracing::info!(
                    log_group = %group,
                    last_export_time = %now,
                    "Updated watermark"
                );
            }
            Err(e) => {
                tracing::warn!(
                    log_group = %group,
                    error = %e,
                    "Failed to persist watermark; next invocation may re-export this window"
                );
            }
        }
    }
}
