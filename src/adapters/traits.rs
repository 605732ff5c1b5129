//! Service capability traits
//!
//! This module defines the two narrow interfaces the orchestrator depends
//! on. The AWS implementations live in [`crate::adapters::cloudwatch`] and
//! [`crate::adapters::s3`]; tests use in-memory fakes.

use crate::core::export::request::ExportRequest;
use crate::core::state::Watermark;
use crate::domain::ids::{LogGroupName, TaskId};
use crate::domain::time::EpochMillis;
use crate::domain::Result;
use async_trait::async_trait;

/// Read-and-submit interface to the log service
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Looks up the creation time of a log group
    ///
    /// Returns `Ok(None)` when no group with that exact name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup call fails.
    async fn group_creation_time(&self, group: &LogGroupName) -> Result<Option<EpochMillis>>;

    /// Returns the last event timestamp of the most recently active stream
    ///
    /// Returns `Ok(None)` when the group has no streams, or its most
    /// recent stream carries no event timestamp yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream listing fails.
    async fn latest_event_timestamp(&self, group: &LogGroupName) -> Result<Option<EpochMillis>>;

    /// Submits an asynchronous export task
    ///
    /// The task copies the requested interval into the destination bucket;
    /// completion is not awaited or tracked.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the task.
    async fn create_export_task(&self, request: &ExportRequest) -> Result<TaskId>;
}

/// Watermark persistence interface
#[async_trait]
pub trait WatermarkStore: Send + Sync {
    /// Loads the watermark for a group
    ///
    /// Returns `Ok(None)` when no watermark document exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the document exists but cannot be read or
    /// parsed; callers treat that as a corrupt record.
    async fn load(&self, group: &LogGroupName) -> Result<Option<Watermark>>;

    /// Saves the watermark for a group, overwriting any prior document
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn save(&self, group: &LogGroupName, watermark: &Watermark) -> Result<()>;
}
