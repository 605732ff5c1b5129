// logship - CloudWatch Logs to S3 export tool
// Copyright (c) 2025 Logship Contributors
// Licensed under the MIT License

//! # logship - Incremental CloudWatch Logs to S3 export
//!
//! logship periodically exports logs from CloudWatch Logs log groups to an
//! S3 bucket, tracking a per-group export watermark so each run only
//! exports logs newer than the last successful export. It is meant to be
//! triggered on a schedule and runs to completion per invocation.
//!
//! ## Overview
//!
//! Each invocation runs one linear sequence per log group:
//!
//! 1. Resolve the starting watermark (stored document, else log group
//!    creation time, else 24 hours before now)
//! 2. Check whether any stream has events newer than the watermark
//! 3. If so, submit an asynchronous export task for
//!    `[watermark, now - 1 ms]`
//! 4. Record `now` as the new watermark only after the task was accepted
//!
//! The export itself is performed by the log service; logship only submits
//! the task and never awaits its completion.
//!
//! ## Architecture
//!
//! logship follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Orchestration logic, watermark model, outcomes
//! - [`adapters`] - CloudWatch Logs and S3 clients behind capability traits
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logship::adapters::aws::load_sdk_config;
//! use logship::adapters::cloudwatch::CloudWatchLogsSource;
//! use logship::adapters::s3::S3WatermarkStore;
//! use logship::core::export::{ExportOrchestrator, Invocation};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let invocation = Invocation::from_parts(
//!         Some("/aws/lambda/billing"),
//!         Some("log-archive"),
//!         Some("us-east-1"),
//!     )
//!     .expect("invocation parameters");
//!
//!     let sdk_config = load_sdk_config(invocation.region()).await;
//!     let orchestrator = ExportOrchestrator::new(
//!         Arc::new(CloudWatchLogsSource::new(&sdk_config)),
//!         Arc::new(S3WatermarkStore::new(
//!             &sdk_config,
//!             invocation.destination_bucket().clone(),
//!         )),
//!     );
//!
//!     let outcome = orchestrator.run(&invocation).await;
//!     println!("{}", serde_json::to_string(&outcome.to_response()).unwrap());
//! }
//! ```
//!
//! ## Outcomes
//!
//! Every invocation returns exactly one structured outcome; no error
//! escapes the orchestrator:
//!
//! - `{"status": 200, "message": ..., "taskId": ..., "from": ..., "to": ...}`
//! - `{"status": 204, "message": ...}` when there is nothing new to export
//! - `{"status": 500, "message": ..., "error": ...}` on validation or
//!   submission failure
//!
//! ## Logging
//!
//! logship uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(log_group = "/aws/lambda/billing", "Starting export");
//! warn!("No watermark found; starting from log group creation time");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
