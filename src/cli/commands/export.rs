//! Export command implementation
//!
//! This module implements the `export` command: one independent invocation
//! per configured log group, each printing its structured outcome.

use crate::adapters::aws::load_sdk_config;
use crate::adapters::cloudwatch::CloudWatchLogsSource;
use crate::adapters::s3::S3WatermarkStore;
use crate::config::{load_config, LogshipConfig};
use crate::core::export::{ExportOrchestrator, ExportOutcome, Invocation};
use clap::Args;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override log group(s) to export (comma-separated)
    #[arg(long)]
    pub log_group: Option<String>,

    /// Override destination bucket
    #[arg(long)]
    pub bucket: Option<String>,

    /// Override service region
    #[arg(long)]
    pub region: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // A missing config file is fine when the invocation parameters all
        // arrive as CLI flags; a present-but-broken one is still an error.
        let mut config = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!(error = %e, "Configuration loading failed");
                    eprintln!("Configuration loading failed: {e}");
                    return Ok(2);
                }
            }
        } else {
            tracing::debug!(
                config_path = %config_path,
                "No configuration file; using CLI parameters only"
            );
            LogshipConfig::default()
        };

        // Apply CLI overrides
        if let Some(groups) = &self.log_group {
            let groups: Vec<String> = groups
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            tracing::info!(log_groups = ?groups, "Overriding log groups from CLI");
            config.export.log_groups = groups;
        }
        if let Some(bucket) = &self.bucket {
            tracing::info!(bucket = %bucket, "Overriding destination bucket from CLI");
            config.export.destination_bucket = bucket.clone();
        }
        if let Some(region) = &self.region {
            tracing::info!(region = %region, "Overriding region from CLI");
            config.export.region = region.clone();
        }

        let export = &config.export;

        // One invocation per group; with no groups configured at all, a
        // single failure-shaped outcome is still produced so the caller
        // always gets a response.
        let groups: Vec<Option<String>> = if export.log_groups.is_empty() {
            vec![None]
        } else {
            export.log_groups.iter().cloned().map(Some).collect()
        };

        let mut exported = 0usize;
        let mut skipped = 0usize;
        let mut failed = 0usize;

        for group in &groups {
            let outcome = run_invocation(
                group.as_deref(),
                non_empty(&export.destination_bucket),
                non_empty(&export.region),
                &export.watermark_prefix,
            )
            .await;

            match &outcome {
                ExportOutcome::Exported { .. } => exported += 1,
                ExportOutcome::Skipped { .. } => skipped += 1,
                ExportOutcome::Failed { .. } => failed += 1,
            }

            println!("{}", serde_json::to_string(&outcome.to_response())?);
        }

        println!();
        if failed > 0 {
            println!("⚠️  Export completed with failures: {exported} exported, {skipped} skipped, {failed} failed");
        } else {
            println!("✅ Export completed: {exported} exported, {skipped} skipped");
        }

        Ok(if failed > 0 { 1 } else { 0 })
    }
}

/// Runs one independent invocation end to end
///
/// Clients are built per invocation, mirroring the independence of
/// scheduled runs; validation happens before any client exists, so a
/// rejected invocation makes no external calls.
async fn run_invocation(
    log_group: Option<&str>,
    bucket: Option<&str>,
    region: Option<&str>,
    watermark_prefix: &str,
) -> ExportOutcome {
    let invocation = match Invocation::from_parts(log_group, bucket, region) {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::error!(error = %e, "Invocation rejected");
            return ExportOutcome::failed(&e);
        }
    };

    let sdk_config = load_sdk_config(invocation.region()).await;
    let log_source = Arc::new(CloudWatchLogsSource::new(&sdk_config));
    let watermark_store = Arc::new(S3WatermarkStore::with_key_prefix(
        &sdk_config,
        invocation.destination_bucket().clone(),
        watermark_prefix,
    ));

    ExportOrchestrator::new(log_source, watermark_store)
        .run(&invocation)
        .await
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            log_group: None,
            bucket: None,
            region: None,
        };

        assert!(args.log_group.is_none());
        assert!(args.bucket.is_none());
        assert!(args.region.is_none());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("bucket"), Some("bucket"));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
    }

    #[tokio::test]
    async fn test_run_invocation_missing_parameters_fails_closed() {
        let outcome = run_invocation(None, None, None, "export-watermarks/").await;
        assert!(outcome.is_failed());
        assert_eq!(outcome.status(), 500);
    }
}
