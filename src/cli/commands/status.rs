//! Status command implementation
//!
//! This module implements the `status` command for displaying the stored
//! watermark per configured log group.

use crate::adapters::aws::load_sdk_config;
use crate::adapters::s3::S3WatermarkStore;
use crate::adapters::traits::WatermarkStore;
use crate::config::load_config;
use crate::domain::ids::{BucketName, LogGroupName};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Filter by log group
    #[arg(long)]
    pub log_group: Option<String>,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        println!("📊 Export Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        let bucket = match BucketName::new(config.export.destination_bucket.clone()) {
            Ok(b) => b,
            Err(e) => {
                println!("❌ Invalid destination bucket");
                println!("   Error: {}", e);
                return Ok(2);
            }
        };

        let sdk_config = load_sdk_config(&config.export.region).await;
        let store =
            S3WatermarkStore::with_key_prefix(&sdk_config, bucket, &config.export.watermark_prefix);

        // Filter groups if requested
        let groups: Vec<&String> = config
            .export
            .log_groups
            .iter()
            .filter(|g| self.log_group.as_ref().map(|f| f == *g).unwrap_or(true))
            .collect();

        if groups.is_empty() {
            println!("No log groups match the specified filter.");
            return Ok(0);
        }

        println!(
            "{:<45} {:<22} {:<15}",
            "Log Group", "Last Export (UTC)", "Watermark (ms)"
        );
        println!("{}", "-".repeat(85));

        for group in groups {
            let name = match LogGroupName::new(group.clone()) {
                Ok(n) => n,
                Err(e) => {
                    println!("{:<45} ⚠️  {}", group, e);
                    continue;
                }
            };

            match store.load(&name).await {
                Ok(Some(watermark)) => {
                    let last_export = watermark
                        .last_export_time
                        .to_datetime()
                        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_else(|| "invalid".to_string());
                    println!(
                        "{:<45} {:<22} {:<15}",
                        group, last_export, watermark.last_export_time
                    );
                }
                Ok(None) => {
                    println!("{:<45} {:<22} {:<15}", group, "Never", "-");
                }
                Err(e) => {
                    println!("{:<45} ⚠️  {}", group, e);
                }
            }
        }

        println!();
        Ok(0)
    }
}
