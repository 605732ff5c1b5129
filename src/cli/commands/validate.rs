//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the logship configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a returned config is valid
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Region: {}", config.export.region);
        println!(
            "  Destination Bucket: {}",
            config.export.destination_bucket
        );
        println!("  Watermark Prefix: {}", config.export.watermark_prefix);
        println!("  Log Groups ({}):", config.export.log_groups.len());
        for group in &config.export.log_groups {
            println!("    - {group}");
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "enabled ({}, {} rotation)",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
