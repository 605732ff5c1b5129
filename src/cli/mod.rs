//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for logship using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// logship - CloudWatch Logs to S3 export tool
#[derive(Parser, Debug)]
#[command(name = "logship")]
#[command(version, about, long_about = None)]
#[command(author = "Logship Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "logship.toml", env = "LOGSHIP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOGSHIP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export new logs from the configured log groups to S3
    Export(commands::export::ExportArgs),

    /// Show the stored watermark per configured log group
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["logship", "export"]);
        assert_eq!(cli.config, "logship.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["logship", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["logship", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "logship",
            "export",
            "--log-group",
            "/ecs/web",
            "--bucket",
            "archive",
            "--region",
            "eu-west-1",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.log_group, Some("/ecs/web".to_string()));
                assert_eq!(args.bucket, Some("archive".to_string()));
                assert_eq!(args.region, Some("eu-west-1".to_string()));
            }
            _ => panic!("Expected export command"),
        }
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["logship", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["logship", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["logship", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
