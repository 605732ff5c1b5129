//! Configuration management for logship.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! logship uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`LOGSHIP_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! log_groups = ["/aws/lambda/billing", "/ecs/web"]
//! destination_bucket = "log-archive"
//! region = "us-east-1"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use logship::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("logship.toml")?;
//! println!("Exporting {} log groups", config.export.log_groups.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, ExportConfig, LoggingConfig, LogshipConfig};
