//! Configuration schema types
//!
//! This module defines the configuration structure for logship.

use crate::core::state::DEFAULT_KEY_PREFIX;
use serde::{Deserialize, Serialize};

/// Main logship configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogshipConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LogshipConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export configuration
///
/// Carries the invocation parameters: the log groups to export, the
/// destination bucket, and the region. `validate` requires all of them,
/// but the export command tolerates an incomplete config when the missing
/// values arrive as CLI flags, so the struct itself stays permissive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Log group names to export, one invocation each
    #[serde(default)]
    pub log_groups: Vec<String>,

    /// Destination bucket for exported data and watermark documents
    #[serde(default)]
    pub destination_bucket: String,

    /// Service region
    #[serde(default)]
    pub region: String,

    /// Key prefix for watermark documents in the destination bucket
    #[serde(default = "default_watermark_prefix")]
    pub watermark_prefix: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.log_groups.is_empty() {
            return Err("export.log_groups must list at least one log group".to_string());
        }
        if self.log_groups.iter().any(|g| g.trim().is_empty()) {
            return Err("export.log_groups must not contain empty names".to_string());
        }
        if self.destination_bucket.trim().is_empty() {
            return Err("export.destination_bucket is required".to_string());
        }
        if self.region.trim().is_empty() {
            return Err("export.region is required".to_string());
        }
        if !self.watermark_prefix.is_empty() && !self.watermark_prefix.ends_with('/') {
            return Err(format!(
                "export.watermark_prefix '{}' must end with '/'",
                self.watermark_prefix
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            log_groups: Vec::new(),
            destination_bucket: String::new(),
            region: String::new(),
            watermark_prefix: default_watermark_prefix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable the local rolling file layer
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// File rotation: daily, hourly, or never
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when logging.local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_watermark_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn valid_config() -> LogshipConfig {
        LogshipConfig {
            application: ApplicationConfig::default(),
            export: ExportConfig {
                log_groups: vec!["/aws/lambda/billing".to_string()],
                destination_bucket: "log-archive".to_string(),
                region: "us-east-1".to_string(),
                watermark_prefix: default_watermark_prefix(),
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test_case("trace")]
    #[test_case("debug")]
    #[test_case("info")]
    #[test_case("warn")]
    #[test_case("error")]
    fn test_valid_log_levels(level: &str) {
        let mut config = valid_config();
        config.application.log_level = level.to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_groups_rejected() {
        let mut config = valid_config();
        config.export.log_groups.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_log_group_rejected() {
        let mut config = valid_config();
        config.export.log_groups.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_bucket_rejected() {
        let mut config = valid_config();
        config.export.destination_bucket = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("destination_bucket"));
    }

    #[test]
    fn test_watermark_prefix_requires_trailing_slash() {
        let mut config = valid_config();
        config.export.watermark_prefix = "state".to_string();
        assert!(config.validate().is_err());

        config.export.watermark_prefix = "state/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test_case("daily"; "daily rotation")]
    #[test_case("hourly"; "hourly rotation")]
    #[test_case("never"; "no rotation")]
    fn test_valid_rotations(rotation: &str) {
        let mut config = valid_config();
        config.logging.local_rotation = rotation.to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_watermark_prefix() {
        let config = LogshipConfig::default();
        assert_eq!(config.export.watermark_prefix, "export-watermarks/");
    }
}
