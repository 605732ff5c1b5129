//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "logship.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing logship configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your log groups and bucket", self.output);
                println!("  2. Make sure AWS credentials are available (environment,");
                println!("     shared profile, or instance role)");
                println!("  3. Validate configuration: logship validate-config");
                println!("  4. Run an export: logship export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# logship configuration file
# Incremental CloudWatch Logs to S3 export

[application]
log_level = "info"

[export]
# Log groups to export, one invocation each
log_groups = ["/aws/lambda/my-function"]
destination_bucket = "my-log-archive"
region = "us-east-1"

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# logship configuration file
# Incremental CloudWatch Logs to S3 export
#
# Each log group listed below gets its own invocation per run. A watermark
# document per group is kept in the destination bucket, so only logs newer
# than the last successful export are exported again.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[export]
# Log groups to export, one invocation each
log_groups = [
    "/aws/lambda/my-function",
    "/ecs/web",
]

# Bucket that receives exported log data and the watermark documents.
# Values can reference environment variables, e.g. "${LOGSHIP_BUCKET}".
destination_bucket = "my-log-archive"

# Service region for both CloudWatch Logs and S3
region = "us-east-1"

# Key prefix for per-group watermark documents (must end with '/')
watermark_prefix = "export-watermarks/"

[logging]
# Write JSON logs to rotating local files in addition to the console
local_enabled = false
local_path = "logs"
# Rotation: daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("logship.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);
        assert!(output.exists());

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("[export]"));
        assert!(contents.contains("destination_bucket"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("logship.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("logship.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: true,
            force: true,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("watermark_prefix"));
    }

    #[test]
    fn test_generated_configs_parse() {
        let minimal: toml::Value = toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(minimal.get("export").is_some());

        let full: toml::Value =
            toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert!(full.get("logging").is_some());
    }
}
