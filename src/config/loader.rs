//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LogshipConfig;
use crate::domain::errors::LogshipError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into LogshipConfig
/// 4. Applies environment variable overrides (`LOGSHIP_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use logship::config::loader::load_config;
///
/// let config = load_config("logship.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LogshipConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LogshipError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LogshipError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LogshipConfig = toml::from_str(&contents)
        .map_err(|e| LogshipError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LogshipError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched, so example values in comments don't
/// have to exist in the environment.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LogshipError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the LOGSHIP_* prefix
///
/// Variables follow the pattern LOGSHIP_<SECTION>_<KEY>, for example
/// LOGSHIP_EXPORT_REGION or LOGSHIP_APPLICATION_LOG_LEVEL.
fn apply_env_overrides(config: &mut LogshipConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LOGSHIP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("LOGSHIP_EXPORT_LOG_GROUPS") {
        config.export.log_groups = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Ok(val) = std::env::var("LOGSHIP_EXPORT_DESTINATION_BUCKET") {
        config.export.destination_bucket = val;
    }
    if let Ok(val) = std::env::var("LOGSHIP_EXPORT_REGION") {
        config.export.region = val;
    }
    if let Ok(val) = std::env::var("LOGSHIP_EXPORT_WATERMARK_PREFIX") {
        config.export.watermark_prefix = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LOGSHIP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LOGSHIP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LOGSHIP_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
