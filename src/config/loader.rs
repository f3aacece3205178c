//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ProfilerConfig;
use super::secret::secret_string;
use crate::domain::errors::ProfilerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ProfilerConfig
/// 4. Applies environment variable overrides (PROFILER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use pii_profiler::config::loader::load_config;
///
/// let config = load_config("profiler.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ProfilerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ProfilerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ProfilerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn load_config_str(contents: &str) -> Result<ProfilerConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ProfilerConfig = toml::from_str(&contents)
        .map_err(|e| ProfilerError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ProfilerError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the configuration file if it exists, otherwise defaults
///
/// Environment overrides still apply when no file is present, so the
/// classifier can be configured from the environment alone.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ProfilerConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
        load_config_str("")
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ProfilerError::Configuration(format!("Invalid placeholder pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
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
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ProfilerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PROFILER_* prefix
///
/// Environment variables follow the pattern: PROFILER_<SECTION>_<KEY>
/// For example: PROFILER_CLASSIFIER_BASE_URL, PROFILER_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut ProfilerConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PROFILER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("PROFILER_APPLICATION_OUTPUT_FORMAT") {
        if let Ok(format) = val.parse() {
            config.application.output_format = format;
        }
    }

    // Classifier overrides
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_ENABLED") {
        config.classifier.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_BASE_URL") {
        config.classifier.base_url = val;
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_API_TOKEN") {
        config.classifier.api_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_DATASET_FUNCTION") {
        config.classifier.dataset_function = val;
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_COLUMNS_FUNCTION") {
        config.classifier.columns_function = val;
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_PREVIEW") {
        config.classifier.preview = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.classifier.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("PROFILER_CLASSIFIER_TLS_VERIFY") {
        config.classifier.tls_verify = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PROFILER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("PROFILER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PROFILER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
