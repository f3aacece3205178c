//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_FATAL, EXIT_INVALID, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "profiler.toml")]
    pub output: String,

    /// Include comments explaining every option
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

        println!("📝 Initializing PII Profiler configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_INVALID);
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
                println!("  1. Manual evaluation needs no further setup:");
                println!("     pii-profiler evaluate --dataset-name <name> --volume <n> --purpose <purpose>");
                println!("  2. For column classification, edit {}:", self.output);
                println!("     - Set [classifier] enabled = true and base_url");
                println!("     - Put PROFILER_TOKEN=<token> in a .env file");
                println!("  3. Validate configuration: pii-profiler validate-config");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# PII Profiler Configuration File

environment = "development"  # development | staging | production

[application]
log_level = "info"
output_format = "table"  # table | json

[classifier]
enabled = false
base_url = "https://your-stack.example.com"
dataset_function = "analizarDatasetAutomaticoPython"
columns_function = "analizarColumnasPII"
# api_token = "${PROFILER_TOKEN}"
timeout_seconds = 60

[classifier.retry]
max_retries = 3  # total requests, first attempt included
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# PII Profiler Configuration File
#
# The manual evaluation (pii-profiler evaluate) works without this file.
# It is only required for remote column classification.
#
# Values can reference environment variables with ${VAR_NAME}. Any setting
# can also be overridden with PROFILER_<SECTION>_<KEY>, for example
# PROFILER_CLASSIFIER_BASE_URL or PROFILER_APPLICATION_LOG_LEVEL.

# Runtime environment (development, staging, production)
# Production requires https:// and TLS verification for the classifier.
environment = "development"

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Default report format (table, json)
output_format = "table"

# ============================================================================
# Remote Column Classifier
# ============================================================================
[classifier]
# Enable the classify-columns command
enabled = false

# Base URL of the platform API
base_url = "https://your-stack.example.com"

# Function that classifies every column of a dataset (takes dataset_rid)
dataset_function = "analizarDatasetAutomaticoPython"

# Function that classifies a typed column list
# (takes column_names_csv and column_types_csv)
columns_function = "analizarColumnasPII"

# Run the functions in preview mode
preview = false

# Bearer token. Keep it out of this file: reference an environment variable.
# api_token = "${PROFILER_TOKEN}"

# Request timeout in seconds
timeout_seconds = 60

# TLS certificate verification (cannot be disabled in production)
tls_verify = true

[classifier.retry]
# Connection failures, timeouts and 5xx responses are retried.
# max_retries is the TOTAL number of requests, the first attempt included:
# 3 means the original request plus at most 2 retries. 1 disables retrying.
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

# ============================================================================
# Logging
# ============================================================================
[logging]
# Write JSON logs to files in addition to the console
local_enabled = false
local_path = "./logs"

# Rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_str;
    use tempfile::TempDir;

    #[test]
    fn test_generated_configs_are_valid() {
        let minimal = load_config_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(!minimal.classifier.enabled);

        let commented = load_config_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert_eq!(commented.classifier.columns_function, "analizarColumnasPII");
    }

    #[test]
    fn test_templates_explain_max_retries_counts_every_request() {
        assert!(InitArgs::generate_minimal_config()
            .contains("max_retries = 3  # total requests, first attempt included"));
        assert!(InitArgs::generate_config_with_examples()
            .contains("max_retries is the TOTAL number of requests, the first attempt included"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("profiler.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_INVALID);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&output).unwrap().contains("[classifier]"));
    }
}
