//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the profiler configuration file.

use crate::cli::{EXIT_INVALID, EXIT_OK};
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

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is not valid");
                println!("   Error: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Output Format: {}", config.application.output_format);

        let classifier = &config.classifier;
        if classifier.enabled {
            println!("  Classifier: enabled");
            println!("  Classifier URL: {}", classifier.base_url);
            println!("  Dataset Function: {}", classifier.dataset_function);
            println!("  Columns Function: {}", classifier.columns_function);
            println!("  Preview Mode: {}", classifier.preview);
            println!("  API Token: configured");
            println!("  Timeout: {}s", classifier.timeout_seconds);
            println!("  Max Retries: {}", classifier.retry.max_retries);
        } else {
            println!("  Classifier: disabled");
        }

        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(EXIT_OK)
    }
}
