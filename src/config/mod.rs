//! Configuration management for the PII profiler.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The profiler reads `profiler.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PROFILER_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//!
//! The manual evaluation needs no configuration at all. Only the remote
//! column classifier does.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pii_profiler::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("profiler.toml")?;
//!
//! if config.classifier.enabled {
//!     println!("Classifier URL: {}", config.classifier.base_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and default output format
//! - [`ClassifierConfig`] - Remote classifier endpoint, functions, token, retries
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//!
//! [application]
//! log_level = "info"
//! output_format = "table"
//!
//! [classifier]
//! enabled = true
//! base_url = "https://your-stack.example.com"
//! api_token = "${PROFILER_TOKEN}"
//!
//! [classifier.retry]
//! max_retries = 3
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_str, load_or_default};
pub use schema::{
    ApplicationConfig, ClassifierConfig, Environment, LoggingConfig, OutputFormat,
    ProfilerConfig, RetryConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
