//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output for interactive use
//! - JSON file logging with rotation
//!
//! Dataset contents are never logged. Events carry dataset names, counts,
//! profile ids and column counts only.
//!
//! # Example
//!
//! ```no_run
//! use pii_profiler::logging::init_logging;
//! use pii_profiler::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Profiler started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a manual evaluation
///
/// # Example
///
/// ```no_run
/// use pii_profiler::log_evaluation_start;
/// use pii_profiler::domain::ids::DatasetName;
///
/// let name = DatasetName::new("clientes").unwrap();
/// log_evaluation_start!(&name, "aggregate_analysis");
/// ```
#[macro_export]
macro_rules! log_evaluation_start {
    ($dataset_name:expr, $purpose:expr) => {
        tracing::info!(
            dataset = %$dataset_name,
            purpose = %$purpose,
            "Starting evaluation"
        );
    };
}

/// Log the profile assigned to a dataset
///
/// # Example
///
/// ```no_run
/// use pii_profiler::log_profile_assigned;
///
/// log_profile_assigned!("clientes", "P3", 5, (2, 1, 0));
/// ```
#[macro_export]
macro_rules! log_profile_assigned {
    ($dataset_name:expr, $profile_id:expr, $rule:expr, ($direct:expr, $indirect:expr, $special:expr)) => {
        tracing::info!(
            dataset = %$dataset_name,
            profile = %$profile_id,
            rule = $rule,
            direct = $direct,
            indirect = $indirect,
            special = $special,
            "Profile assigned"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pii_profiler::log_error_with_context;
/// use pii_profiler::domain::ProfilerError;
///
/// let error = ProfilerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log a retry attempt
///
/// # Example
///
/// ```no_run
/// use pii_profiler::log_retry_attempt;
///
/// log_retry_attempt!(2, 3, "Connection timeout");
/// ```
#[macro_export]
macro_rules! log_retry_attempt {
    ($attempt:expr, $max_attempts:expr, $reason:expr) => {
        tracing::warn!(
            attempt = $attempt,
            max_attempts = $max_attempts,
            reason = $reason,
            "Retrying operation"
        );
    };
}
