//! Domain error types
//!
//! This module defines the error hierarchy for the profiler.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main profiler error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ProfilerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Evaluation request failed its preconditions
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote column classifier errors
    #[error("Column classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Malformed user input (answers file, CLI arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// A single violated precondition of a manual evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolatedField {
    /// Dataset name missing or blank after trimming
    #[error("dataset name is required")]
    DatasetName,

    /// Purpose of use missing or blank
    #[error("purpose of use is required")]
    PurposeMissing,

    /// Purpose of use not in the fixed enumeration
    #[error("unknown purpose of use '{0}'")]
    PurposeUnknown(String),

    /// Volume missing
    #[error("approximate volume is required")]
    VolumeMissing,

    /// Volume present but not a non-negative integer
    #[error("approximate volume must be a non-negative integer, got '{0}'")]
    VolumeInvalid(String),
}

/// Precondition failures collected before an evaluation runs
///
/// Holds every violated field so the caller can report them together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.violations))]
pub struct ValidationError {
    /// Violated preconditions, in form order
    pub violations: Vec<ViolatedField>,
}

impl ValidationError {
    /// Creates a validation error from a list of violations
    pub fn new(violations: Vec<ViolatedField>) -> Self {
        Self { violations }
    }

    /// Returns true if the given field was violated
    pub fn has(&self, field: &ViolatedField) -> bool {
        self.violations.contains(field)
    }
}

fn describe(violations: &[ViolatedField]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Remote column classifier errors
///
/// Errors that occur when talking to the external classification function.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Remote classification is disabled in the configuration
    #[error("Remote column classifier is disabled")]
    Disabled,

    /// The request was rejected before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to connect to the classifier endpoint
    #[error("Failed to connect to classifier: {0}")]
    ConnectionFailed(String),

    /// Token rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be decoded
    #[error("Invalid response from classifier: {0}")]
    InvalidResponse(String),

    /// The function ran but reported `success = false`
    #[error("Classifier reported failure: {0}")]
    Unsuccessful(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl ClassifierError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::ServerError { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ProfilerError {
    fn from(err: std::io::Error) -> Self {
        ProfilerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ProfilerError {
    fn from(err: serde_json::Error) -> Self {
        ProfilerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ProfilerError {
    fn from(err: toml::de::Error) -> Self {
        ProfilerError::Configuration(format!("TOML parse error: {err}"))
    }
}
