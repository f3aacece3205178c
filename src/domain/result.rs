//! Result type alias for the profiler
//!
//! This module provides a convenient Result type alias that uses ProfilerError
//! as the error type.

use super::errors::ProfilerError;

/// Result type alias for profiler operations
///
/// # Examples
///
/// ```
/// use pii_profiler::domain::result::Result;
/// use pii_profiler::domain::errors::ProfilerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ProfilerError::InvalidInput("unknown format".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ProfilerError>;
