//! Error context extension trait
//!
//! Provides `.context()` and `.with_context()` on `Result<T, E>` where `E`
//! converts into [`ProfilerError`], so library code can attach context without
//! falling back to `anyhow`.
//!
//! # Examples
//!
//! ```rust
//! use pii_profiler::domain::Result;
//! use pii_profiler::domain::context::ResultExt;
//!
//! fn read_answers(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read answers file: {}", path))
//! }
//! ```

use crate::domain::errors::ProfilerError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
///
/// The wrapped error is flattened into [`ProfilerError::Other`] carrying
/// `"{context}: {original}"`.
pub trait ResultExt<T> {
    /// Add context to an error (evaluated eagerly)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error using a closure (evaluated only on error)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ProfilerError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| {
            let base_error = e.into();
            ProfilerError::Other(format!("{context}: {base_error}"))
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let base_error = e.into();
            let context = f();
            ProfilerError::Other(format!("{context}: {base_error}"))
        })
    }
}
