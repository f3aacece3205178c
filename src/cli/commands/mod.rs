//! CLI command implementations
//!
//! Each command returns its process exit code (see [`crate::cli`]).

pub mod catalog;
pub mod classify;
pub mod evaluate;
pub mod init;
pub mod validate;
