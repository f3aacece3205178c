// PII Profiler - PII/PSI risk profiling for datasets
// Copyright (c) 2025 Profiler Contributors
// Licensed under the MIT License

//! # PII Profiler
//!
//! Classifies a dataset into one of seven anonymization risk profiles
//! (P0-P6) from a short questionnaire, and optionally asks a remote
//! classifier to label its columns one by one.
//!
//! ## Overview
//!
//! This library provides:
//! - **Validating** the dataset context (name, purpose of use, volume)
//! - **Counting** direct identifiers, quasi-identifiers and special-category data
//! - **Classifying** the counts with an ordered rule table into a profile
//!   with a risk level and a minimum k for k-anonymity
//! - **Reporting** manual and column-level results as tables or JSON
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Evaluation pipeline, technique catalog, reports
//! - [`adapters`] - Remote column classifier
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use pii_profiler::core::engine::evaluate;
//! use pii_profiler::core::request::EvaluationRequest;
//! use pii_profiler::domain::ProfileId;
//!
//! # fn example() -> pii_profiler::domain::Result<()> {
//! let request = EvaluationRequest::new()
//!     .with_dataset_name("clientes")
//!     .with_volume(50_000u64)
//!     .with_purpose("machine_learning")
//!     .with_direct(["national_id", "email"])
//!     .with_indirect(["postal_code"]);
//!
//! let evaluation = evaluate(&request)?;
//! assert_eq!(evaluation.result.profile.id, ProfileId::P3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::ProfilerError`]. A failed precondition is a
//! [`domain::ValidationError`] listing every violated field:
//!
//! ```rust
//! use pii_profiler::core::engine::evaluate;
//! use pii_profiler::core::request::EvaluationRequest;
//! use pii_profiler::domain::ProfilerError;
//!
//! match evaluate(&EvaluationRequest::new()) {
//!     Err(ProfilerError::Validation(e)) => assert_eq!(e.violations.len(), 3),
//!     other => panic!("expected a validation error, got {other:?}"),
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
