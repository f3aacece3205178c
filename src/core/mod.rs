//! Core evaluation logic for the PII profiler.
//!
//! # Modules
//!
//! - [`request`] - Raw questionnaire input (answers files, flags)
//! - [`validate`] - Blocking preconditions on the dataset context
//! - [`aggregate`] - Per-group counts of flags answered `true`
//! - [`classify`] - Ordered rule table mapping counts to a profile
//! - [`compose`] - Immutable analysis result
//! - [`engine`] - End-to-end evaluation pipeline
//! - [`techniques`] - Anonymization technique catalog and column guidance
//! - [`report`] - Console and JSON rendering of results
//!
//! # Evaluation Workflow
//!
//! 1. **Validate**: dataset name, purpose and volume; all violations at once
//! 2. **Aggregate**: count the flags set in each indicator group
//! 3. **Classify**: first matching rule decides the profile (P0–P6)
//! 4. **Compose**: bundle context, answers, counts and profile
//! 5. **Report**: render for the reader
//!
//! # Example
//!
//! ```rust
//! use pii_profiler::core::engine::evaluate;
//! use pii_profiler::core::report::ResultsReport;
//! use pii_profiler::core::request::EvaluationRequest;
//!
//! # fn example() -> pii_profiler::domain::Result<()> {
//! let request = EvaluationRequest::new()
//!     .with_dataset_name("pacientes")
//!     .with_volume(120_000u64)
//!     .with_purpose("detailed_internal_analysis")
//!     .with_special(["health"]);
//!
//! let evaluation = evaluate(&request)?;
//! let report = ResultsReport::new().with_manual(evaluation.result, evaluation.rule);
//! println!("{}", report.format_console(true));
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod classify;
pub mod compose;
pub mod engine;
pub mod report;
pub mod request;
pub mod techniques;
pub mod validate;
