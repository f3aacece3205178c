//! Domain models and types for the PII profiler.
//!
//! This module contains the types the evaluation pipeline and the remote
//! column classifier exchange. Nothing here performs I/O.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated identifiers** ([`DatasetName`], [`DatasetId`])
//! - **Indicator groups** ([`IndicatorGroups`]) over the closed sets
//!   [`DirectIdentifier`], [`IndirectIdentifier`] and [`SpecialCategory`]
//! - **Dataset context** ([`DatasetContext`], [`Purpose`])
//! - **Profile catalog** ([`Profile`], [`ProfileId`], [`PROFILE_CATALOG`])
//! - **Column analysis** ([`ColumnAnalysis`], [`ColumnAssessment`], [`ColumnRisk`])
//! - **Error types** ([`ProfilerError`], [`ValidationError`], [`ClassifierError`])
//! - **Result type alias** ([`Result`])
//!
//! # Indicator groups
//!
//! Indicator sets are enum-indexed, so a flag outside the questionnaire
//! cannot be represented:
//!
//! ```rust
//! use pii_profiler::domain::{DirectIdentifier, IndicatorGroup};
//!
//! let (direct, unknown) =
//!     IndicatorGroup::<DirectIdentifier>::from_selected(["national_id", "a1_6", "shoe_size"]);
//! assert_eq!(direct.count(), 2);
//! assert_eq!(unknown, vec!["shoe_size".to_string()]);
//! ```

pub mod column;
pub mod context;
pub mod dataset;
pub mod errors;
pub mod ids;
pub mod indicators;
pub mod profile;
pub mod result;

// Re-export commonly used types for convenience
pub use column::{ColumnAnalysis, ColumnAssessment, ColumnRisk, RiskSummary};
pub use dataset::{DatasetContext, Purpose};
pub use errors::{ClassifierError, ProfilerError, ValidationError, ViolatedField};
pub use ids::{DatasetId, DatasetName};
pub use indicators::{
    DirectIdentifier, GroupKind, Indicator, IndicatorGroup, IndicatorGroups, IndirectIdentifier,
    SpecialCategory,
};
pub use profile::{MinimumK, Profile, ProfileId, RiskLevel, PROFILE_CATALOG};
pub use result::Result;
