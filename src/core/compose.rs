//! Result composition
//!
//! Bundles the validated context, the answers, their counts and the assigned
//! profile into one immutable record for display or serialization.

use super::aggregate::{aggregate, IndicatorCounts};
use super::classify::classify;
use crate::domain::{DatasetContext, IndicatorGroups, Profile};
use serde::Serialize;

/// Outcome of one manual evaluation
///
/// Holds no timestamps or generated ids: the same input always composes to
/// an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Validated dataset context
    pub context: DatasetContext,
    /// Answers as submitted, restricted to known indicators
    pub indicators: IndicatorGroups,
    /// Flags answered `true` per group
    pub counts: IndicatorCounts,
    /// Assigned profile
    pub profile: Profile,
}

impl AnalysisResult {
    /// Dataset name, for headings
    pub fn dataset_name(&self) -> &str {
        self.context.dataset_name.as_str()
    }
}

/// Assembles an [`AnalysisResult`]
///
/// Counts and profile are derived from `groups` here, so every result
/// satisfies `counts == aggregate(indicators)` and
/// `profile == classify(counts)`.
pub fn compose(context: DatasetContext, groups: IndicatorGroups) -> AnalysisResult {
    let counts = aggregate(&groups);
    let profile = classify(&counts);

    AnalysisResult {
        context,
        indicators: groups,
        counts,
        profile,
    }
}
