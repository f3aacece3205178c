//! Evaluation pipeline
//!
//! Runs one manual evaluation end to end:
//!
//! 1. **Validate** the context fields (blocking, all violations together)
//! 2. **Resolve** the answer maps into typed indicator groups
//! 3. **Aggregate** each group into a count
//! 4. **Classify** the counts into a profile
//! 5. **Compose** the immutable [`AnalysisResult`]
//!
//! Every step is synchronous and pure apart from logging.

use super::classify::{matching_rule, Rule};
use super::compose::{compose, AnalysisResult};
use super::request::EvaluationRequest;
use super::validate::validate_request;
use crate::domain::{DatasetContext, IndicatorGroups, Result};
use crate::{log_evaluation_start, log_profile_assigned};

/// Result of [`evaluate`] with the details needed to explain it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The composed result
    pub result: AnalysisResult,
    /// Rule that decided the profile
    pub rule: &'static Rule,
    /// Answer keys that were not recognized and were ignored
    pub unknown_keys: Vec<String>,
}

/// Validates a raw request and evaluates it
///
/// # Errors
///
/// Returns [`ProfilerError::Validation`](crate::domain::ProfilerError::Validation)
/// when any precondition fails. Nothing is aggregated or classified in that
/// case.
///
/// # Example
///
/// ```
/// use pii_profiler::core::engine::evaluate;
/// use pii_profiler::core::request::EvaluationRequest;
/// use pii_profiler::domain::ProfileId;
///
/// let request = EvaluationRequest::new()
///     .with_dataset_name("clientes")
///     .with_volume(10_000u64)
///     .with_purpose("aggregate_analysis")
///     .with_direct(["national_id", "email"])
///     .with_indirect(["postal_code"]);
///
/// let evaluation = evaluate(&request).unwrap();
/// assert_eq!(evaluation.result.profile.id, ProfileId::P3);
/// ```
pub fn evaluate(request: &EvaluationRequest) -> Result<Evaluation> {
    let context = validate_request(request).map_err(|e| {
        tracing::warn!(violations = e.violations.len(), "Evaluation blocked by validation");
        e
    })?;

    let resolved = request.resolve_indicators();
    if !resolved.unknown_keys.is_empty() {
        tracing::warn!(
            count = resolved.unknown_keys.len(),
            keys = ?resolved.unknown_keys,
            "Ignoring unknown indicator keys"
        );
    }

    let (result, rule) = evaluate_groups(context, resolved.groups);

    Ok(Evaluation {
        result,
        rule,
        unknown_keys: resolved.unknown_keys,
    })
}

/// Evaluates an already validated context and typed answers
///
/// Returns the composed result and the rule that matched.
pub fn evaluate_groups(
    context: DatasetContext,
    groups: IndicatorGroups,
) -> (AnalysisResult, &'static Rule) {
    log_evaluation_start!(context.dataset_name, context.purpose);

    let result = compose(context, groups);
    let rule = matching_rule(&result.counts);
    let counts = &result.counts;

    log_profile_assigned!(
        result.context.dataset_name,
        result.profile.id,
        rule.priority,
        (counts.direct, counts.indirect, counts.special)
    );

    (result, rule)
}
