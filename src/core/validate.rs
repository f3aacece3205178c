//! Evaluation preconditions
//!
//! A manual evaluation may run only when the dataset name is present, a
//! purpose is selected from the fixed list, and the volume is a
//! non-negative integer. Every violation is collected so they can be shown
//! together; nothing is aggregated or classified while any remain.

use super::request::{EvaluationRequest, RawVolume};
use crate::domain::errors::{ValidationError, ViolatedField};
use crate::domain::{DatasetContext, DatasetId, DatasetName, Purpose};

/// Checks the context fields of a request and builds the validated context
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated field, in form order
/// (name, purpose, volume).
pub fn validate_request(request: &EvaluationRequest) -> Result<DatasetContext, ValidationError> {
    let mut violations = Vec::new();

    let dataset_name = match request.dataset_name.as_deref().map(DatasetName::new) {
        Some(Ok(name)) => Some(name),
        _ => {
            violations.push(ViolatedField::DatasetName);
            None
        }
    };

    let purpose = match request.purpose.as_deref().map(str::trim) {
        None | Some("") => {
            violations.push(ViolatedField::PurposeMissing);
            None
        }
        Some(raw) => match raw.parse::<Purpose>() {
            Ok(purpose) => Some(purpose),
            Err(_) => {
                violations.push(ViolatedField::PurposeUnknown(raw.to_string()));
                None
            }
        },
    };

    let volume = match request.volume.as_ref().map(parse_volume) {
        None | Some(Err(VolumeProblem::Missing)) => {
            violations.push(ViolatedField::VolumeMissing);
            None
        }
        Some(Err(VolumeProblem::Invalid(raw))) => {
            violations.push(ViolatedField::VolumeInvalid(raw));
            None
        }
        Some(Ok(volume)) => Some(volume),
    };

    match (dataset_name, purpose, volume) {
        (Some(dataset_name), Some(purpose), Some(volume)) if violations.is_empty() => {
            let mut context = DatasetContext::new(dataset_name, volume, purpose)
                .with_reidentification(request.requires_reidentification)
                .with_cross_source_linkage(request.cross_source_linkage);
            if let Some(id) = DatasetId::from_optional(request.dataset_id.as_deref()) {
                context = context.with_dataset_id(id);
            }
            Ok(context)
        }
        _ => Err(ValidationError::new(violations)),
    }
}

enum VolumeProblem {
    Missing,
    Invalid(String),
}

fn parse_volume(raw: &RawVolume) -> Result<u64, VolumeProblem> {
    match raw {
        RawVolume::Integer(value) => {
            u64::try_from(*value).map_err(|_| VolumeProblem::Invalid(value.to_string()))
        }
        RawVolume::Float(value) => {
            // u64::MAX as f64 rounds up to 2^64, which is out of range
            if value.is_finite() && *value >= 0.0 && value.fract() == 0.0 && *value < u64::MAX as f64 {
                Ok(*value as u64)
            } else {
                Err(VolumeProblem::Invalid(value.to_string()))
            }
        }
        RawVolume::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(VolumeProblem::Missing);
            }
            trimmed
                .parse::<u64>()
                .map_err(|_| VolumeProblem::Invalid(trimmed.to_string()))
        }
    }
}
