//! Dataset context captured alongside the indicator answers
//!
//! The context is informational: it is carried into the analysis result and
//! shown to the reviewer, but the profile classifier never reads it.

use super::ids::{DatasetId, DatasetName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intended purpose of use for the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Public release / sharing publicly
    PublicRelease,
    /// Aggregate or statistical analysis
    AggregateAnalysis,
    /// Detailed internal analysis
    DetailedInternalAnalysis,
    /// Operational or transactional use
    OperationalUse,
    /// Machine learning / AI
    MachineLearning,
}

impl Purpose {
    /// Every purpose, in the order the questionnaire offers them
    pub const ALL: [Purpose; 5] = [
        Self::PublicRelease,
        Self::AggregateAnalysis,
        Self::DetailedInternalAnalysis,
        Self::OperationalUse,
        Self::MachineLearning,
    ];

    /// Stable key
    pub fn key(&self) -> &'static str {
        match self {
            Self::PublicRelease => "public_release",
            Self::AggregateAnalysis => "aggregate_analysis",
            Self::DetailedInternalAnalysis => "detailed_internal_analysis",
            Self::OperationalUse => "operational_use",
            Self::MachineLearning => "machine_learning",
        }
    }

    /// Option value used by the questionnaire form
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::PublicRelease => "publico",
            Self::AggregateAnalysis => "analisis_agregado",
            Self::DetailedInternalAnalysis => "analisis_detallado",
            Self::OperationalUse => "operacional",
            Self::MachineLearning => "ml",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::PublicRelease => "Public release / sharing",
            Self::AggregateAnalysis => "Aggregate / statistical analysis",
            Self::DetailedInternalAnalysis => "Detailed internal analysis",
            Self::OperationalUse => "Operational / transactional use",
            Self::MachineLearning => "Machine learning / AI",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Purpose {
    type Err = String;

    /// Accepts the stable key (any case, `-` or `_`) or the form option value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.key() == normalized || p.form_value() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown purpose '{}'. Must be one of: {}",
                    s.trim(),
                    Self::ALL
                        .iter()
                        .map(|p| p.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Validated context of one evaluation
///
/// Only constructed through validation (see
/// [`validate_request`](crate::core::validate::validate_request)) or
/// [`DatasetContext::new`], so every instance satisfies the form preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetContext {
    /// Dataset name (trimmed, non-empty)
    pub dataset_name: DatasetName,

    /// Optional opaque dataset identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<DatasetId>,

    /// Approximate number of records
    pub volume: u64,

    /// Intended purpose of use
    pub purpose: Purpose,

    /// Whether individuals must be re-identified downstream
    #[serde(default)]
    pub requires_reidentification: bool,

    /// Whether the dataset will be linked with other sources
    #[serde(default)]
    pub cross_source_linkage: bool,
}

impl DatasetContext {
    /// Creates a context with both booleans `false`
    pub fn new(dataset_name: DatasetName, volume: u64, purpose: Purpose) -> Self {
        Self {
            dataset_name,
            dataset_id: None,
            volume,
            purpose,
            requires_reidentification: false,
            cross_source_linkage: false,
        }
    }

    /// Sets the dataset identifier
    pub fn with_dataset_id(mut self, dataset_id: DatasetId) -> Self {
        self.dataset_id = Some(dataset_id);
        self
    }

    /// Sets the re-identification flag
    pub fn with_reidentification(mut self, value: bool) -> Self {
        self.requires_reidentification = value;
        self
    }

    /// Sets the cross-source linkage flag
    pub fn with_cross_source_linkage(mut self, value: bool) -> Self {
        self.cross_source_linkage = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_parse_key_and_form_value() {
        assert_eq!("machine_learning".parse::<Purpose>(), Ok(Purpose::MachineLearning));
        assert_eq!("ml".parse::<Purpose>(), Ok(Purpose::MachineLearning));
        assert_eq!("Public-Release".parse::<Purpose>(), Ok(Purpose::PublicRelease));
        assert_eq!("analisis_agregado".parse::<Purpose>(), Ok(Purpose::AggregateAnalysis));
    }

    #[test]
    fn test_purpose_parse_unknown() {
        let err = "marketing".parse::<Purpose>().unwrap_err();
        assert!(err.contains("Unknown purpose 'marketing'"));
        assert!(err.contains("operational_use"));
    }

    #[test]
    fn test_context_builder() {
        let context = DatasetContext::new(
            DatasetName::new("clientes").unwrap(),
            25_000,
            Purpose::OperationalUse,
        )
        .with_dataset_id(DatasetId::new("ri.foundry.main.dataset.42").unwrap())
        .with_cross_source_linkage(true);

        assert_eq!(context.volume, 25_000);
        assert!(context.cross_source_linkage);
        assert!(!context.requires_reidentification);
        assert!(context.dataset_id.is_some());
    }

    #[test]
    fn test_context_serialization_skips_absent_id() {
        let context = DatasetContext::new(
            DatasetName::new("clientes").unwrap(),
            10,
            Purpose::PublicRelease,
        );
        let value = serde_json::to_value(&context).unwrap();
        assert!(value.get("dataset_id").is_none());
        assert_eq!(value["purpose"], "public_release");
    }
}
