//! Raw evaluation input
//!
//! An [`EvaluationRequest`] is what the questionnaire submits before any
//! checking: context fields may be missing or malformed, indicator maps may
//! contain keys outside the known sets. Requests come from an answers file
//! (JSON or TOML), from command-line flags, or both merged.

use crate::domain::context::ResultExt;
use crate::domain::indicators::{
    DirectIdentifier, Indicator, IndicatorGroup, IndicatorGroups, IndirectIdentifier,
    SpecialCategory,
};
use crate::domain::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Volume as entered, before it is checked to be a non-negative integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawVolume {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for RawVolume {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

impl From<&str> for RawVolume {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Unchecked questionnaire submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Dataset name as typed
    #[serde(default, alias = "datasetName")]
    pub dataset_name: Option<String>,

    /// Dataset identifier as typed
    #[serde(default, alias = "datasetRid", alias = "dataset_rid")]
    pub dataset_id: Option<String>,

    /// Approximate volume as typed
    #[serde(default, alias = "volumen")]
    pub volume: Option<RawVolume>,

    /// Purpose selection as typed
    #[serde(default, alias = "proposito")]
    pub purpose: Option<String>,

    /// Individuals must be re-identified downstream
    #[serde(default, alias = "necesita_identificar")]
    pub requires_reidentification: bool,

    /// Dataset will be linked with other sources
    #[serde(default, alias = "vincula_fuentes")]
    pub cross_source_linkage: bool,

    /// Direct identifier answers by key or field code
    #[serde(default, alias = "pii_directos")]
    pub direct_identifiers: BTreeMap<String, bool>,

    /// Indirect identifier answers by key or field code
    #[serde(default, alias = "pii_indirectos")]
    pub indirect_identifiers: BTreeMap<String, bool>,

    /// Special-category answers by key or field code
    #[serde(default, alias = "psi")]
    pub special_category: BTreeMap<String, bool>,
}

/// Indicator groups resolved from a request, with the keys that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedIndicators {
    /// Answers for the known indicators
    pub groups: IndicatorGroups,
    /// Unknown keys, qualified by group (`direct_identifiers.shoe_size`)
    pub unknown_keys: Vec<String>,
}

impl EvaluationRequest {
    /// Creates an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a request from a JSON or TOML answers file
    ///
    /// The format is picked from the extension; `.toml` is TOML, anything
    /// else is parsed as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file '{}'", path.display()))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let request = if is_toml {
            toml::from_str(&content).map_err(|e| {
                ProfilerError::InvalidInput(format!(
                    "Failed to parse answers file '{}': {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                ProfilerError::InvalidInput(format!(
                    "Failed to parse answers file '{}': {}",
                    path.display(),
                    e
                ))
            })?
        };

        tracing::debug!(path = %path.display(), "Loaded answers file");
        Ok(request)
    }

    /// Sets the dataset name
    pub fn with_dataset_name(mut self, name: impl Into<String>) -> Self {
        self.dataset_name = Some(name.into());
        self
    }

    /// Sets the dataset identifier
    pub fn with_dataset_id(mut self, id: impl Into<String>) -> Self {
        self.dataset_id = Some(id.into());
        self
    }

    /// Sets the volume
    pub fn with_volume(mut self, volume: impl Into<RawVolume>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Sets the purpose
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Answers `true` for each direct identifier key
    pub fn with_direct<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        mark_selected(&mut self.direct_identifiers, keys);
        self
    }

    /// Answers `true` for each indirect identifier key
    pub fn with_indirect<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        mark_selected(&mut self.indirect_identifiers, keys);
        self
    }

    /// Answers `true` for each special-category key
    pub fn with_special<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        mark_selected(&mut self.special_category, keys);
        self
    }

    /// Overlays `other` on top of `self`
    ///
    /// Context fields present in `other` replace those in `self`; boolean
    /// flags are raised if either side raised them; indicator answers from
    /// `other` overwrite answers for the same key.
    pub fn merge(mut self, other: EvaluationRequest) -> Self {
        if other.dataset_name.is_some() {
            self.dataset_name = other.dataset_name;
        }
        if other.dataset_id.is_some() {
            self.dataset_id = other.dataset_id;
        }
        if other.volume.is_some() {
            self.volume = other.volume;
        }
        if other.purpose.is_some() {
            self.purpose = other.purpose;
        }
        self.requires_reidentification |= other.requires_reidentification;
        self.cross_source_linkage |= other.cross_source_linkage;
        self.direct_identifiers.extend(other.direct_identifiers);
        self.indirect_identifiers.extend(other.indirect_identifiers);
        self.special_category.extend(other.special_category);
        self
    }

    /// Resolves the raw answer maps into typed indicator groups
    ///
    /// Unknown keys never count; they are reported back so the caller can
    /// show a notice.
    pub fn resolve_indicators(&self) -> ResolvedIndicators {
        let mut unknown_keys = Vec::new();

        let direct = resolve_group::<DirectIdentifier>(&self.direct_identifiers, &mut unknown_keys);
        let indirect =
            resolve_group::<IndirectIdentifier>(&self.indirect_identifiers, &mut unknown_keys);
        let special = resolve_group::<SpecialCategory>(&self.special_category, &mut unknown_keys);

        ResolvedIndicators {
            groups: IndicatorGroups::new(direct, indirect, special),
            unknown_keys,
        }
    }
}

fn mark_selected<'a>(answers: &mut BTreeMap<String, bool>, keys: impl IntoIterator<Item = &'a str>) {
    for key in keys {
        let key = key.trim();
        if !key.is_empty() {
            answers.insert(key.to_string(), true);
        }
    }
}

fn resolve_group<I: Indicator>(
    answers: &BTreeMap<String, bool>,
    unknown_keys: &mut Vec<String>,
) -> IndicatorGroup<I> {
    let (group, unknown) =
        IndicatorGroup::<I>::from_answers(answers.iter().map(|(key, value)| (key.as_str(), *value)));
    unknown_keys.extend(
        unknown
            .into_iter()
            .map(|key| format!("{}.{}", I::GROUP.key(), key)),
    );
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_marks_indicators() {
        let request = EvaluationRequest::new()
            .with_dataset_name("clientes")
            .with_volume(1000u64)
            .with_purpose("operational_use")
            .with_direct(["national_id", " email ", ""]);

        assert_eq!(request.direct_identifiers.len(), 2);
        assert_eq!(request.direct_identifiers.get("email"), Some(&true));
        assert_eq!(request.volume, Some(RawVolume::Integer(1000)));
    }

    #[test]
    fn test_resolve_reports_unknown_keys_per_group() {
        let request = EvaluationRequest::new()
            .with_direct(["national_id", "shoe_size"])
            .with_special(["b_7", "favourite_colour"]);

        let resolved = request.resolve_indicators();
        assert_eq!(resolved.groups.direct_identifiers.count(), 1);
        assert_eq!(resolved.groups.special_category.count(), 1);
        assert_eq!(
            resolved.unknown_keys,
            vec![
                "direct_identifiers.shoe_size".to_string(),
                "special_category.favourite_colour".to_string()
            ]
        );
    }

    #[test]
    fn test_merge_overrides_context_and_answers() {
        let mut base = EvaluationRequest::new()
            .with_dataset_name("from_file")
            .with_purpose("ml")
            .with_direct(["email"]);
        base.direct_identifiers.insert("phone".to_string(), true);

        let mut flags = EvaluationRequest::new().with_dataset_name("from_flags");
        flags.direct_identifiers.insert("phone".to_string(), false);
        flags.cross_source_linkage = true;

        let merged = base.merge(flags);
        assert_eq!(merged.dataset_name.as_deref(), Some("from_flags"));
        assert_eq!(merged.purpose.as_deref(), Some("ml"));
        assert_eq!(merged.direct_identifiers.get("phone"), Some(&false));
        assert_eq!(merged.direct_identifiers.get("email"), Some(&true));
        assert!(merged.cross_source_linkage);
    }

    #[test]
    fn test_from_json_file_with_form_field_names() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{
                "datasetName": "ventas",
                "volumen": "2500",
                "proposito": "analisis_agregado",
                "pii_directos": {{"a1_1": true}},
                "psi": {{"b_7": false}}
            }}"#
        )
        .unwrap();

        let request = EvaluationRequest::from_path(file.path()).unwrap();
        assert_eq!(request.dataset_name.as_deref(), Some("ventas"));
        assert_eq!(request.volume, Some(RawVolume::Text("2500".to_string())));
        assert_eq!(request.direct_identifiers.get("a1_1"), Some(&true));
        assert_eq!(request.special_category.get("b_7"), Some(&false));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
dataset_name = "pacientes"
volume = 120000
purpose = "detailed_internal_analysis"
requires_reidentification = true

[special_category]
health = true
"#
        )
        .unwrap();

        let request = EvaluationRequest::from_path(file.path()).unwrap();
        assert_eq!(request.volume, Some(RawVolume::Integer(120_000)));
        assert!(request.requires_reidentification);
        assert_eq!(request.special_category.get("health"), Some(&true));
    }

    #[test]
    fn test_from_path_malformed_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{ not json").unwrap();

        let err = EvaluationRequest::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ProfilerError::InvalidInput(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = EvaluationRequest::from_path("/nonexistent/answers.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }
}
