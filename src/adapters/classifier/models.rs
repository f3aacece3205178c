//! Classifier wire models
//!
//! The platform executes a function and wraps its return value as
//! `{"value": ...}`. The classification functions return a JSON document
//! serialized into a string, so the value usually has to be decoded twice.
//! These models stay separate from the domain types in [`crate::domain::column`].

use crate::domain::{ClassifierError, ColumnAnalysis, ColumnAssessment};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameter name of the dataset function
pub const DATASET_RID_PARAM: &str = "dataset_rid";
/// Parameter name for the comma-separated column names
pub const COLUMN_NAMES_PARAM: &str = "column_names_csv";
/// Parameter name for the comma-separated column types
pub const COLUMN_TYPES_PARAM: &str = "column_types_csv";

/// Body of a function execution request
#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionExecuteRequest {
    /// Named function parameters
    pub parameters: Map<String, Value>,
}

impl FunctionExecuteRequest {
    /// Creates a request with no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string parameter
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters
            .insert(name.to_string(), Value::String(value.into()));
        self
    }
}

/// Classification document returned by both functions
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierEnvelope {
    /// Whether the function completed its analysis
    #[serde(default)]
    pub success: bool,

    /// Failure reason when `success` is false
    #[serde(default)]
    pub error: Option<String>,

    /// Resource id of the classified dataset
    #[serde(default)]
    pub dataset_rid: Option<String>,

    /// Number of columns analysed
    #[serde(default)]
    pub total_columns: Option<usize>,

    /// Number of rows in the dataset
    #[serde(default)]
    pub total_rows: Option<u64>,

    /// Per-column results
    #[serde(default)]
    pub columns: Vec<ColumnAssessment>,
}

impl ClassifierEnvelope {
    /// Converts the envelope to the domain analysis
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Unsuccessful`] when the function reported
    /// `success = false`.
    pub fn into_analysis(self) -> Result<ColumnAnalysis, ClassifierError> {
        if !self.success {
            return Err(ClassifierError::Unsuccessful(
                self.error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| "the function returned success = false".to_string()),
            ));
        }

        let total_columns = self.total_columns.unwrap_or(self.columns.len());
        let mut analysis = ColumnAnalysis::from_columns(self.dataset_rid, self.columns);
        analysis.total_columns = total_columns;
        analysis.total_rows = self.total_rows;
        Ok(analysis)
    }
}

/// Decodes a function execution response body into the envelope
///
/// Accepts the platform wrapper (`{"value": ...}`), a bare document, and
/// either of those carried as a JSON string.
///
/// # Errors
///
/// Returns [`ClassifierError::InvalidResponse`] when no classification
/// document can be found in the body.
pub fn decode_envelope(body: &str) -> Result<ClassifierEnvelope, ClassifierError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClassifierError::InvalidResponse(format!("Body is not JSON: {e}")))?;
    let value = unwrap_value(value)?;

    serde_json::from_value(value)
        .map_err(|e| ClassifierError::InvalidResponse(format!("Unexpected document shape: {e}")))
}

fn unwrap_value(value: Value) -> Result<Value, ClassifierError> {
    match value {
        Value::String(inner) => {
            let decoded: Value = serde_json::from_str(&inner).map_err(|e| {
                ClassifierError::InvalidResponse(format!("Function result is not JSON: {e}"))
            })?;
            match decoded {
                Value::String(_) => Err(ClassifierError::InvalidResponse(
                    "Function result is encoded more than twice".to_string(),
                )),
                other => unwrap_value(other),
            }
        }
        Value::Object(mut map) if map.contains_key("value") && !map.contains_key("success") => {
            match map.remove("value") {
                Some(inner) => unwrap_value(inner),
                None => Ok(Value::Object(map)),
            }
        }
        Value::Object(map) => Ok(Value::Object(map)),
        other => Err(ClassifierError::InvalidResponse(format!(
            "Expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColumnRisk;

    const DOCUMENT: &str = r#"{
        "success": true,
        "dataset_rid": "ri.foundry.main.dataset.42",
        "total_columns": 2,
        "total_rows": 1500,
        "columns": [
            {"name": "dni", "type": "string", "risk": "CRITICO", "emoji": "🔴",
             "category": "PII_DIRECTO", "techniques": ["T1", "T2"], "regulations": ["GDPR Art. 4"]},
            {"name": "ciudad", "type": "string", "risk": "BAJO", "emoji": "🟢",
             "category": "", "techniques": [], "regulations": []}
        ]
    }"#;

    #[test]
    fn test_request_body_shape() {
        let request = FunctionExecuteRequest::new().with_param(DATASET_RID_PARAM, "ri.x");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"parameters": {"dataset_rid": "ri.x"}}));
    }

    #[test]
    fn test_decode_bare_document() {
        let envelope = decode_envelope(DOCUMENT).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.columns.len(), 2);
        assert_eq!(envelope.columns[0].risk, ColumnRisk::Critical);
    }

    #[test]
    fn test_decode_double_encoded_value() {
        let wrapped = serde_json::json!({ "value": DOCUMENT }).to_string();
        let analysis = decode_envelope(&wrapped).unwrap().into_analysis().unwrap();

        assert_eq!(analysis.dataset_id.as_deref(), Some("ri.foundry.main.dataset.42"));
        assert_eq!(analysis.total_rows, Some(1500));
        assert_eq!(analysis.risk_summary().critical, 1);
        assert_eq!(analysis.risk_summary().low, 1);
    }

    #[test]
    fn test_decode_string_body() {
        let body = serde_json::to_string(DOCUMENT).unwrap();
        assert!(decode_envelope(&body).unwrap().success);
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let envelope =
            decode_envelope(r#"{"success": false, "error": "Dataset not found"}"#).unwrap();
        let err = envelope.into_analysis().unwrap_err();
        assert!(matches!(err, ClassifierError::Unsuccessful(ref m) if m == "Dataset not found"));

        let err = decode_envelope(r#"{"success": false}"#)
            .unwrap()
            .into_analysis()
            .unwrap_err();
        assert!(err.to_string().contains("success = false"));
    }

    #[test]
    fn test_total_columns_defaults_to_column_count() {
        let analysis = decode_envelope(r#"{"success": true, "columns": [{"name": "a"}]}"#)
            .unwrap()
            .into_analysis()
            .unwrap();
        assert_eq!(analysis.total_columns, 1);
        assert_eq!(analysis.columns[0].column_type, "string");
        assert_eq!(analysis.columns[0].risk, ColumnRisk::Low);
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            decode_envelope("not json"),
            Err(ClassifierError::InvalidResponse(_))
        ));
        assert!(matches!(
            decode_envelope(r#"{"value": "{broken"}"#),
            Err(ClassifierError::InvalidResponse(_))
        ));
        assert!(matches!(
            decode_envelope("[1, 2]"),
            Err(ClassifierError::InvalidResponse(_))
        ));
    }
}
