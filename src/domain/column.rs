//! Column-level analysis returned by the remote classifier
//!
//! The remote function classifies each column of a dataset independently
//! with a four-level risk vocabulary. These types are the decoded,
//! normalized form of its answer; the wire envelope lives in the adapter.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Per-column risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl ColumnRisk {
    /// Levels from most to least severe, the order used in summaries
    pub const BY_SEVERITY: [ColumnRisk; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Normalizes a raw risk value
    ///
    /// Accepts the English names and the Spanish aliases in any case.
    /// Anything unrecognized is treated as `Low`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "CRITICAL" | "CRITICO" | "CRÍTICO" => Self::Critical,
            "HIGH" | "ALTO" => Self::High,
            "MEDIUM" | "MEDIO" => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Badge shown next to the label in tables
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

impl fmt::Display for ColumnRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'de> Deserialize<'de> for ColumnRisk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::normalize).unwrap_or(Self::Low))
    }
}

/// Category tag the classifier attaches to a column
///
/// The remote vocabulary is open; these are the values with a known meaning.
pub mod category {
    /// Special-category sensitive data
    pub const SPECIAL: &str = "PSI";
    /// Direct identifier
    pub const DIRECT: &str = "PII_DIRECTO";
    /// Indirect identifier / quasi-identifier
    pub const INDIRECT: &str = "PII_INDIRECTO";
    /// Technical identifier
    pub const TECHNICAL: &str = "TECNICO";
    /// Needs human review
    pub const REVIEW: &str = "REVISAR";
}

/// Classification of a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssessment {
    /// Column name
    pub name: String,

    /// Declared or logical type
    #[serde(rename = "type", alias = "logicalType", default = "default_column_type")]
    pub column_type: String,

    /// Type inferred from sampled values, when the classifier sampled data
    #[serde(
        default,
        alias = "inferredType",
        skip_serializing_if = "Option::is_none"
    )]
    pub inferred_type: Option<String>,

    /// Normalized risk level
    #[serde(default = "default_risk")]
    pub risk: ColumnRisk,

    /// Category tag (see [`category`])
    #[serde(default)]
    pub category: String,

    /// Recommended technique codes (`T1`..`T9`)
    #[serde(default)]
    pub techniques: Vec<String>,

    /// Regulation citations
    #[serde(default)]
    pub regulations: Vec<String>,

    /// Patterns detected in sampled values
    #[serde(default, alias = "detectedPatterns", skip_serializing_if = "Vec::is_empty")]
    pub detected_patterns: Vec<String>,

    /// Free-form remarks from the classifier
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

fn default_column_type() -> String {
    "string".to_string()
}

fn default_risk() -> ColumnRisk {
    ColumnRisk::Low
}

impl ColumnAssessment {
    /// Creates an assessment with no techniques or regulations
    pub fn new(name: impl Into<String>, column_type: impl Into<String>, risk: ColumnRisk) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            inferred_type: None,
            risk,
            category: String::new(),
            techniques: Vec::new(),
            regulations: Vec::new(),
            detected_patterns: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Sets the category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the technique codes
    pub fn with_techniques<S: Into<String>>(mut self, techniques: impl IntoIterator<Item = S>) -> Self {
        self.techniques = techniques.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the column is tagged as special-category data
    pub fn is_special_category(&self) -> bool {
        self.category.eq_ignore_ascii_case(category::SPECIAL)
    }
}

/// Count of columns per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskSummary {
    /// Count for one level
    pub fn get(&self, risk: ColumnRisk) -> usize {
        match risk {
            ColumnRisk::Critical => self.critical,
            ColumnRisk::High => self.high,
            ColumnRisk::Medium => self.medium,
            ColumnRisk::Low => self.low,
        }
    }

    fn record(&mut self, risk: ColumnRisk) {
        match risk {
            ColumnRisk::Critical => self.critical += 1,
            ColumnRisk::High => self.high += 1,
            ColumnRisk::Medium => self.medium += 1,
            ColumnRisk::Low => self.low += 1,
        }
    }

    /// Total number of columns counted
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Column-by-column classification of one dataset or column list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    /// Dataset resource id, when a dataset was classified
    #[serde(default, alias = "dataset_rid", skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,

    /// Number of columns reported by the classifier
    #[serde(default)]
    pub total_columns: usize,

    /// Number of rows in the dataset, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,

    /// Per-column classifications, in classifier order
    #[serde(default)]
    pub columns: Vec<ColumnAssessment>,
}

impl ColumnAnalysis {
    /// Builds an analysis from a column list
    pub fn from_columns(dataset_id: Option<String>, columns: Vec<ColumnAssessment>) -> Self {
        Self {
            dataset_id,
            total_columns: columns.len(),
            total_rows: None,
            columns,
        }
    }

    /// Number of columns at each risk level
    pub fn risk_summary(&self) -> RiskSummary {
        self.columns.iter().fold(RiskSummary::default(), |mut summary, column| {
            summary.record(column.risk);
            summary
        })
    }

    /// Whether any column is `CRITICAL`
    pub fn has_critical(&self) -> bool {
        self.columns.iter().any(|c| c.risk == ColumnRisk::Critical)
    }

    /// Whether any column is `HIGH`
    pub fn has_high(&self) -> bool {
        self.columns.iter().any(|c| c.risk == ColumnRisk::High)
    }

    /// Highest risk among the columns, `None` when there are no columns
    pub fn highest_risk(&self) -> Option<ColumnRisk> {
        self.columns.iter().map(|c| c.risk).max()
    }
}
