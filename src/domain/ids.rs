//! Domain identifier types with validation
//!
//! Newtype wrappers for dataset identifiers. Each type ensures type safety and
//! validates its format on construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of dataset resource identifiers accepted by the remote classifier
pub const DATASET_RID_PREFIX: &str = "ri.foundry.main.dataset.";

/// Dataset name newtype wrapper
///
/// Always stored trimmed and never empty.
///
/// # Examples
///
/// ```
/// use pii_profiler::domain::ids::DatasetName;
///
/// let name = DatasetName::new("  clientes_prod_2024 ").unwrap();
/// assert_eq!(name.as_str(), "clientes_prod_2024");
/// assert!(DatasetName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetName(String);

impl DatasetName {
    /// Creates a new DatasetName, trimming surrounding whitespace
    ///
    /// Returns `Err` if the name is blank after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Dataset name cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the dataset name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatasetName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetName> for String {
    fn from(name: DatasetName) -> Self {
        name.0
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Dataset identifier newtype wrapper
///
/// An opaque identifier for the dataset in the data platform. The manual
/// evaluation only carries it through; the remote classifier additionally
/// requires the [`DATASET_RID_PREFIX`] format (see [`DatasetId::is_resource_id`]).
///
/// # Examples
///
/// ```
/// use pii_profiler::domain::ids::DatasetId;
///
/// let id = DatasetId::new("ri.foundry.main.dataset.1234-abcd").unwrap();
/// assert!(id.is_resource_id());
///
/// let opaque = DatasetId::new("warehouse.customers").unwrap();
/// assert!(!opaque.is_resource_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetId(String);

impl DatasetId {
    /// Creates a new DatasetId from a string
    ///
    /// Returns `Err` if the id is blank after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Dataset ID cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Builds an optional id from raw form input: blank input means "absent"
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| Self::new(value).ok())
    }

    /// Returns the dataset ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is a platform dataset resource id
    pub fn is_resource_id(&self) -> bool {
        self.0.len() > DATASET_RID_PREFIX.len() && self.0.starts_with(DATASET_RID_PREFIX)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatasetId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetId> for String {
    fn from(id: DatasetId) -> Self {
        id.0
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
