//! Column classifier trait definition
//!
//! This module defines the `ColumnClassifier` trait that abstracts the remote
//! function that classifies columns as PII, PSI or neither. The evaluation
//! core never calls it; only the CLI and the results report consume its output.

use super::request::ColumnRequest;
use crate::domain::ids::{DatasetId, DATASET_RID_PREFIX};
use crate::domain::{ClassifierError, ColumnAnalysis, Result};
use async_trait::async_trait;

/// What to classify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationTarget {
    /// Every column of a platform dataset
    Dataset(DatasetId),
    /// A column list typed by the user
    Columns(ColumnRequest),
}

impl ClassificationTarget {
    /// Targets a dataset, which must be a platform resource id
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidRequest`] if the id is blank or
    /// does not start with the dataset resource prefix.
    pub fn dataset(raw: &str) -> std::result::Result<Self, ClassifierError> {
        let id = DatasetId::new(raw).map_err(ClassifierError::InvalidRequest)?;
        if !id.is_resource_id() {
            return Err(ClassifierError::InvalidRequest(format!(
                "dataset id must start with '{}', got '{}'",
                DATASET_RID_PREFIX, id
            )));
        }
        Ok(Self::Dataset(id))
    }

    /// Targets a comma-separated column list
    ///
    /// # Errors
    ///
    /// See [`ColumnRequest::from_csv`].
    pub fn columns(
        names_csv: &str,
        types_csv: Option<&str>,
    ) -> std::result::Result<Self, ClassifierError> {
        ColumnRequest::from_csv(names_csv, types_csv).map(Self::Columns)
    }
}

/// Trait for remote column classifier implementations
///
/// # Example
///
/// ```no_run
/// use pii_profiler::adapters::classifier::{ClassificationTarget, ColumnClassifier};
///
/// # async fn example(classifier: &dyn ColumnClassifier) -> pii_profiler::domain::Result<()> {
/// let target = ClassificationTarget::columns("dni,email,ciudad", None)?;
/// let analysis = classifier.classify(&target).await?;
/// println!("{} columns, critical: {}", analysis.total_columns, analysis.has_critical());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ColumnClassifier: Send + Sync {
    /// Classify every column of a dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be
    /// decoded, or the function reports `success = false`.
    async fn classify_dataset(&self, dataset_id: &DatasetId) -> Result<ColumnAnalysis>;

    /// Classify a list of column names with optional type hints
    ///
    /// # Errors
    ///
    /// Same as [`ColumnClassifier::classify_dataset`].
    async fn classify_columns(&self, request: &ColumnRequest) -> Result<ColumnAnalysis>;

    /// Classify whichever target was given
    async fn classify(&self, target: &ClassificationTarget) -> Result<ColumnAnalysis> {
        match target {
            ClassificationTarget::Dataset(id) => self.classify_dataset(id).await,
            ClassificationTarget::Columns(request) => self.classify_columns(request).await,
        }
    }

    /// Get the base URL of the classifier endpoint
    fn base_url(&self) -> &str;
}
