//! Column list requests
//!
//! Column names (and optional type hints) are typed by the user as
//! comma-separated lists. Type hints are positional: the n-th hint applies
//! to the n-th name, and names without a hint are sent as `string`.

use crate::domain::ClassifierError;

const DEFAULT_COLUMN_TYPE: &str = "string";

/// A list of columns to classify without reading a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRequest {
    names: Vec<String>,
    types: Vec<String>,
}

impl ColumnRequest {
    /// Parses comma-separated names and optional comma-separated types
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidRequest`] if no column name is
    /// given, or if there are more type hints than name slots. A blank name
    /// slot drops the hint in the same position.
    ///
    /// # Example
    ///
    /// ```
    /// use pii_profiler::adapters::classifier::ColumnRequest;
    ///
    /// let request = ColumnRequest::from_csv("dni, email ,edad", Some("string,,int")).unwrap();
    /// assert_eq!(request.names_csv(), "dni,email,edad");
    /// assert_eq!(request.types_csv(), "string,string,int");
    /// ```
    pub fn from_csv(names_csv: &str, types_csv: Option<&str>) -> Result<Self, ClassifierError> {
        let raw_names = split_csv(names_csv);
        let hints = types_csv
            .filter(|raw| !raw.trim().is_empty())
            .map(split_csv)
            .unwrap_or_default();

        // Hints are positional over the raw list, blank name slots included
        if hints.len() > raw_names.len() {
            return Err(ClassifierError::InvalidRequest(format!(
                "{} column types given for {} column names",
                hints.len(),
                raw_names.len()
            )));
        }

        let (names, types): (Vec<String>, Vec<String>) = raw_names
            .into_iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| {
                let column_type = match hints.get(i) {
                    Some(hint) if !hint.is_empty() => hint.clone(),
                    _ => DEFAULT_COLUMN_TYPE.to_string(),
                };
                (name, column_type)
            })
            .unzip();

        if names.is_empty() {
            return Err(ClassifierError::InvalidRequest(
                "at least one column name is required".to_string(),
            ));
        }

        Ok(Self { names, types })
    }

    /// Column names, trimmed, in input order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column types, one per name
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: a request holds at least one column
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names re-joined as the remote function expects them
    pub fn names_csv(&self) -> String {
        self.names.join(",")
    }

    /// Types re-joined as the remote function expects them
    pub fn types_csv(&self) -> String {
        self.types.join(",")
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}
