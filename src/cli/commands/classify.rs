//! Classify-columns command implementation
//!
//! This module implements the `classify-columns` command, which sends a
//! dataset id or a column list to the remote classifier and prints the
//! per-column result.

use crate::adapters::classifier::{ClassificationTarget, ColumnClassifier, HttpColumnClassifier};
use crate::cli::{EXIT_CONNECTION, EXIT_INVALID, EXIT_OK};
use crate::config::{load_config, OutputFormat};
use crate::core::report::ResultsReport;
use crate::domain::{ClassifierError, ProfilerError};
use crate::log_error_with_context;
use clap::{ArgGroup, Args};

/// Arguments for the classify-columns command
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("target").required(true).args(["columns", "dataset_id"])))]
pub struct ClassifyArgs {
    /// Column names, comma-separated
    #[arg(long)]
    pub columns: Option<String>,

    /// Column types, comma-separated and positional (default: string)
    #[arg(long, requires = "columns")]
    pub types: Option<String>,

    /// Dataset resource id (ri.foundry.main.dataset.*)
    #[arg(long)]
    pub dataset_id: Option<String>,

    /// Output format (table, json); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl ClassifyArgs {
    /// Execute the classify-columns command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        let target = match self.target() {
            Ok(target) => target,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_INVALID);
            }
        };

        let classifier = match HttpColumnClassifier::new(&config.classifier) {
            Ok(classifier) => classifier,
            Err(e) => {
                eprintln!("❌ Remote classification is not available");
                eprintln!("   Error: {e}");
                eprintln!("   Set [classifier] enabled = true, base_url and api_token");
                return Ok(EXIT_INVALID);
            }
        };

        let format = self.format.unwrap_or(config.application.output_format);
        run(&classifier, &target, format).await
    }

    /// Builds the classification target from the arguments
    pub fn target(&self) -> Result<ClassificationTarget, ClassifierError> {
        match (&self.dataset_id, &self.columns) {
            (Some(id), _) => ClassificationTarget::dataset(id),
            (None, Some(columns)) => ClassificationTarget::columns(columns, self.types.as_deref()),
            (None, None) => Err(ClassifierError::InvalidRequest(
                "either --columns or --dataset-id is required".to_string(),
            )),
        }
    }
}

/// Classifies `target` and prints the report, returning the exit code
pub async fn run(
    classifier: &dyn ColumnClassifier,
    target: &ClassificationTarget,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    tracing::info!(base_url = classifier.base_url(), "Requesting column classification");

    let analysis = match classifier.classify(target).await {
        Ok(analysis) => analysis,
        Err(ProfilerError::Classifier(e)) => {
            log_error_with_context!(&e, "Column classification failed");
            eprintln!("❌ Column classification failed");
            eprintln!("   Error: {e}");
            return Ok(exit_code_for(&e));
        }
        Err(e) => return Err(e.into()),
    };

    let report = ResultsReport::new().with_automatic(analysis);
    match format {
        OutputFormat::Json => println!("{}", report.format_json()?),
        OutputFormat::Table => println!("{}", report.format_console(false)),
    }
    Ok(EXIT_OK)
}

fn exit_code_for(error: &ClassifierError) -> i32 {
    match error {
        ClassifierError::InvalidRequest(_) | ClassifierError::Disabled => EXIT_INVALID,
        _ => EXIT_CONNECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::classifier::ColumnRequest;
    use crate::domain::ids::DatasetId;
    use crate::domain::{ColumnAnalysis, ColumnAssessment, ColumnRisk, Result};
    use async_trait::async_trait;

    struct FailingClassifier;

    #[async_trait]
    impl ColumnClassifier for FailingClassifier {
        async fn classify_dataset(&self, _dataset_id: &DatasetId) -> Result<ColumnAnalysis> {
            Err(ClassifierError::AuthenticationFailed("status 401".to_string()).into())
        }

        async fn classify_columns(&self, _request: &ColumnRequest) -> Result<ColumnAnalysis> {
            Err(ClassifierError::Unsuccessful("no columns".to_string()).into())
        }

        fn base_url(&self) -> &str {
            "memory://"
        }
    }

    struct EchoClassifier;

    #[async_trait]
    impl ColumnClassifier for EchoClassifier {
        async fn classify_dataset(&self, dataset_id: &DatasetId) -> Result<ColumnAnalysis> {
            Ok(ColumnAnalysis::from_columns(Some(dataset_id.to_string()), Vec::new()))
        }

        async fn classify_columns(&self, request: &ColumnRequest) -> Result<ColumnAnalysis> {
            let columns = request
                .names()
                .iter()
                .map(|name| ColumnAssessment::new(name.as_str(), "string", ColumnRisk::High))
                .collect();
            Ok(ColumnAnalysis::from_columns(None, columns))
        }

        fn base_url(&self) -> &str {
            "memory://"
        }
    }

    #[test]
    fn test_target_from_args() {
        let args = ClassifyArgs {
            columns: Some("dni,email".to_string()),
            ..Default::default()
        };
        assert!(matches!(args.target(), Ok(ClassificationTarget::Columns(_))));

        let args = ClassifyArgs {
            dataset_id: Some("customers".to_string()),
            ..Default::default()
        };
        assert!(matches!(args.target(), Err(ClassifierError::InvalidRequest(_))));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&ClassifierError::Disabled), EXIT_INVALID);
        assert_eq!(
            exit_code_for(&ClassifierError::ConnectionFailed("refused".to_string())),
            EXIT_CONNECTION
        );
        assert_eq!(
            exit_code_for(&ClassifierError::ServerError {
                status: 503,
                message: String::new()
            }),
            EXIT_CONNECTION
        );
    }

    #[tokio::test]
    async fn test_run_reports_failures_as_exit_codes() {
        let target = ClassificationTarget::dataset("ri.foundry.main.dataset.1").unwrap();
        let code = run(&FailingClassifier, &target, OutputFormat::Table).await.unwrap();
        assert_eq!(code, EXIT_CONNECTION);
    }

    #[tokio::test]
    async fn test_run_prints_analysis() {
        let target = ClassificationTarget::columns("dni,email", None).unwrap();
        let code = run(&EchoClassifier, &target, OutputFormat::Json).await.unwrap();
        assert_eq!(code, EXIT_OK);
    }

    #[tokio::test]
    async fn test_missing_config_is_a_configuration_error() {
        let args = ClassifyArgs {
            columns: Some("dni".to_string()),
            ..Default::default()
        };
        assert_eq!(args.execute("nonexistent.toml").await.unwrap(), EXIT_INVALID);
    }
}
