//! Evaluate command implementation
//!
//! This module implements the `evaluate` command: the manual questionnaire
//! evaluation. Answers come from flags, an answers file, or both (flags win).

use crate::cli::{EXIT_INVALID, EXIT_OK};
use crate::config::{load_or_default, OutputFormat};
use crate::core::engine::evaluate;
use crate::core::report::ResultsReport;
use crate::core::request::{EvaluationRequest, RawVolume};
use crate::domain::ProfilerError;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the evaluate command
#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Answers file (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Dataset name
    #[arg(long)]
    pub dataset_name: Option<String>,

    /// Dataset resource id (optional)
    #[arg(long)]
    pub dataset_id: Option<String>,

    /// Approximate number of records
    #[arg(long)]
    pub volume: Option<String>,

    /// Purpose of use (public_release, aggregate_analysis,
    /// detailed_internal_analysis, operational_use, machine_learning)
    #[arg(long)]
    pub purpose: Option<String>,

    /// Individuals must be re-identifiable later
    #[arg(long)]
    pub requires_reidentification: bool,

    /// The dataset will be linked with other sources
    #[arg(long)]
    pub cross_source_linkage: bool,

    /// Direct identifiers present (keys or codes, comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub direct: Vec<String>,

    /// Indirect identifiers present (keys or codes, comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub indirect: Vec<String>,

    /// Special-category data present (keys or codes, comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub special: Vec<String>,

    /// Show which rule decided the profile
    #[arg(long)]
    pub explain: bool,

    /// Output format (table, json); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => {
                eprintln!("❌ Failed to read answers");
                eprintln!("   Error: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        let evaluation = match evaluate(&request) {
            Ok(evaluation) => evaluation,
            Err(ProfilerError::Validation(validation)) => {
                eprintln!("❌ The evaluation cannot run:");
                for violation in &validation.violations {
                    eprintln!("   - {violation}");
                }
                return Ok(EXIT_INVALID);
            }
            Err(e) => return Err(e.into()),
        };

        let mut report = ResultsReport::new();
        for key in &evaluation.unknown_keys {
            report.add_notice(format!("Ignored unknown indicator key '{key}'"));
        }
        let report = report.with_manual(evaluation.result, evaluation.rule);

        match self.output_format(config_path) {
            OutputFormat::Json => println!("{}", report.format_json()?),
            OutputFormat::Table => println!("{}", report.format_console(self.explain)),
        }

        Ok(EXIT_OK)
    }

    /// Builds the request: answers file first, flags overlaid on top
    pub fn build_request(&self) -> crate::domain::Result<EvaluationRequest> {
        let base = match &self.answers {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Reading answers file");
                EvaluationRequest::from_path(path)?
            }
            None => EvaluationRequest::new(),
        };
        Ok(base.merge(self.flags_request()))
    }

    fn flags_request(&self) -> EvaluationRequest {
        EvaluationRequest {
            dataset_name: self.dataset_name.clone(),
            dataset_id: self.dataset_id.clone(),
            volume: self.volume.as_deref().map(RawVolume::from),
            purpose: self.purpose.clone(),
            requires_reidentification: self.requires_reidentification,
            cross_source_linkage: self.cross_source_linkage,
            direct_identifiers: selected(&self.direct),
            indirect_identifiers: selected(&self.indirect),
            special_category: selected(&self.special),
        }
    }

    fn output_format(&self, config_path: &str) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        match load_or_default(config_path) {
            Ok(config) => config.application.output_format,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unusable configuration for output format");
                OutputFormat::default()
            }
        }
    }
}

fn selected(keys: &[String]) -> BTreeMap<String, bool> {
    keys.iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .map(|key| (key.to_string(), true))
        .collect()
}
