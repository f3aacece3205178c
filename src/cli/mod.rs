//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the profiler using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code: success
pub const EXIT_OK: i32 = 0;
/// Exit code: configuration or validation error
pub const EXIT_INVALID: i32 = 2;
/// Exit code: the remote classifier could not be reached or refused the request
pub const EXIT_CONNECTION: i32 = 4;
/// Exit code: fatal error
pub const EXIT_FATAL: i32 = 5;

/// PII Profiler - PII/PSI risk profiling for datasets
#[derive(Parser, Debug)]
#[command(name = "pii-profiler")]
#[command(version, about, long_about = None)]
#[command(author = "Profiler Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "profiler.toml", env = "PROFILER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PROFILER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign a risk profile from questionnaire answers
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Classify dataset columns with the remote classifier
    ClassifyColumns(commands::classify::ClassifyArgs),

    /// Print the profile, indicator or technique catalog
    Catalog(commands::catalog::CatalogArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_cli_parse_evaluate() {
        let cli = Cli::parse_from([
            "pii-profiler",
            "evaluate",
            "--dataset-name",
            "clientes",
            "--volume",
            "1000",
            "--purpose",
            "ml",
            "--direct",
            "national_id,email",
            "--indirect",
            "postal_code",
        ]);
        assert_eq!(cli.config, "profiler.toml");
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.dataset_name.as_deref(), Some("clientes"));
                assert_eq!(args.direct, vec!["national_id", "email"]);
                assert_eq!(args.indirect, vec!["postal_code"]);
                assert!(args.special.is_empty());
                assert!(!args.explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_evaluate_format() {
        let cli = Cli::parse_from(["pii-profiler", "evaluate", "--format", "json", "--explain"]);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(args.explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["pii-profiler", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["pii-profiler", "--log-level", "debug", "catalog", "profiles"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Catalog(_)));
    }

    #[test]
    fn test_cli_parse_classify_columns() {
        let cli = Cli::parse_from([
            "pii-profiler",
            "classify-columns",
            "--columns",
            "dni,email",
            "--types",
            "string,string",
        ]);
        match cli.command {
            Commands::ClassifyColumns(args) => {
                assert_eq!(args.columns.as_deref(), Some("dni,email"));
                assert!(args.dataset_id.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_classify_requires_a_target() {
        assert!(Cli::try_parse_from(["pii-profiler", "classify-columns"]).is_err());
        assert!(Cli::try_parse_from([
            "pii-profiler",
            "classify-columns",
            "--columns",
            "a",
            "--dataset-id",
            "ri.foundry.main.dataset.1",
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["pii-profiler", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
