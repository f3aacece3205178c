//! Catalog command implementation
//!
//! Prints the static reference data: risk profiles, questionnaire
//! indicators and anonymization techniques.

use crate::cli::EXIT_OK;
use crate::config::OutputFormat;
use crate::core::classify::rule_table;
use crate::core::techniques::TECHNIQUE_CATALOG;
use crate::domain::indicators::indicator_catalog;
use crate::domain::PROFILE_CATALOG;
use clap::{Args, ValueEnum};
use serde_json::json;

/// Which catalog to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Risk profiles P0-P6 and the rules that assign them
    Profiles,
    /// Questionnaire indicators per group
    Indicators,
    /// Anonymization techniques
    Techniques,
}

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog to print
    #[arg(value_enum)]
    pub kind: CatalogKind,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let output = match self.format {
            OutputFormat::Json => render_json(self.kind)?,
            OutputFormat::Table => render_table(self.kind),
        };
        println!("{output}");
        Ok(EXIT_OK)
    }
}

/// Renders a catalog as pretty-printed JSON
pub fn render_json(kind: CatalogKind) -> serde_json::Result<String> {
    let value = match kind {
        CatalogKind::Profiles => json!({
            "profiles": PROFILE_CATALOG,
            "rules": rule_table().collect::<Vec<_>>(),
        }),
        CatalogKind::Indicators => json!(indicator_catalog()),
        CatalogKind::Techniques => json!(TECHNIQUE_CATALOG),
    };
    serde_json::to_string_pretty(&value)
}

/// Renders a catalog as a console table
pub fn render_table(kind: CatalogKind) -> String {
    let mut output = String::new();
    match kind {
        CatalogKind::Profiles => {
            output.push_str(&format!(
                "{:4} {:36} {:12} {}\n",
                "ID", "Name", "Risk", "Minimum k"
            ));
            for profile in PROFILE_CATALOG {
                output.push_str(&format!(
                    "{:4} {:36} {:12} {}\n",
                    profile.id.as_str(),
                    profile.name,
                    profile.risk_level.label(),
                    profile.minimum_k
                ));
            }
            output.push_str("\nRules (first match wins):\n");
            for rule in rule_table() {
                output.push_str(&format!(
                    "  #{} {:44} → {}\n",
                    rule.priority,
                    rule.condition,
                    rule.profile.as_str()
                ));
            }
        }
        CatalogKind::Indicators => {
            let mut current = None;
            for info in indicator_catalog() {
                if current != Some(info.group) {
                    output.push_str(&format!("\n{}\n", info.group.label()));
                    current = Some(info.group);
                }
                output.push_str(&format!("  {:6} {:28} {}\n", info.code, info.key, info.label));
            }
        }
        CatalogKind::Techniques => {
            for technique in TECHNIQUE_CATALOG {
                output.push_str(&format!(
                    "{:3} {:28} {}\n    e.g. {}\n",
                    technique.code, technique.name, technique.description, technique.example
                ));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_table_lists_every_profile_and_rule() {
        let output = render_table(CatalogKind::Profiles);
        assert!(output.contains("P0   Public/open data"));
        assert!(output.contains("Highly sensitive data"));
        assert!(output.contains("#7"));
    }

    #[test]
    fn test_indicators_table_groups_rows() {
        let output = render_table(CatalogKind::Indicators);
        assert!(output.contains("national_id"));
        assert!(output.contains("a1_1"));
    }

    #[test]
    fn test_techniques_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(CatalogKind::Techniques).unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(8));
        assert_eq!(json[0]["code"], "T1");
    }

    #[test]
    fn test_profiles_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(CatalogKind::Profiles).unwrap()).unwrap();
        assert_eq!(json["profiles"][6]["id"], "P6");
        assert_eq!(json["profiles"][0]["minimum_k"], "N/A");
        assert_eq!(json["rules"].as_array().map(Vec::len), Some(7));
    }
}
