//! Results report
//!
//! Renders a manual evaluation, a remote column analysis, or both, as a
//! console report or as JSON. A report with neither says so instead of
//! failing.

use super::classify::Rule;
use super::compose::AnalysisResult;
use super::techniques::{column_guidance, technique};
use crate::domain::{ColumnAnalysis, ColumnRisk, GroupKind, Indicator};
use chrono::{DateTime, Utc};
use serde::Serialize;

const RULE: &str = "═══════════════════════════════════════════════════════════════\n";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────\n";

/// Message shown when there is nothing to report
pub const NO_RESULTS: &str =
    "No results available. Run a manual evaluation or a column classification first.";

/// Manual and automatic results side by side
#[derive(Debug, Clone, Serialize)]
pub struct ResultsReport {
    /// When the report was generated (not part of the analysis itself)
    pub generated_at: DateTime<Utc>,

    /// Manual evaluation result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual: Option<AnalysisResult>,

    /// Rule that decided the manual profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<&'static Rule>,

    /// Remote column analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic: Option<ColumnAnalysis>,

    /// Notices for the reader (ignored keys and similar)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl ResultsReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            manual: None,
            matched_rule: None,
            automatic: None,
            notices: Vec::new(),
        }
    }

    /// Attach a manual evaluation result
    pub fn with_manual(mut self, result: AnalysisResult, rule: &'static Rule) -> Self {
        self.manual = Some(result);
        self.matched_rule = Some(rule);
        self
    }

    /// Attach a remote column analysis
    pub fn with_automatic(mut self, analysis: ColumnAnalysis) -> Self {
        self.automatic = Some(analysis);
        self
    }

    /// Add a notice
    pub fn add_notice(&mut self, notice: impl Into<String>) {
        self.notices.push(notice.into());
    }

    /// Whether neither result is present
    pub fn is_empty(&self) -> bool {
        self.manual.is_none() && self.automatic.is_none()
    }

    /// Format report for console output
    ///
    /// With `explain`, the manual section names the rule that matched.
    pub fn format_console(&self, explain: bool) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE);
        output.push_str("                     PII/PSI RISK PROFILE                      \n");
        output.push_str(RULE);
        output.push('\n');

        if self.is_empty() {
            output.push_str(&format!("ℹ️  {}\n\n", NO_RESULTS));
        }

        if let Some(result) = &self.manual {
            self.format_manual(&mut output, result, explain);
        }

        if let Some(analysis) = &self.automatic {
            format_automatic(&mut output, analysis);
        }

        if !self.notices.is_empty() {
            output.push_str("⚠️  NOTICES\n");
            output.push_str(THIN_RULE);
            for notice in &self.notices {
                output.push_str(&format!("  • {}\n", notice));
            }
            output.push('\n');
        }

        output.push_str(RULE);
        output
    }

    fn format_manual(&self, output: &mut String, result: &AnalysisResult, explain: bool) {
        let profile = &result.profile;
        let badge = profile.risk_level.as_column_risk().badge();

        output.push_str("✍️  MANUAL EVALUATION\n");
        output.push_str(THIN_RULE);
        output.push_str(&format!(
            "  Assigned profile:   {} {} - {}\n",
            badge, profile.id, profile.name
        ));
        output.push_str(&format!("  Risk level:         {}\n", profile.risk_level));
        output.push_str(&format!("  Minimum k:          {}\n", profile.minimum_k));
        if explain {
            if let Some(rule) = self.matched_rule {
                output.push_str(&format!(
                    "  Matched rule:       #{} ({})\n",
                    rule.priority, rule.condition
                ));
            }
        }
        output.push('\n');

        let context = &result.context;
        output.push_str(&format!("  Dataset:            {}\n", context.dataset_name));
        if let Some(id) = &context.dataset_id {
            output.push_str(&format!("  Dataset id:         {}\n", id));
        }
        output.push_str(&format!("  Volume:             {} records\n", context.volume));
        output.push_str(&format!("  Purpose:            {}\n", context.purpose.label()));
        output.push_str(&format!(
            "  Re-identification:  {}\n",
            yes_no(context.requires_reidentification)
        ));
        output.push_str(&format!(
            "  Cross-source link:  {}\n",
            yes_no(context.cross_source_linkage)
        ));
        output.push('\n');

        let counts = &result.counts;
        let groups = &result.indicators;
        push_group(
            output,
            GroupKind::Direct,
            counts.direct,
            groups.direct_identifiers.selected().map(|i| i.label()),
        );
        push_group(
            output,
            GroupKind::Indirect,
            counts.indirect,
            groups.indirect_identifiers.selected().map(|i| i.label()),
        );
        push_group(
            output,
            GroupKind::Special,
            counts.special,
            groups.special_category.selected().map(|i| i.label()),
        );
        output.push('\n');
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ResultsReport {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn push_group<'a>(
    output: &mut String,
    group: GroupKind,
    count: u32,
    labels: impl Iterator<Item = &'a str>,
) {
    output.push_str(&format!("  {:44} {:>3}\n", group.label(), count));
    for label in labels {
        output.push_str(&format!("      - {}\n", label));
    }
}

fn format_automatic(output: &mut String, analysis: &ColumnAnalysis) {
    output.push_str("🤖 COLUMN CLASSIFICATION\n");
    output.push_str(THIN_RULE);
    if let Some(id) = &analysis.dataset_id {
        output.push_str(&format!("  Dataset id:         {}\n", id));
    }
    output.push_str(&format!("  Total columns:      {}\n", analysis.total_columns));
    if let Some(rows) = analysis.total_rows {
        output.push_str(&format!("  Total rows:         {}\n", rows));
    }
    output.push('\n');

    let summary = analysis.risk_summary();
    output.push_str("  Columns by risk level\n");
    for risk in ColumnRisk::BY_SEVERITY {
        output.push_str(&format!(
            "    {} {:10} {:>4}\n",
            risk.badge(),
            risk.label(),
            summary.get(risk)
        ));
    }
    if analysis.has_critical() || analysis.has_high() {
        output.push_str("  ⚠️  This column set contains sensitive data (CRITICAL or HIGH).\n");
    }
    output.push('\n');

    if analysis.columns.is_empty() {
        output.push_str("  No classifiable columns returned.\n\n");
        return;
    }

    output.push_str(&format!(
        "  {:24} {:10} {:12} {:14} {}\n",
        "Column", "Type", "Risk", "Category", "Techniques"
    ));
    for column in &analysis.columns {
        let techniques = if column.techniques.is_empty() {
            "N/A".to_string()
        } else {
            column
                .techniques
                .iter()
                .map(|code| match technique(code) {
                    Some(known) => format!("{} {}", known.code, known.name),
                    None => code.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!(
            "  {:24} {:10} {} {:9} {:14} {}\n",
            column.name,
            column.column_type,
            column.risk.badge(),
            column.risk.label(),
            if column.category.is_empty() { "-" } else { column.category.as_str() },
            techniques
        ));
        if !column.regulations.is_empty() {
            output.push_str(&format!("      Regulations: {}\n", column.regulations.join(", ")));
        }
        output.push_str(&format!("      {}\n", column_guidance(column)));
    }
    output.push('\n');
}
