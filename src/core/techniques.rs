//! Anonymization technique catalog
//!
//! Static reference list of the techniques the remote classifier cites by
//! code (`T1`..`T9`). There is no `T6`.

use crate::domain::column::{category, ColumnAssessment, ColumnRisk};
use serde::Serialize;

/// One anonymization technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    /// Technique code
    pub code: &'static str,
    /// Technique name
    pub name: &'static str,
    /// What the technique does
    pub description: &'static str,
    /// Before/after example
    pub example: &'static str,
}

/// Every known technique, in code order
pub const TECHNIQUE_CATALOG: [Technique; 8] = [
    Technique {
        code: "T1",
        name: "Suppression",
        description: "Remove the value entirely",
        example: "Juan Pérez → [SUPPRESSED]",
    },
    Technique {
        code: "T2",
        name: "Hashing / pseudonymization",
        description: "Replace the value with an irreversible code",
        example: "juan@email.com → a3f5d8e...",
    },
    Technique {
        code: "T3",
        name: "Generalization",
        description: "Reduce precision",
        example: "28 years → 25-30 years",
    },
    Technique {
        code: "T4",
        name: "Aggregation",
        description: "Group records together",
        example: "Individual salaries → average",
    },
    Technique {
        code: "T5",
        name: "Masking",
        description: "Hide part of the value",
        example: "123456789 → ***456789",
    },
    Technique {
        code: "T7",
        name: "Tokenization",
        description: "Substitute a reversible token",
        example: "Card number → TOKEN_ABC",
    },
    Technique {
        code: "T8",
        name: "Differential privacy",
        description: "Add statistical noise",
        example: "Age 28 → 28 ± noise",
    },
    Technique {
        code: "T9",
        name: "k-anonymity",
        description: "Ensure at least k identical records",
        example: "Every quasi-identifier combination appears ≥ k times",
    },
];

/// Looks up a technique by code, ignoring case and surrounding whitespace
pub fn technique(code: &str) -> Option<&'static Technique> {
    let code = code.trim();
    TECHNIQUE_CATALOG
        .iter()
        .find(|technique| technique.code.eq_ignore_ascii_case(code))
}

/// Short handling advice for a classified column
///
/// Special-category or critical columns are checked first, then the
/// category tag, then low risk.
pub fn column_guidance(column: &ColumnAssessment) -> &'static str {
    if column.is_special_category() || column.risk == ColumnRisk::Critical {
        return "Special-category data (GDPR Art. 9). Apply profiles P5/P6: T1, irreversible T2, \
                T3/T4, T8 and T9 (k ≥ 10). Mandatory DPO review.";
    }

    let tag = column.category.to_uppercase();
    match (tag.as_str(), column.risk) {
        (category::DIRECT, ColumnRisk::High) => {
            "Direct identifier. Apply profiles P2-P4: T2 or T7 depending on reversibility needs, \
             T3 on quasi-identifiers, T9 (k ≥ 3-5). Consider T1 for non-essential columns."
        }
        (category::DIRECT, ColumnRisk::Medium) => {
            "Direct identifier with medium risk. Pseudonymize (T2) or tokenize (T7) and lightly \
             generalize (T3) any quasi-identifiers. Check k ≥ 3."
        }
        (category::INDIRECT, _) => {
            "Quasi-identifier. Typically P1: generalize (T3) age, postal code and similar fields \
             and apply T9 (k ≥ 3). Check that no combination of quasi-identifiers is unique."
        }
        (category::TECHNICAL, _) => {
            "Technical identifier. Check whether it can be linked to people through other \
             datasets. If it is a stable person id, treat it as a direct identifier (T2/T7), \
             otherwise it can be treated as P0."
        }
        (category::REVIEW, _) => {
            "Needs review. Establish what the column really holds. If it contains PII/PSI apply \
             T1-T9 for the profile (P2-P6); if it is operational data it can be reclassified as P0."
        }
        (_, ColumnRisk::Low) => {
            "Low risk. Confirm there is no PII/PSI and no combinable quasi-identifier; if so it \
             can be treated as P0 with no further techniques."
        }
        _ => "Review this column in detail and apply T1-T9 for the dataset's overall profile (P0-P6).",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_no_t6() {
        assert_eq!(TECHNIQUE_CATALOG.len(), 8);
        assert!(technique("T6").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(technique(" t5 ").map(|t| t.name), Some("Masking"));
        assert_eq!(technique("T9").map(|t| t.name), Some("k-anonymity"));
        assert!(technique("X1").is_none());
    }

    #[test]
    fn test_guidance_for_special_category_wins() {
        let column = ColumnAssessment::new("diagnosis", "string", ColumnRisk::Low).with_category("PSI");
        assert!(column_guidance(&column).starts_with("Special-category data"));

        let column = ColumnAssessment::new("dni", "string", ColumnRisk::Critical)
            .with_category(category::DIRECT);
        assert!(column_guidance(&column).starts_with("Special-category data"));
    }

    #[test]
    fn test_guidance_by_category() {
        let direct = ColumnAssessment::new("email", "string", ColumnRisk::High)
            .with_category(category::DIRECT);
        assert!(column_guidance(&direct).starts_with("Direct identifier."));

        let indirect = ColumnAssessment::new("zip", "string", ColumnRisk::Medium)
            .with_category("pii_indirecto");
        assert!(column_guidance(&indirect).starts_with("Quasi-identifier"));

        let technical = ColumnAssessment::new("row_id", "long", ColumnRisk::Low)
            .with_category(category::TECHNICAL);
        assert!(column_guidance(&technical).starts_with("Technical identifier"));
    }

    #[test]
    fn test_guidance_fallbacks() {
        let low = ColumnAssessment::new("country", "string", ColumnRisk::Low);
        assert!(column_guidance(&low).starts_with("Low risk"));

        let direct_low = ColumnAssessment::new("alias", "string", ColumnRisk::Low)
            .with_category(category::DIRECT);
        assert!(column_guidance(&direct_low).starts_with("Low risk"));

        let untagged_high = ColumnAssessment::new("notes", "string", ColumnRisk::High);
        assert!(column_guidance(&untagged_high).starts_with("Review this column"));
    }
}
