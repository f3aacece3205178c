//! Profile classification
//!
//! Maps indicator counts to one of the seven profiles. The rules are an
//! ordered table evaluated top to bottom; the first rule whose condition
//! holds decides the profile. The last rule has no condition, so every
//! input gets a profile.
//!
//! | # | Condition (`total_pii = direct + indirect`) | Profile |
//! |---|---|---|
//! | 1 | `total_pii == 0` and `special == 0` | P0 |
//! | 2 | `special > 0` and (`special >= 3` or `direct >= 3`) | P6 |
//! | 3 | `special > 0` | P5 |
//! | 4 | `direct >= 3` | P4 |
//! | 5 | `direct >= 1` or `total_pii >= 3` | P3 |
//! | 6 | `indirect >= 2` | P2 |
//! | 7 | otherwise | P1 |
//!
//! Only the counts are read. Dataset context (volume, purpose, linkage,
//! re-identification) does not take part.

use super::aggregate::IndicatorCounts;
use crate::domain::{Profile, ProfileId};
use serde::Serialize;

/// One row of the rule table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    /// Position in the table, 1-based
    pub priority: u8,
    /// Condition in words
    pub condition: &'static str,
    /// Profile assigned when the condition holds
    pub profile: ProfileId,
    #[serde(skip)]
    matches: fn(&IndicatorCounts) -> bool,
}

impl Rule {
    /// Whether the rule's condition holds for `counts`
    pub fn matches(&self, counts: &IndicatorCounts) -> bool {
        (self.matches)(counts)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Rule {}

fn no_sensitive_data(c: &IndicatorCounts) -> bool {
    c.total_pii() == 0 && c.special == 0
}

fn special_with_heavy_exposure(c: &IndicatorCounts) -> bool {
    c.special > 0 && (c.special >= 3 || c.direct >= 3)
}

fn any_special(c: &IndicatorCounts) -> bool {
    c.special > 0
}

fn many_direct(c: &IndicatorCounts) -> bool {
    c.direct >= 3
}

fn some_direct_or_many_pii(c: &IndicatorCounts) -> bool {
    c.direct >= 1 || c.total_pii() >= 3
}

fn several_indirect(c: &IndicatorCounts) -> bool {
    c.indirect >= 2
}

fn always(_: &IndicatorCounts) -> bool {
    true
}

/// Conditional rules, in evaluation order
pub static RULES: [Rule; 6] = [
    Rule {
        priority: 1,
        condition: "no direct, indirect or special-category indicators",
        profile: ProfileId::P0,
        matches: no_sensitive_data,
    },
    Rule {
        priority: 2,
        condition: "special-category data with 3+ special or 3+ direct indicators",
        profile: ProfileId::P6,
        matches: special_with_heavy_exposure,
    },
    Rule {
        priority: 3,
        condition: "any special-category data",
        profile: ProfileId::P5,
        matches: any_special,
    },
    Rule {
        priority: 4,
        condition: "3+ direct identifiers",
        profile: ProfileId::P4,
        matches: many_direct,
    },
    Rule {
        priority: 5,
        condition: "at least one direct identifier, or 3+ identifiers in total",
        profile: ProfileId::P3,
        matches: some_direct_or_many_pii,
    },
    Rule {
        priority: 6,
        condition: "2+ indirect identifiers",
        profile: ProfileId::P2,
        matches: several_indirect,
    },
];

/// Rule applied when no conditional rule matches
pub static FALLBACK_RULE: Rule = Rule {
    priority: 7,
    condition: "a single indirect identifier",
    profile: ProfileId::P1,
    matches: always,
};

/// Outcome of classification together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Assigned profile
    pub profile: Profile,
    /// Rule that matched first
    pub rule: &'static Rule,
}

/// Every rule, including the fallback, in evaluation order
pub fn rule_table() -> impl Iterator<Item = &'static Rule> {
    RULES.iter().chain(std::iter::once(&FALLBACK_RULE))
}

/// Finds the first matching rule
pub fn matching_rule(counts: &IndicatorCounts) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matches(counts))
        .unwrap_or(&FALLBACK_RULE)
}

/// Assigns a profile and reports which rule decided it
pub fn classify_with_rule(counts: &IndicatorCounts) -> Classification {
    let rule = matching_rule(counts);
    Classification {
        profile: rule.profile.profile(),
        rule,
    }
}

/// Assigns a profile to indicator counts
///
/// Total and deterministic: every input maps to exactly one profile.
///
/// # Examples
///
/// ```
/// use pii_profiler::core::aggregate::IndicatorCounts;
/// use pii_profiler::core::classify::classify;
/// use pii_profiler::domain::ProfileId;
///
/// assert_eq!(classify(&IndicatorCounts::new(0, 0, 0)).id, ProfileId::P0);
/// assert_eq!(classify(&IndicatorCounts::new(2, 1, 0)).id, ProfileId::P3);
/// assert_eq!(classify(&IndicatorCounts::new(3, 0, 3)).id, ProfileId::P6);
/// ```
pub fn classify(counts: &IndicatorCounts) -> Profile {
    classify_with_rule(counts).profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MinimumK, RiskLevel};
    use test_case::test_case;

    // (direct, indirect, special) -> profile, one case per side of each rule boundary
    #[test_case(0, 0, 0, ProfileId::P0 ; "rule 1 nothing")]
    #[test_case(0, 0, 1, ProfileId::P5 ; "rule 1 to 3 single special")]
    #[test_case(0, 1, 0, ProfileId::P1 ; "rule 1 to 7 single indirect")]
    #[test_case(0, 0, 3, ProfileId::P6 ; "rule 2 three special")]
    #[test_case(3, 0, 1, ProfileId::P6 ; "rule 2 three direct with special")]
    #[test_case(2, 0, 2, ProfileId::P5 ; "rule 2 to 3 below both thresholds")]
    #[test_case(3, 0, 3, ProfileId::P6 ; "rule 2 both thresholds")]
    #[test_case(0, 7, 2, ProfileId::P5 ; "rule 3 indirect does not escalate special")]
    #[test_case(3, 0, 0, ProfileId::P4 ; "rule 4 three direct")]
    #[test_case(11, 7, 0, ProfileId::P4 ; "rule 4 everything but special")]
    #[test_case(2, 0, 0, ProfileId::P3 ; "rule 4 to 5 two direct")]
    #[test_case(1, 0, 0, ProfileId::P3 ; "rule 5 one direct")]
    #[test_case(0, 3, 0, ProfileId::P3 ; "rule 5 three indirect")]
    #[test_case(1, 2, 0, ProfileId::P3 ; "rule 5 mixed")]
    #[test_case(0, 2, 0, ProfileId::P2 ; "rule 5 to 6 two indirect")]
    #[test_case(0, 1, 0, ProfileId::P1 ; "rule 6 to 7 one indirect")]
    fn test_rule_boundaries(direct: u32, indirect: u32, special: u32, expected: ProfileId) {
        let counts = IndicatorCounts::new(direct, indirect, special);
        assert_eq!(classify(&counts).id, expected);
    }

    #[test]
    fn test_p0_record() {
        let profile = classify(&IndicatorCounts::new(0, 0, 0));
        assert_eq!(profile.risk_level, RiskLevel::Low);
        assert_eq!(profile.minimum_k, MinimumK::NotApplicable);
    }

    #[test]
    fn test_matched_rule_is_reported() {
        let classification = classify_with_rule(&IndicatorCounts::new(0, 1, 0));
        assert_eq!(classification.rule.priority, 7);
        assert_eq!(classification.profile.id, ProfileId::P1);

        let classification = classify_with_rule(&IndicatorCounts::new(2, 1, 0));
        assert_eq!(classification.rule.priority, 5);
    }

    #[test]
    fn test_rule_table_order() {
        let priorities: Vec<u8> = rule_table().map(|rule| rule.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_total_over_all_reachable_counts() {
        for direct in 0..=11 {
            for indirect in 0..=7 {
                for special in 0..=15 {
                    let counts = IndicatorCounts::new(direct, indirect, special);
                    let classification = classify_with_rule(&counts);
                    // The first matching rule is the one reported
                    let first = rule_table().find(|rule| rule.matches(&counts));
                    assert_eq!(first.map(|rule| rule.priority), Some(classification.rule.priority));
                    assert_eq!(classification.profile.id, classification.rule.profile);
                }
            }
        }
    }

    #[test]
    fn test_special_never_below_p5() {
        for direct in 0..=11 {
            for indirect in 0..=7 {
                let profile = classify(&IndicatorCounts::new(direct, indirect, 1));
                assert!(profile.id >= ProfileId::P5);
            }
        }
    }
}
