//! Integration tests for the profile rule table

use pii_profiler::core::aggregate::IndicatorCounts;
use pii_profiler::core::classify::{classify, classify_with_rule, rule_table};
use pii_profiler::domain::{MinimumK, ProfileId, RiskLevel, PROFILE_CATALOG};
use test_case::test_case;

#[test_case(0, 0, 0, ProfileId::P0 ; "nothing sensitive")]
#[test_case(0, 1, 0, ProfileId::P1 ; "single quasi identifier")]
#[test_case(0, 2, 0, ProfileId::P2 ; "two quasi identifiers")]
#[test_case(0, 3, 0, ProfileId::P3 ; "three quasi identifiers")]
#[test_case(1, 0, 0, ProfileId::P3 ; "one direct identifier")]
#[test_case(2, 0, 0, ProfileId::P3 ; "two direct identifiers")]
#[test_case(3, 0, 0, ProfileId::P4 ; "three direct identifiers")]
#[test_case(0, 0, 1, ProfileId::P5 ; "one special category")]
#[test_case(2, 7, 2, ProfileId::P5 ; "special with light exposure")]
#[test_case(0, 0, 3, ProfileId::P6 ; "three special categories")]
#[test_case(3, 0, 1, ProfileId::P6 ; "special with three direct")]
#[test_case(3, 0, 3, ProfileId::P6 ; "heavy exposure")]
fn test_profile_for_counts(direct: u32, indirect: u32, special: u32, expected: ProfileId) {
    let profile = classify(&IndicatorCounts::new(direct, indirect, special));
    assert_eq!(profile.id, expected);
}

#[test]
fn test_public_profile_attributes() {
    let profile = classify(&IndicatorCounts::new(0, 0, 0));
    assert_eq!(profile.name, "Public/open data");
    assert_eq!(profile.risk_level, RiskLevel::Low);
    assert_eq!(profile.minimum_k, MinimumK::NotApplicable);
}

#[test]
fn test_catalog_minimum_k() {
    let ks: Vec<Option<u32>> = PROFILE_CATALOG.iter().map(|p| p.minimum_k.value()).collect();
    assert_eq!(ks, vec![None, Some(3), Some(5), Some(10), Some(10), Some(25), Some(50)]);
}

#[test]
fn test_rule_table_order_and_fallback() {
    let rules: Vec<_> = rule_table().collect();
    assert_eq!(rules.len(), 7);
    assert!(rules.windows(2).all(|pair| pair[0].priority < pair[1].priority));

    let last = rules[rules.len() - 1];
    assert_eq!(last.profile, ProfileId::P1);
    assert!(last.matches(&IndicatorCounts::new(100, 100, 100)));
}

#[test]
fn test_every_count_gets_exactly_the_first_matching_rule() {
    for direct in 0..=12 {
        for indirect in 0..=8 {
            for special in 0..=16 {
                let counts = IndicatorCounts::new(direct, indirect, special);
                let classification = classify_with_rule(&counts);

                let first = rule_table()
                    .find(|rule| rule.matches(&counts))
                    .expect("fallback rule always matches");
                assert_eq!(classification.rule.priority, first.priority);
                assert_eq!(classification.profile.id, first.profile);
            }
        }
    }
}

#[test]
fn test_adding_special_data_never_lowers_the_profile() {
    for direct in 0..=11 {
        for indirect in 0..=7 {
            let without = classify(&IndicatorCounts::new(direct, indirect, 0));
            let with = classify(&IndicatorCounts::new(direct, indirect, 1));
            assert!(with.id >= without.id);
            assert!(with.id >= ProfileId::P5);
        }
    }
}
