//! Indicator aggregation
//!
//! Reduces each indicator group to the number of flags answered `true`.

use crate::domain::IndicatorGroups;
use serde::{Deserialize, Serialize};

/// Flags answered `true` per group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorCounts {
    /// Direct identifiers
    pub direct: u32,
    /// Indirect identifiers
    pub indirect: u32,
    /// Special-category data
    pub special: u32,
}

impl IndicatorCounts {
    /// Creates counts from explicit values
    pub const fn new(direct: u32, indirect: u32, special: u32) -> Self {
        Self {
            direct,
            indirect,
            special,
        }
    }

    /// Direct plus indirect identifiers
    pub const fn total_pii(&self) -> u32 {
        self.direct + self.indirect
    }
}

/// Counts the flags set in each group
pub fn aggregate(groups: &IndicatorGroups) -> IndicatorCounts {
    // Group sizes are fixed (11, 7, 15), far below u32::MAX.
    IndicatorCounts {
        direct: groups.direct_identifiers.count() as u32,
        indirect: groups.indirect_identifiers.count() as u32,
        special: groups.special_category.count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        DirectIdentifier, Indicator, IndicatorGroup, IndirectIdentifier, SpecialCategory,
    };

    #[test]
    fn test_empty_groups_count_zero() {
        assert_eq!(aggregate(&IndicatorGroups::default()), IndicatorCounts::default());
    }

    #[test]
    fn test_counts_only_true_flags() {
        let (direct, _) = IndicatorGroup::<DirectIdentifier>::from_answers([
            ("national_id", true),
            ("email", true),
            ("phone", false),
        ]);
        let indirect = IndicatorGroup::new().with(IndirectIdentifier::PostalCode);
        let special = IndicatorGroup::<SpecialCategory>::new();

        let counts = aggregate(&IndicatorGroups::new(direct, indirect, special));
        assert_eq!(counts, IndicatorCounts::new(2, 1, 0));
        assert_eq!(counts.total_pii(), 3);
    }

    #[test]
    fn test_full_groups() {
        let groups = IndicatorGroups::new(
            DirectIdentifier::ALL.iter().copied().collect(),
            IndirectIdentifier::ALL.iter().copied().collect(),
            SpecialCategory::ALL.iter().copied().collect(),
        );
        assert_eq!(aggregate(&groups), IndicatorCounts::new(11, 7, 15));
    }
}
