//! Risk profiles P0–P6
//!
//! A profile is one of seven fixed records. Each carries a risk level and the
//! minimum k-anonymity a release of the dataset must reach. The catalog is
//! static and ordered from P0 (no sensitive data) to P6 (highly sensitive).

use super::column::ColumnRisk;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProfileId {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

impl ProfileId {
    /// Every profile id in catalog order
    pub const ALL: [ProfileId; 7] = [
        Self::P0,
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P5,
        Self::P6,
    ];

    /// The catalog record for this id
    pub fn profile(self) -> Profile {
        PROFILE_CATALOG[self as usize]
    }

    /// The id as text (`"P3"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == upper)
            .ok_or_else(|| format!("Unknown profile id '{}'. Expected P0..P6", s.trim()))
    }
}

/// Risk level attached to a profile, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::MediumLow => "Medium-Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Maps the profile vocabulary onto the four-level column vocabulary
    ///
    /// Badges for manual profiles and for remotely classified columns share
    /// one colour scale.
    pub fn as_column_risk(&self) -> ColumnRisk {
        match self {
            Self::VeryHigh => ColumnRisk::Critical,
            Self::High | Self::MediumHigh => ColumnRisk::High,
            Self::Medium | Self::MediumLow => ColumnRisk::Medium,
            Self::Low => ColumnRisk::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Minimum k-anonymity required by a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinimumK {
    /// No k-anonymity requirement (serialized as `"N/A"`)
    NotApplicable,
    /// Every quasi-identifier combination must appear at least k times
    AtLeast(u32),
}

impl MinimumK {
    /// The numeric threshold, if any
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::NotApplicable => None,
            Self::AtLeast(k) => Some(*k),
        }
    }
}

impl fmt::Display for MinimumK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "N/A"),
            Self::AtLeast(k) => write!(f, "{k}"),
        }
    }
}

impl Serialize for MinimumK {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Profile {
    /// Profile identifier
    pub id: ProfileId,
    /// Profile name
    pub name: &'static str,
    /// Risk level
    pub risk_level: RiskLevel,
    /// Minimum k-anonymity
    pub minimum_k: MinimumK,
}

/// The seven profiles, indexed by [`ProfileId`]
pub const PROFILE_CATALOG: [Profile; 7] = [
    Profile {
        id: ProfileId::P0,
        name: "Public/open data",
        risk_level: RiskLevel::Low,
        minimum_k: MinimumK::NotApplicable,
    },
    Profile {
        id: ProfileId::P1,
        name: "Aggregated data",
        risk_level: RiskLevel::Low,
        minimum_k: MinimumK::AtLeast(3),
    },
    Profile {
        id: ProfileId::P2,
        name: "Statistical analytics",
        risk_level: RiskLevel::MediumLow,
        minimum_k: MinimumK::AtLeast(5),
    },
    Profile {
        id: ProfileId::P3,
        name: "Analytics with pseudonymization",
        risk_level: RiskLevel::Medium,
        minimum_k: MinimumK::AtLeast(10),
    },
    Profile {
        id: ProfileId::P4,
        name: "Detailed internal use",
        risk_level: RiskLevel::MediumHigh,
        minimum_k: MinimumK::AtLeast(10),
    },
    Profile {
        id: ProfileId::P5,
        name: "Identifiable sensitive data",
        risk_level: RiskLevel::High,
        minimum_k: MinimumK::AtLeast(25),
    },
    Profile {
        id: ProfileId::P6,
        name: "Highly sensitive data",
        risk_level: RiskLevel::VeryHigh,
        minimum_k: MinimumK::AtLeast(50),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_indexed_by_id() {
        for (index, id) in ProfileId::ALL.iter().enumerate() {
            assert_eq!(PROFILE_CATALOG[index].id, *id);
            assert_eq!(id.profile().id, *id);
        }
    }

    #[test]
    fn test_catalog_risk_is_non_decreasing_after_p1() {
        let risks: Vec<_> = PROFILE_CATALOG.iter().map(|p| p.risk_level).collect();
        assert!(risks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_minimum_k_display() {
        assert_eq!(ProfileId::P0.profile().minimum_k.to_string(), "N/A");
        assert_eq!(ProfileId::P6.profile().minimum_k.to_string(), "50");
        assert_eq!(ProfileId::P2.profile().minimum_k.value(), Some(5));
    }

    #[test]
    fn test_profile_serialization_shape() {
        let value = serde_json::to_value(ProfileId::P4.profile()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "P4",
                "name": "Detailed internal use",
                "risk_level": "Medium-High",
                "minimum_k": "10"
            })
        );
    }

    #[test]
    fn test_profile_id_from_str() {
        assert_eq!("p5".parse::<ProfileId>(), Ok(ProfileId::P5));
        assert!("P7".parse::<ProfileId>().is_err());
    }

    #[test]
    fn test_risk_level_maps_to_column_vocabulary() {
        assert_eq!(RiskLevel::VeryHigh.as_column_risk(), ColumnRisk::Critical);
        assert_eq!(RiskLevel::MediumHigh.as_column_risk(), ColumnRisk::High);
        assert_eq!(RiskLevel::MediumLow.as_column_risk(), ColumnRisk::Medium);
        assert_eq!(RiskLevel::Low.as_column_risk(), ColumnRisk::Low);
    }
}
