//! Sensitive-attribute indicators
//!
//! The manual questionnaire asks, for three groups of sensitive attributes,
//! whether the dataset contains each one. Every group is a closed enumeration:
//! [`DirectIdentifier`] (11), [`IndirectIdentifier`] (7) and
//! [`SpecialCategory`] (15). Answers are held in an [`IndicatorGroup`], an
//! enum-indexed set of the flags answered `true`.
//!
//! Each indicator has a stable snake_case key (`national_id`) and the code of
//! the questionnaire field it came from (`a1_2`). Both are accepted when
//! reading answers; anything else is ignored and never counted.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The three indicator groups of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Direct identifiers (PII that identifies on its own)
    Direct,
    /// Indirect identifiers (quasi-identifiers)
    Indirect,
    /// Special-category sensitive data (PSI)
    Special,
}

impl GroupKind {
    /// All groups in questionnaire order
    pub const ALL: [GroupKind; 3] = [Self::Direct, Self::Indirect, Self::Special];

    /// Human-readable group title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct => "Direct identifiers (PII)",
            Self::Indirect => "Indirect identifiers (quasi-identifiers)",
            Self::Special => "Special-category data (PSI)",
        }
    }

    /// Field name used for the group in serialized answers
    pub fn key(&self) -> &'static str {
        match self {
            Self::Direct => "direct_identifiers",
            Self::Indirect => "indirect_identifiers",
            Self::Special => "special_category",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single closed-set sensitive-attribute indicator
pub trait Indicator: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Group this indicator belongs to
    const GROUP: GroupKind;

    /// Every indicator of the group, in questionnaire order
    const ALL: &'static [Self];

    /// Stable snake_case key
    fn key(self) -> &'static str;

    /// Questionnaire field code
    fn code(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    /// Resolves a key or a field code; `None` for anything outside the set
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|indicator| indicator.key() == raw || indicator.code() == raw)
    }
}

macro_rules! indicator_set {
    (
        $(#[$meta:meta])*
        $name:ident in $group:expr => {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $code:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Indicator for $name {
            const GROUP: GroupKind = $group;
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn key(self) -> &'static str {
                match self { $( Self::$variant => $key, )+ }
            }

            fn code(self) -> &'static str {
                match self { $( Self::$variant => $code, )+ }
            }

            fn label(self) -> &'static str {
                match self { $( Self::$variant => $label, )+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.key())
            }
        }
    };
}

indicator_set! {
    /// Direct identifiers: attributes that single out a person on their own
    DirectIdentifier in GroupKind::Direct => {
        FullName => ("full_name", "a1_1", "Full names"),
        NationalId => ("national_id", "a1_2", "National ID (DNI/NIE)"),
        PassportSsn => ("passport_ssn", "a1_3", "Passport / SSN"),
        Address => ("address", "a1_4", "Full postal addresses"),
        Phone => ("phone", "a1_5", "Phone numbers"),
        Email => ("email", "a1_6", "Personal email addresses"),
        BankAccount => ("bank_account", "a1_7", "Bank accounts"),
        CardNumber => ("card_number", "a1_8", "Credit/debit card numbers"),
        Biometric => ("biometric", "a1_9", "Biometric data"),
        Photo => ("photo", "a1_10", "Identifiable photographs"),
        VehiclePlate => ("vehicle_plate", "a1_11", "Vehicle plates"),
    }
}

indicator_set! {
    /// Indirect identifiers: quasi-identifiers that identify in combination
    IndirectIdentifier in GroupKind::Indirect => {
        BirthDate => ("birth_date", "a2_1", "Full date of birth"),
        ExactAge => ("exact_age", "a2_2", "Exact age"),
        PostalCode => ("postal_code", "a2_3", "Full postal code"),
        GpsLocation => ("gps_location", "a2_4", "GPS geolocation"),
        IpAddress => ("ip_address", "a2_5", "IP address"),
        DeviceId => ("device_id", "a2_6", "Cookies / device IDs"),
        IdentifyingCombination => ("identifying_combination", "a2_7", "Identifying combinations"),
    }
}

indicator_set! {
    /// Special-category sensitive data (GDPR Art. 9 and comparable financial/penal data)
    SpecialCategory in GroupKind::Special => {
        EthnicOrigin => ("ethnic_origin", "b_1", "Racial or ethnic origin"),
        PoliticalOpinion => ("political_opinion", "b_2", "Political opinions"),
        ReligiousBelief => ("religious_belief", "b_3", "Religious beliefs"),
        UnionMembership => ("union_membership", "b_4", "Trade union membership"),
        Genetic => ("genetic", "b_5", "Genetic data"),
        BiometricUniqueId => ("biometric_unique_id", "b_6", "Biometrics (unique identification)"),
        Health => ("health", "b_7", "Health data"),
        SexLife => ("sex_life", "b_8", "Sex life / sexual orientation"),
        ExactIncome => ("exact_income", "b_9", "Exact income"),
        NetWorth => ("net_worth", "b_10", "Net worth"),
        CreditHistory => ("credit_history", "b_11", "Credit history"),
        CreditScore => ("credit_score", "b_12", "Credit score"),
        CriminalRecord => ("criminal_record", "b_13", "Criminal record"),
        MinorsData => ("minors_data", "b_14", "Data about minors"),
        SensitiveEmployment => ("sensitive_employment", "b_15", "Sensitive employment information"),
    }
}

/// Answers for one indicator group
///
/// Only indicators answered `true` are stored; an indicator that was never
/// answered reads as `false`. The key set is fixed by `I`, so there is no way
/// to hold a flag outside the group.
///
/// Serializes as a map of every key of the group to its boolean answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorGroup<I: Indicator> {
    selected: BTreeSet<I>,
}

impl<I: Indicator> Default for IndicatorGroup<I> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<I: Indicator> IndicatorGroup<I> {
    /// Creates a group with every answer `false`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one answer
    pub fn set(&mut self, indicator: I, value: bool) {
        if value {
            self.selected.insert(indicator);
        } else {
            self.selected.remove(&indicator);
        }
    }

    /// Builder-style variant of [`set`](Self::set) with `true`
    pub fn with(mut self, indicator: I) -> Self {
        self.set(indicator, true);
        self
    }

    /// Flips one answer, like ticking a checkbox
    pub fn toggle(&mut self, indicator: I) {
        let current = self.is_set(indicator);
        self.set(indicator, !current);
    }

    /// Reads one answer; unanswered indicators are `false`
    pub fn is_set(&self, indicator: I) -> bool {
        self.selected.contains(&indicator)
    }

    /// Indicators answered `true`, in questionnaire order
    pub fn selected(&self) -> impl Iterator<Item = I> + '_ {
        self.selected.iter().copied()
    }

    /// Number of indicators answered `true`
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Every indicator of the group with its answer, in questionnaire order
    pub fn answers(&self) -> impl Iterator<Item = (I, bool)> + '_ {
        I::ALL
            .iter()
            .map(move |indicator| (*indicator, self.is_set(*indicator)))
    }

    /// Builds a group from raw `(key, answer)` pairs
    ///
    /// Keys may be indicator keys or field codes. Unknown keys are returned
    /// separately and never counted. Later answers for the same indicator
    /// overwrite earlier ones.
    pub fn from_answers<'a>(
        answers: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> (Self, Vec<String>) {
        let mut group = Self::new();
        let mut unknown = Vec::new();

        for (raw_key, value) in answers {
            match I::parse(raw_key) {
                Some(indicator) => group.set(indicator, value),
                None => unknown.push(raw_key.to_string()),
            }
        }

        if !unknown.is_empty() {
            tracing::debug!(
                group = %I::GROUP,
                unknown_keys = ?unknown,
                "Ignoring unknown indicator keys"
            );
        }

        (group, unknown)
    }

    /// Builds a group from a list of keys answered `true`
    pub fn from_selected<'a>(keys: impl IntoIterator<Item = &'a str>) -> (Self, Vec<String>) {
        Self::from_answers(keys.into_iter().map(|key| (key, true)))
    }
}

impl<I: Indicator> FromIterator<I> for IndicatorGroup<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl<I: Indicator> Serialize for IndicatorGroup<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(I::ALL.len()))?;
        for (indicator, value) in self.answers() {
            map.serialize_entry(indicator.key(), &value)?;
        }
        map.end()
    }
}

impl<'de, I: Indicator> Deserialize<'de> for IndicatorGroup<I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let (group, _unknown) = Self::from_answers(raw.iter().map(|(k, v)| (k.as_str(), *v)));
        Ok(group)
    }
}

/// The three indicator groups as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorGroups {
    /// Direct identifiers
    #[serde(default, alias = "pii_directos")]
    pub direct_identifiers: IndicatorGroup<DirectIdentifier>,

    /// Indirect identifiers
    #[serde(default, alias = "pii_indirectos")]
    pub indirect_identifiers: IndicatorGroup<IndirectIdentifier>,

    /// Special-category data
    #[serde(default, alias = "psi")]
    pub special_category: IndicatorGroup<SpecialCategory>,
}

impl IndicatorGroups {
    /// Bundles three groups
    pub fn new(
        direct_identifiers: IndicatorGroup<DirectIdentifier>,
        indirect_identifiers: IndicatorGroup<IndirectIdentifier>,
        special_category: IndicatorGroup<SpecialCategory>,
    ) -> Self {
        Self {
            direct_identifiers,
            indirect_identifiers,
            special_category,
        }
    }
}

/// Catalog row describing one indicator, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorInfo {
    /// Group of the indicator
    pub group: GroupKind,
    /// Stable key
    pub key: &'static str,
    /// Questionnaire field code
    pub code: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

fn describe_group<I: Indicator>() -> impl Iterator<Item = IndicatorInfo> {
    I::ALL.iter().map(|indicator| IndicatorInfo {
        group: I::GROUP,
        key: indicator.key(),
        code: indicator.code(),
        label: indicator.label(),
    })
}

/// Every known indicator of every group, in questionnaire order
pub fn indicator_catalog() -> Vec<IndicatorInfo> {
    describe_group::<DirectIdentifier>()
        .chain(describe_group::<IndirectIdentifier>())
        .chain(describe_group::<SpecialCategory>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sizes_are_fixed() {
        assert_eq!(DirectIdentifier::ALL.len(), 11);
        assert_eq!(IndirectIdentifier::ALL.len(), 7);
        assert_eq!(SpecialCategory::ALL.len(), 15);
        assert_eq!(indicator_catalog().len(), 33);
    }

    #[test]
    fn test_keys_and_codes_are_unique() {
        let catalog = indicator_catalog();
        let keys: BTreeSet<_> = catalog.iter().map(|i| i.key).collect();
        let codes: BTreeSet<_> = catalog.iter().map(|i| i.code).collect();
        assert_eq!(keys.len(), catalog.len());
        assert_eq!(codes.len(), catalog.len());
    }

    #[test]
    fn test_parse_accepts_key_and_code() {
        assert_eq!(
            DirectIdentifier::parse("national_id"),
            Some(DirectIdentifier::NationalId)
        );
        assert_eq!(DirectIdentifier::parse("a1_2"), Some(DirectIdentifier::NationalId));
        assert_eq!(DirectIdentifier::parse("a2_1"), None);
        assert_eq!(IndirectIdentifier::parse(" a2_1 "), Some(IndirectIdentifier::BirthDate));
        assert_eq!(SpecialCategory::parse("b_15"), Some(SpecialCategory::SensitiveEmployment));
    }

    #[test]
    fn test_unset_indicators_read_false() {
        let group = IndicatorGroup::<DirectIdentifier>::new();
        assert!(DirectIdentifier::ALL.iter().all(|i| !group.is_set(*i)));
        assert_eq!(group.count(), 0);
    }

    #[test]
    fn test_toggle_flips_answer() {
        let mut group = IndicatorGroup::<SpecialCategory>::new();
        group.toggle(SpecialCategory::Health);
        assert!(group.is_set(SpecialCategory::Health));
        group.toggle(SpecialCategory::Health);
        assert!(!group.is_set(SpecialCategory::Health));
    }

    #[test]
    fn test_from_answers_ignores_unknown_keys() {
        let (group, unknown) = IndicatorGroup::<DirectIdentifier>::from_answers([
            ("email", true),
            ("a1_1", true),
            ("shoe_size", true),
            ("phone", false),
        ]);
        assert_eq!(group.count(), 2);
        assert!(group.is_set(DirectIdentifier::Email));
        assert!(group.is_set(DirectIdentifier::FullName));
        assert!(!group.is_set(DirectIdentifier::Phone));
        assert_eq!(unknown, vec!["shoe_size".to_string()]);
    }

    #[test]
    fn test_later_answer_overrides_earlier() {
        let (group, _) =
            IndicatorGroup::<IndirectIdentifier>::from_answers([("ip_address", true), ("a2_5", false)]);
        assert!(!group.is_set(IndirectIdentifier::IpAddress));
    }

    #[test]
    fn test_group_serializes_every_key() {
        let group = IndicatorGroup::new().with(IndirectIdentifier::PostalCode);
        let value = serde_json::to_value(&group).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 7);
        assert_eq!(map["postal_code"], serde_json::json!(true));
        assert_eq!(map["birth_date"], serde_json::json!(false));
    }

    #[test]
    fn test_groups_deserialize_with_missing_groups_and_aliases() {
        let groups: IndicatorGroups = serde_json::from_value(serde_json::json!({
            "pii_directos": {"a1_2": true, "a1_6": true, "bogus": true},
            "special_category": {}
        }))
        .unwrap();

        assert_eq!(groups.direct_identifiers.count(), 2);
        assert_eq!(groups.indirect_identifiers.count(), 0);
        assert_eq!(groups.special_category.count(), 0);
    }
}
