//! Validation report: defects, their keys, and the overall outcome.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

/// A single detected defect. `Display` yields the fixed, human-readable
/// message; serialization uses the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Defect {
    /// `min > max` on the interval itself.
    InvertedBounds,
    /// This interval's `max` runs past the `min` of the next one.
    OverlapsNext,
    /// This interval's `min` starts before the `max` of the previous one.
    OverlapsPrevious,
    /// Uncovered values between this interval's `max` and the next `min`.
    GapBeforeNext,
    /// Uncovered values between the previous `max` and this interval's `min`.
    GapAfterPrevious,
    /// Same `min` and `max` as a neighbour.
    Duplicated,
    /// Global: `is_sorted` was requested but the input is not sorted.
    NotSorted,
}

impl Defect {
    pub const ALL: [Defect; 7] = [
        Defect::InvertedBounds,
        Defect::OverlapsNext,
        Defect::OverlapsPrevious,
        Defect::GapBeforeNext,
        Defect::GapAfterPrevious,
        Defect::Duplicated,
        Defect::NotSorted,
    ];

    pub fn message(self) -> &'static str {
        match self {
            Self::InvertedBounds => r#""min" value is greater than "max""#,
            Self::OverlapsNext => {
                r#""max" value is greater than "min" value with the item in next order"#
            }
            Self::OverlapsPrevious => {
                r#""min" value is smaller than "max" value with the item in previous order"#
            }
            Self::GapBeforeNext => {
                r#"There is a gap between the current item "max" value with the "min" value of item in next order"#
            }
            Self::GapAfterPrevious => {
                r#"There is a gap between the current item "min" value with the "max" value of item in previous order"#
            }
            Self::Duplicated => "Duplicated item",
            Self::NotSorted => r#"The list is not sorted when the "isSorted" flag is true"#,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Returned when a string matches no known defect message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown defect message: {0:?}")]
pub struct UnknownDefect(pub String);

impl FromStr for Defect {
    type Err = UnknownDefect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.message() == s)
            .ok_or_else(|| UnknownDefect(s.to_string()))
    }
}

impl Serialize for Defect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl<'de> Deserialize<'de> for Defect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Where a defect is attributed: the whole list, or one interval by its
/// position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    All,
    Index(usize),
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Index(i) => serializer.serialize_u64(*i as u64),
        }
    }
}

struct ErrorKeyVisitor;

impl Visitor<'_> for ErrorKeyVisitor {
    type Value = ErrorKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#""all" or a non-negative index"#)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ErrorKey, E> {
        usize::try_from(v)
            .map(ErrorKey::Index)
            .map_err(|_| E::custom(format!("index {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ErrorKey, E> {
        if v == "all" {
            return Ok(ErrorKey::All);
        }
        v.parse::<usize>()
            .map(ErrorKey::Index)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for ErrorKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ErrorKeyVisitor)
    }
}

/// Defects grouped by key. Sparse: only keys with at least one defect are
/// present. Messages under a key keep the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<ErrorKey, SmallVec<[Defect; 2]>>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `defect` under `key`.
    pub fn add(&mut self, key: ErrorKey, defect: Defect) {
        self.0.entry(key).or_default().push(defect);
    }

    /// Append `defect` under `key` unless that key already holds it.
    pub fn add_once(&mut self, key: ErrorKey, defect: Defect) {
        let defects = self.0.entry(key).or_default();
        if !defects.contains(&defect) {
            defects.push(defect);
        }
    }

    pub fn get(&self, key: ErrorKey) -> Option<&[Defect]> {
        self.0.get(&key).map(|d| d.as_slice())
    }

    /// Defects attributed to the interval at `index` in the caller's input.
    pub fn at(&self, index: usize) -> Option<&[Defect]> {
        self.get(ErrorKey::Index(index))
    }

    /// Defects that concern the list as a whole.
    pub fn global(&self) -> Option<&[Defect]> {
        self.get(ErrorKey::All)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys with at least one defect.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &[Defect])> {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl FromIterator<(ErrorKey, Defect)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ErrorKey, Defect)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, defect) in iter {
            map.add(key, defect);
        }
        map
    }
}

/// Outcome of validating a well-formed interval list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionReport {
    /// The intervals form an exhaustive, non-overlapping partition.
    Exhaustive,
    /// At least one defect was found.
    Defective(ErrorMap),
}

impl PartitionReport {
    pub fn is_exhaustive(&self) -> bool {
        matches!(self, Self::Exhaustive)
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Exhaustive => None,
            Self::Defective(errors) => Some(errors),
        }
    }

    pub(crate) fn from_errors(errors: ErrorMap) -> Self {
        if errors.is_empty() {
            Self::Exhaustive
        } else {
            Self::Defective(errors)
        }
    }
}

/// Serialized shape: `{"result": true}` or `{"result": false, "errors": {..}}`.
#[derive(Serialize, Deserialize)]
struct ReportWire<M> {
    result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<M>,
}

impl Serialize for PartitionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportWire {
            result: self.is_exhaustive(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PartitionReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ReportWire::<ErrorMap>::deserialize(deserializer)?;
        match (wire.result, wire.errors) {
            (true, None) => Ok(Self::Exhaustive),
            (false, Some(errors)) if !errors.is_empty() => Ok(Self::Defective(errors)),
            (true, Some(_)) => Err(de::Error::custom("exhaustive report carries errors")),
            (false, _) => Err(de::Error::custom("defective report without errors")),
        }
    }
}
