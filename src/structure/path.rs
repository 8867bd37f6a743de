//! Hierarchical segment paths.
//!
//! A path is a sequence of `(level, occurrence)` pairs rendered as a dot
//! joined string such as `SG5.1.SG6.2.SG9.1.SG10.3.STS.1`. The rendering is
//! what downstream consumers key on, so level names and 1-based indices
//! must stay exactly as they are.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scope levels of the structured document.
///
/// Declaration order is the sort order of sibling scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupLevel {
    Unb,
    Unh,
    Bgm,
    Dtm,
    Sg1,
    Sg2,
    Sg4,
    Com,
    Uns,
    Sg5,
    Sg6,
    Sg7,
    Sg8,
    Sg9,
    Pia,
    Sg10,
    Sts,
    Unt,
    Unz,
}

impl GroupLevel {
    const ALL: [GroupLevel; 19] = [
        GroupLevel::Unb,
        GroupLevel::Unh,
        GroupLevel::Bgm,
        GroupLevel::Dtm,
        GroupLevel::Sg1,
        GroupLevel::Sg2,
        GroupLevel::Sg4,
        GroupLevel::Com,
        GroupLevel::Uns,
        GroupLevel::Sg5,
        GroupLevel::Sg6,
        GroupLevel::Sg7,
        GroupLevel::Sg8,
        GroupLevel::Sg9,
        GroupLevel::Pia,
        GroupLevel::Sg10,
        GroupLevel::Sts,
        GroupLevel::Unt,
        GroupLevel::Unz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLevel::Unb => "UNB",
            GroupLevel::Unh => "UNH",
            GroupLevel::Bgm => "BGM",
            GroupLevel::Dtm => "DTM",
            GroupLevel::Sg1 => "SG1",
            GroupLevel::Sg2 => "SG2",
            GroupLevel::Sg4 => "SG4",
            GroupLevel::Com => "COM",
            GroupLevel::Uns => "UNS",
            GroupLevel::Sg5 => "SG5",
            GroupLevel::Sg6 => "SG6",
            GroupLevel::Sg7 => "SG7",
            GroupLevel::Sg8 => "SG8",
            GroupLevel::Sg9 => "SG9",
            GroupLevel::Pia => "PIA",
            GroupLevel::Sg10 => "SG10",
            GroupLevel::Sts => "STS",
            GroupLevel::Unt => "UNT",
            GroupLevel::Unz => "UNZ",
        }
    }
}

impl fmt::Display for GroupLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GroupLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GroupLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    #[error("unknown group level '{0}'")]
    UnknownLevel(String),

    #[error("invalid occurrence index '{0}'")]
    InvalidIndex(String),

    #[error("path '{0}' does not consist of level/index pairs")]
    Unpaired(String),
}

impl FromStr for GroupLevel {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupLevel::ALL
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| PathParseError::UnknownLevel(s.to_string()))
    }
}

/// Position of one segment in the structured document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentPath(Vec<(GroupLevel, usize)>);

impl SegmentPath {
    /// Top-level path with a single scope
    pub fn root(level: GroupLevel, index: usize) -> Self {
        Self(vec![(level, index)])
    }

    /// Path of a nested scope below this one
    pub fn child(&self, level: GroupLevel, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push((level, index));
        Self(steps)
    }

    pub fn parent(&self) -> Option<Self> {
        match self.0.len() {
            0 | 1 => None,
            n => Some(Self(self.0[..n - 1].to_vec())),
        }
    }

    /// Innermost scope
    pub fn last(&self) -> Option<(GroupLevel, usize)> {
        self.0.last().copied()
    }

    pub fn last_level(&self) -> Option<GroupLevel> {
        self.last().map(|(level, _)| level)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn steps(&self) -> &[(GroupLevel, usize)] {
        &self.0
    }

    /// Prefix of this path ending at the first scope of `level`
    pub fn ancestor(&self, level: GroupLevel) -> Option<Self> {
        self.0
            .iter()
            .position(|(l, _)| *l == level)
            .map(|end| Self(self.0[..=end].to_vec()))
    }

    /// Occurrence index of `level` within this path
    pub fn index_of(&self, level: GroupLevel) -> Option<usize> {
        self.0
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, index)| *index)
    }

    /// True if `self` lies strictly below `other`
    pub fn is_descendant_of(&self, other: &SegmentPath) -> bool {
        self.0.len() > other.0.len() && self.0.starts_with(&other.0)
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (level, index)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}.{}", level, index)?;
        }
        Ok(())
    }
}

impl FromStr for SegmentPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if s.is_empty() || parts.len() % 2 != 0 {
            return Err(PathParseError::Unpaired(s.to_string()));
        }

        parts
            .chunks(2)
            .map(|pair| {
                let level = pair[0].parse::<GroupLevel>()?;
                let index = pair[1]
                    .parse::<usize>()
                    .ok()
                    .filter(|index| *index > 0)
                    .ok_or_else(|| PathParseError::InvalidIndex(pair[1].to_string()))?;
                Ok((level, index))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SegmentPath)
    }
}

impl Serialize for SegmentPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SegmentPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        path.parse().map_err(serde::de::Error::custom)
    }
}
