// std imports
use std::{fmt, str::FromStr};

// third-party imports
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

// local imports
use crate::{error::ConfigurationError, xerr::Suggestions};

// ---

/// Identifier of a registered matching algorithm.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Serialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Enum,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AlgorithmId {
    Kmp,
    RabinKarp,
    ZAlgorithm,
}

impl AlgorithmId {
    pub fn names() -> impl Iterator<Item = &'static str> + Clone {
        Self::iter().map(|id| id.into())
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for AlgorithmId {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|id| id.as_ref() == s)
            .ok_or_else(|| ConfigurationError::UnknownAlgorithm {
                name: s.into(),
                suggestions: Suggestions::new(s, Selection::names()),
            })
    }
}

// ---

/// Which algorithms a run uses: a single one, or all of them in benchmark mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selection {
    Single(AlgorithmId),
    All,
}

impl Selection {
    pub const ALL: &'static str = "all";

    /// All accepted spellings, algorithm identifiers first.
    pub fn names() -> impl Iterator<Item = &'static str> + Clone {
        AlgorithmId::names().chain([Self::ALL])
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(AlgorithmId::Kmp)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(id) => fmt::Display::fmt(id, f),
            Self::All => f.write_str(Self::ALL),
        }
    }
}

impl FromStr for Selection {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Single)
        }
    }
}

impl TryFrom<String> for Selection {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        value.to_string()
    }
}
