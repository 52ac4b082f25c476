//! User domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Role tag of a user row. Authors and spectators share one table and are told
/// apart by this discriminator only.
///
/// Wire format: `"spectator"` / `"author"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Spectator,
    Author,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spectator => "spectator",
            Self::Author => "author",
        }
    }

    pub fn is_author(self) -> bool {
        self == Self::Author
    }

    pub fn is_spectator(self) -> bool {
        self == Self::Spectator
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spectator" => Ok(Self::Spectator),
            "author" => Ok(Self::Author),
            other => Err(UnknownVariant {
                kind: "role",
                value: other.to_owned(),
            }),
        }
    }
}

/// Where a user or movie record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Entered through the API.
    Manual,
    /// Written by the TMDB import.
    Tmdb,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Tmdb => "tmdb",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "tmdb" => Ok(Self::Tmdb),
            other => Err(UnknownVariant {
                kind: "source",
                value: other.to_owned(),
            }),
        }
    }
}
