//! Movie domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Production status of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieStatus {
    Released,
    PostProduction,
    Planned,
}

impl MovieStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Released => "released",
            Self::PostProduction => "post_production",
            Self::Planned => "planned",
        }
    }

    /// Map a TMDB status label. Unrecognised labels count as released.
    pub fn from_tmdb_label(label: Option<&str>) -> Self {
        match label {
            Some("Released") => Self::Released,
            Some("Post Production") => Self::PostProduction,
            Some("Planned") => Self::Planned,
            _ => Self::Released,
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "released" => Ok(Self::Released),
            "post_production" => Ok(Self::PostProduction),
            "planned" => Ok(Self::Planned),
            other => Err(UnknownVariant {
                kind: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Lifecycle state of a movie record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieState {
    #[default]
    Active,
    Archived,
}

impl MovieState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for MovieState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieState {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            other => Err(UnknownVariant {
                kind: "state",
                value: other.to_owned(),
            }),
        }
    }
}
