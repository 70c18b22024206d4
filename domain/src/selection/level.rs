//! Level and Track value objects with their subject catalogs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Education level (Value Object)
///
/// The three levels the selector offers. `ALevel` is the advanced tier:
/// it is the only level that additionally requires a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "PSLE")]
    Psle,
    #[serde(rename = "O-Level")]
    OLevel,
    #[serde(rename = "A-Level")]
    ALevel,
}

impl Level {
    /// Get the display label for this level (as shown in the dropdown)
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Psle => "PSLE",
            Level::OLevel => "O-Level",
            Level::ALevel => "A-Level",
        }
    }

    /// All levels, in dropdown order
    pub fn all() -> &'static [Level] {
        &[Level::Psle, Level::OLevel, Level::ALevel]
    }

    /// Whether this level requires a track sub-choice
    pub fn requires_track(&self) -> bool {
        matches!(self, Level::ALevel)
    }

    /// The subjects offered at this level, in dropdown order
    pub fn subjects(&self) -> &'static [&'static str] {
        match self {
            Level::Psle => &["Math", "English", "Science"],
            Level::OLevel => &["Chemistry", "Physics", "Biology"],
            Level::ALevel => &["Chemistry", "Physics", "Biology"],
        }
    }

    /// Check whether a subject belongs to this level's catalog
    pub fn offers_subject(&self, subject: &str) -> bool {
        self.subjects().contains(&subject)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognized level labels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown level: {0} (expected PSLE, O-Level or A-Level)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "psle" => Ok(Level::Psle),
            "o-level" | "olevel" => Ok(Level::OLevel),
            "a-level" | "alevel" => Ok(Level::ALevel),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A-Level track (Value Object)
///
/// The "Higher" sub-choice shown only when the advanced level is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    H1,
    H2,
    H3,
}

impl Track {
    /// Get the display label for this track
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::H1 => "H1",
            Track::H2 => "H2",
            Track::H3 => "H3",
        }
    }

    /// All tracks, in dropdown order
    pub fn all() -> &'static [Track] {
        &[Track::H1, Track::H2, Track::H3]
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognized track labels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown track: {0} (expected H1, H2 or H3)")]
pub struct ParseTrackError(pub String);

impl FromStr for Track {
    type Err = ParseTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h1" => Ok(Track::H1),
            "h2" => Ok(Track::H2),
            "h3" => Ok(Track::H3),
            _ => Err(ParseTrackError(s.to_string())),
        }
    }
}
