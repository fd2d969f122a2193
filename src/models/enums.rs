//! Enumerated arrangement fields
//!
//! Manifests encode these as raw integers (or, for the arrangement name, as
//! text). Decoding is always fallible: an unknown code is rejected with
//! `ArrangementError::InvalidEnumerationValue`, never mapped to a default.

use crate::errors::ArrangementError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instrument category of an arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangementType {
    Guitar,
    Bass,
    Vocal,
}

impl ArrangementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrangementType::Guitar => "Guitar",
            ArrangementType::Bass => "Bass",
            ArrangementType::Vocal => "Vocal",
        }
    }
}

impl fmt::Display for ArrangementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name of an arrangement
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangementName {
    Lead = 0,
    Rhythm = 1,
    Combo = 2,
    Bass = 3,
    Vocals = 4,
}

impl ArrangementName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrangementName::Lead => "Lead",
            ArrangementName::Rhythm => "Rhythm",
            ArrangementName::Combo => "Combo",
            ArrangementName::Bass => "Bass",
            ArrangementName::Vocals => "Vocals",
        }
    }

    /// Instrument category implied by this name
    pub fn category(&self) -> ArrangementType {
        match self {
            ArrangementName::Lead | ArrangementName::Rhythm | ArrangementName::Combo => {
                ArrangementType::Guitar
            }
            ArrangementName::Bass => ArrangementType::Bass,
            ArrangementName::Vocals => ArrangementType::Vocal,
        }
    }
}

impl fmt::Display for ArrangementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for ArrangementName {
    type Error = ArrangementError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ArrangementName::Lead),
            1 => Ok(ArrangementName::Rhythm),
            2 => Ok(ArrangementName::Combo),
            3 => Ok(ArrangementName::Bass),
            4 => Ok(ArrangementName::Vocals),
            other => Err(ArrangementError::invalid_enum("ArrangementType", other)),
        }
    }
}

impl FromStr for ArrangementName {
    type Err = ArrangementError;

    /// Exact variant name, as written by the manifest generator
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lead" => Ok(ArrangementName::Lead),
            "Rhythm" => Ok(ArrangementName::Rhythm),
            "Combo" => Ok(ArrangementName::Combo),
            "Bass" => Ok(ArrangementName::Bass),
            "Vocals" => Ok(ArrangementName::Vocals),
            other => Err(ArrangementError::invalid_enum("ArrangementName", other)),
        }
    }
}

/// Gameplay path classification
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum RouteMask {
    /// Lessons, or display only in the song list
    None = 0,
    Lead = 1,
    Rhythm = 2,
    Any = 3,
    Bass = 4,
}

impl TryFrom<i32> for RouteMask {
    type Error = ArrangementError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RouteMask::None),
            1 => Ok(RouteMask::Lead),
            2 => Ok(RouteMask::Rhythm),
            3 => Ok(RouteMask::Any),
            4 => Ok(RouteMask::Bass),
            other => Err(ArrangementError::invalid_enum("routeMask", other)),
        }
    }
}

/// Plucking style (bass pick vs fingers)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum PluckedType {
    NotPicked = 0,
    Picked = 1,
}

impl TryFrom<i32> for PluckedType {
    type Error = ArrangementError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PluckedType::NotPicked),
            1 => Ok(PluckedType::Picked),
            other => Err(ArrangementError::invalid_enum("bassPick", other)),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Metronome {
    None = 0,
    /// Generate a metronome arrangement alongside this one
    Generate = 1,
    /// This arrangement is itself a metronome track
    Itself = 2,
}

impl TryFrom<i32> for Metronome {
    type Error = ArrangementError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Metronome::None),
            1 => Ok(Metronome::Generate),
            2 => Ok(Metronome::Itself),
            other => Err(ArrangementError::invalid_enum("Metronome", other)),
        }
    }
}

/// Game format generation a tuning definition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVersion {
    RS2012,
    RS2014,
}

impl Default for GameVersion {
    fn default() -> Self {
        GameVersion::RS2014
    }
}
