//! Tuning offsets and named tuning definitions

use crate::models::enums::GameVersion;
use serde::{Deserialize, Serialize};

/// Open-string pitch classes of E standard, low string first.
/// Bass uses the first four (E A D G).
const STANDARD_PITCH_CLASSES: [i32; 6] = [4, 9, 2, 7, 11, 4];

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Per-string semitone offsets from E standard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TuningStrings {
    #[serde(default)]
    pub string0: i16,
    #[serde(default)]
    pub string1: i16,
    #[serde(default)]
    pub string2: i16,
    #[serde(default)]
    pub string3: i16,
    #[serde(default)]
    pub string4: i16,
    #[serde(default)]
    pub string5: i16,
}

impl TuningStrings {
    pub fn new(offsets: [i16; 6]) -> Self {
        let [string0, string1, string2, string3, string4, string5] = offsets;
        TuningStrings { string0, string1, string2, string3, string4, string5 }
    }

    pub fn to_array(&self) -> [i16; 6] {
        [self.string0, self.string1, self.string2, self.string3, self.string4, self.string5]
    }

    /// Offset of string `index` (0 = lowest), `None` past the sixth string
    pub fn get(&self, index: usize) -> Option<i16> {
        self.to_array().get(index).copied()
    }

    /// Whether the four bass strings match; strings 4 and 5 are ignored
    pub fn bass_matches(&self, other: &TuningStrings) -> bool {
        self.to_array()[..4] == other.to_array()[..4]
    }

    /// Derive a tuning name from the string offsets.
    ///
    /// Each string contributes the note name it sounds (sharps spelling),
    /// low string first: `[-2, 0, 0, 0, 0, 0]` → `"DADGBE"`.
    pub fn derive_name(&self, is_bass: bool) -> String {
        let count = if is_bass { 4 } else { 6 };
        self.to_array()
            .iter()
            .zip(STANDARD_PITCH_CLASSES.iter())
            .take(count)
            .map(|(&offset, &open)| NOTE_NAMES[(open + offset as i32).rem_euclid(12) as usize])
            .collect()
    }
}

/// A named tuning, either from the standard catalog or user-defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TuningDefinition {
    pub name: String,
    #[serde(rename = "UIName")]
    pub ui_name: String,
    pub tuning: TuningStrings,
    pub game_version: GameVersion,
    #[serde(default)]
    pub custom: bool,
}

impl TuningDefinition {
    pub fn new(name: &str, ui_name: &str, offsets: [i16; 6], game_version: GameVersion) -> Self {
        TuningDefinition {
            name: name.to_string(),
            ui_name: ui_name.to_string(),
            tuning: TuningStrings::new(offsets),
            game_version,
            custom: false,
        }
    }

    /// Synthesize a custom definition named after its own offsets
    pub fn custom_from_strings(tuning: TuningStrings, is_bass: bool, game_version: GameVersion) -> Self {
        let name = tuning.derive_name(is_bass);
        TuningDefinition {
            ui_name: name.clone(),
            name,
            tuning,
            game_version,
            custom: true,
        }
    }
}
