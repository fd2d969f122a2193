//! Build configuration

use crate::errors::Result;
use crate::models::enums::GameVersion;
use crate::song_xml::WriteMode;
use serde::{Deserialize, Serialize};

/// Options controlling how arrangements are built
///
/// ```yaml
/// game_version: RS2014
/// write_mode: atomic
/// write_back: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Format version stamped on resolved tunings
    pub game_version: GameVersion,
    pub write_mode: WriteMode,
    /// Persist corrected XML for multi-tone records. Off for dry runs.
    pub write_back: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            game_version: GameVersion::RS2014,
            write_mode: WriteMode::Overwrite,
            write_back: true,
        }
    }
}

impl BuildOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn dry_run() -> Self {
        BuildOptions {
            write_back: false,
            ..Self::default()
        }
    }
}
