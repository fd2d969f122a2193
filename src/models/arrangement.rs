//! The arrangement descriptor
//!
//! Built once per pass by `ArrangementBuilder` (or from scratch with
//! `Arrangement::blank`) and handed to packaging. Scalar fields are plain
//! data; the XML comments and the parsed song-data cache ride along but are
//! excluded from serialization and equality.

use crate::errors::Result;
use crate::models::enums::{ArrangementName, ArrangementType, Metronome, PluckedType, RouteMask};
use crate::models::tuning::TuningStrings;
use crate::utils::ids::IdGenerator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Reference pitch used when a manifest declares no cent offset
pub const DEFAULT_TUNING_PITCH: f64 = 440.0;

/// Master id used for every vocal arrangement
pub const VOCAL_MASTER_ID: i32 = 1;

/// Tone names for the base slot and switchable slots A-D
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSlots {
    pub base: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub d: Option<String>,
}

/// Parsed binary song data for one arrangement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongData {
    pub source: PathBuf,
    pub bytes: Vec<u8>,
}

/// Reads binary song data on demand
pub trait SongDataLoader {
    fn load(&self, arrangement: &Arrangement) -> std::io::Result<SongData>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrangement {
    /// Binary song data file, empty until packaging assigns one
    pub song_file: PathBuf,
    pub song_xml: PathBuf,

    pub arrangement_type: ArrangementType,
    pub arrangement_sort: i32,
    pub name: ArrangementName,
    /// Display name of the resolved tuning; `None` for vocals
    pub tuning: Option<String>,
    pub tuning_strings: Option<TuningStrings>,
    pub tuning_pitch: f64,
    pub capo_fret: f64,
    pub scroll_speed: i32,
    pub plucked_type: PluckedType,
    /// Vocals rendered with a custom font
    pub custom_font: bool,

    pub route_mask: RouteMask,
    pub bonus_arr: bool,

    pub tones: ToneSlots,
    pub tone_multiplayer: Option<String>,

    pub id: Uuid,
    pub master_id: i32,
    pub metronome: Metronome,

    /// Comments from the XML source, verbatim and in document order
    #[serde(skip)]
    pub xml_comments: Vec<String>,

    #[serde(skip)]
    pub(crate) song_data: Option<SongData>,
}

impl Arrangement {
    /// Empty descriptor with fresh identifiers
    pub fn blank(name: ArrangementName, ids: &mut dyn IdGenerator) -> Result<Self> {
        let arrangement_type = name.category();
        let master_id = match arrangement_type {
            ArrangementType::Vocal => VOCAL_MASTER_ID,
            _ => ids.next_int()?,
        };

        Ok(Arrangement {
            song_file: PathBuf::new(),
            song_xml: PathBuf::new(),
            arrangement_type,
            arrangement_sort: 0,
            name,
            tuning: None,
            tuning_strings: None,
            tuning_pitch: DEFAULT_TUNING_PITCH,
            capo_fret: 0.0,
            scroll_speed: 0,
            plucked_type: PluckedType::NotPicked,
            custom_font: false,
            route_mask: RouteMask::None,
            bonus_arr: false,
            tones: ToneSlots::default(),
            tone_multiplayer: None,
            id: ids.guid()?,
            master_id,
            metronome: Metronome::None,
            xml_comments: Vec::new(),
            song_data: None,
        })
    }

    /// Cached song data, loading it on first access
    pub fn song_data(&mut self, loader: &dyn SongDataLoader) -> std::io::Result<&SongData> {
        let data = match self.song_data.take() {
            Some(data) => data,
            None => {
                let data = loader.load(self)?;
                log::debug!("Cached {} bytes of song data for {}", data.bytes.len(), self.name);
                data
            }
        };
        Ok(self.song_data.insert(data))
    }

    pub fn has_cached_song_data(&self) -> bool {
        self.song_data.is_some()
    }

    /// Drop the cached song data
    pub fn clean_cache(&mut self) {
        self.song_data = None;
    }
}

impl PartialEq for Arrangement {
    fn eq(&self, other: &Self) -> bool {
        self.song_file == other.song_file
            && self.song_xml == other.song_xml
            && self.arrangement_type == other.arrangement_type
            && self.arrangement_sort == other.arrangement_sort
            && self.name == other.name
            && self.tuning == other.tuning
            && self.tuning_strings == other.tuning_strings
            && self.tuning_pitch == other.tuning_pitch
            && self.capo_fret == other.capo_fret
            && self.scroll_speed == other.scroll_speed
            && self.plucked_type == other.plucked_type
            && self.custom_font == other.custom_font
            && self.route_mask == other.route_mask
            && self.bonus_arr == other.bonus_arr
            && self.tones == other.tones
            && self.tone_multiplayer == other.tone_multiplayer
            && self.id == other.id
            && self.master_id == other.master_id
            && self.metronome == other.metronome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ids::SequentialIds;
    use std::cell::Cell;

    struct CountingLoader {
        calls: Cell<usize>,
    }

    impl SongDataLoader for CountingLoader {
        fn load(&self, arrangement: &Arrangement) -> std::io::Result<SongData> {
            self.calls.set(self.calls.get() + 1);
            Ok(SongData {
                source: arrangement.song_xml.clone(),
                bytes: vec![1, 2, 3],
            })
        }
    }

    #[test]
    fn test_blank_vocal_uses_fixed_master_id() {
        let mut ids = SequentialIds::starting_at(100);
        let vocals = Arrangement::blank(ArrangementName::Vocals, &mut ids).unwrap();
        assert_eq!(vocals.master_id, VOCAL_MASTER_ID);
        assert_eq!(vocals.arrangement_type, ArrangementType::Vocal);
        assert_eq!(vocals.id, Uuid::from_u128(100));

        let lead = Arrangement::blank(ArrangementName::Lead, &mut ids).unwrap();
        assert_eq!(lead.master_id, 101);
        assert_eq!(lead.tuning_pitch, DEFAULT_TUNING_PITCH);
    }

    #[test]
    fn test_song_data_cache_is_lazy_and_clearable() {
        let mut ids = SequentialIds::starting_at(1);
        let mut arrangement = Arrangement::blank(ArrangementName::Rhythm, &mut ids).unwrap();
        let loader = CountingLoader { calls: Cell::new(0) };

        assert!(!arrangement.has_cached_song_data());
        assert_eq!(arrangement.song_data(&loader).unwrap().bytes, vec![1, 2, 3]);
        arrangement.song_data(&loader).unwrap();
        assert_eq!(loader.calls.get(), 1);

        arrangement.clean_cache();
        assert!(!arrangement.has_cached_song_data());
        arrangement.song_data(&loader).unwrap();
        assert_eq!(loader.calls.get(), 2);
    }

    #[test]
    fn test_equality_and_serialization_ignore_comments() {
        let mut ids = SequentialIds::starting_at(1);
        let a = Arrangement::blank(ArrangementName::Bass, &mut ids).unwrap();
        let mut b = a.clone();
        b.xml_comments.push(" EOF v1.8 ".to_string());
        assert_eq!(a, b);

        let json = serde_json::to_value(&b).unwrap();
        assert!(json.get("xml_comments").is_none());
        assert!(json.get("song_data").is_none());
    }
}
