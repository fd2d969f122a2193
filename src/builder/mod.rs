//! Arrangement construction
//!
//! `ArrangementBuilder::build` turns a manifest attribute record plus its XML
//! song into a validated `Arrangement`:
//!
//! 1. Load the XML song
//! 2. Classify the instrument and resolve the tuning (skipped for vocals)
//! 3. Decode scalar fields (pitch, scroll speed, enums, persistent id)
//! 4. Reconcile tone declarations against the XML tone list
//! 5. Write the corrected XML back (multi-tone records only)
//!
//! Every fallible decode runs before the XML write, so a rejected record
//! never leaves a rewritten file behind. Tuning registration in step 2 is
//! not rolled back on a later failure.

pub mod options;

pub use options::BuildOptions;

use crate::errors::{ArrangementError, Result};
use crate::models::arrangement::{Arrangement, DEFAULT_TUNING_PITCH};
use crate::models::attributes::Attributes2014;
use crate::models::enums::{ArrangementName, ArrangementType, Metronome, PluckedType, RouteMask};
use crate::song_xml::SongDocument;
use crate::tones::reconcile_tones;
use crate::tuning::{resolve_tuning, TuningRepository};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Builds arrangement descriptors against a shared tuning repository
pub struct ArrangementBuilder<'r> {
    repository: &'r dyn TuningRepository,
    options: BuildOptions,
}

impl<'r> ArrangementBuilder<'r> {
    pub fn new(repository: &'r dyn TuningRepository) -> Self {
        Self::with_options(repository, BuildOptions::default())
    }

    pub fn with_options(repository: &'r dyn TuningRepository, options: BuildOptions) -> Self {
        ArrangementBuilder { repository, options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the descriptor for `attr`, whose XML song lives at `xml_path`
    pub fn build(&self, attr: &Attributes2014, xml_path: impl AsRef<Path>) -> Result<Arrangement> {
        let xml_path = xml_path.as_ref();
        let mut song = SongDocument::load(xml_path)?;

        let arrangement_type = ArrangementName::try_from(attr.arrangement_type)?.category();
        let tuning = match arrangement_type {
            ArrangementType::Vocal => None,
            category => Some(resolve_tuning(
                self.repository,
                &song.tuning,
                category,
                self.options.game_version,
            )),
        };

        let name: ArrangementName = attr.arrangement_name.parse()?;
        let tuning_pitch = attr.cent_offset.map_or(DEFAULT_TUNING_PITCH, cents_to_frequency);
        let scroll_speed = scroll_speed(&attr.dynamic_visual_density)?;

        let props = &attr.arrangement_properties;
        let plucked_type = PluckedType::try_from(props.bass_pick)?;
        let route_mask = RouteMask::try_from(props.route_mask)?;
        let metronome = Metronome::try_from(props.metronome)?;
        let id = parse_persistent_id(&attr.persistent_id)?;

        let reconciliation = reconcile_tones(attr, song.tones.as_mut())?;
        if reconciliation.requires_write() {
            if self.options.write_back {
                song.save(self.options.write_mode)?;
            } else {
                log::info!("Dry run, not writing {}", xml_path.display());
            }
        }

        let (tuning_name, tuning_strings) = match tuning {
            Some(def) => (Some(def.ui_name), Some(def.tuning)),
            None => (None, None),
        };

        log::debug!("Built {} arrangement '{}' ({})", arrangement_type, name, id);

        Ok(Arrangement {
            song_file: PathBuf::new(),
            song_xml: xml_path.to_path_buf(),
            arrangement_type,
            arrangement_sort: attr.arrangement_sort,
            name,
            tuning: tuning_name,
            tuning_strings,
            tuning_pitch,
            capo_fret: attr.capo_fret,
            scroll_speed,
            plucked_type,
            custom_font: false,
            route_mask,
            bonus_arr: props.bonus_arr == 1,
            tones: reconciliation.tones,
            tone_multiplayer: attr.tone_multiplayer.clone(),
            id,
            master_id: attr.master_id_rdv,
            metronome,
            xml_comments: song.comments,
            song_data: None,
        })
    }
}

/// Reference frequency in Hz for an offset in cents from A440, to two decimals
pub fn cents_to_frequency(cents: f64) -> f64 {
    let hz = DEFAULT_TUNING_PITCH * 2f64.powf(cents / 1200.0);
    (hz * 100.0).round() / 100.0
}

/// Last density value scaled by ten, truncated
pub fn scroll_speed(density: &[f64]) -> Result<i32> {
    density
        .last()
        .map(|last| (last * 10.0).trunc() as i32)
        .ok_or(ArrangementError::EmptyVisualDensity)
}

/// Parse a persistent id (hyphenated, simple, braced or URN form)
pub fn parse_persistent_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|source| ArrangementError::MalformedIdentifier {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_to_frequency() {
        assert_eq!(cents_to_frequency(0.0), 440.0);
        assert_eq!(cents_to_frequency(1200.0), 880.0);
        assert_eq!(cents_to_frequency(-1200.0), 220.0);
        assert_eq!(cents_to_frequency(-33.0), 431.69);
    }

    #[test]
    fn test_scroll_speed_truncates_last_value() {
        assert_eq!(scroll_speed(&[4.5, 2.0]).unwrap(), 20);
        assert_eq!(scroll_speed(&[1.37]).unwrap(), 13);
        assert!(matches!(scroll_speed(&[]), Err(ArrangementError::EmptyVisualDensity)));
    }

    #[test]
    fn test_parse_persistent_id_forms() {
        let expected = Uuid::parse_str("3c2e1f5b-8a7d-4e6f-9a0b-1c2d3e4f5a6b").unwrap();
        assert_eq!(parse_persistent_id("3C2E1F5B8A7D4E6F9A0B1C2D3E4F5A6B").unwrap(), expected);
        assert_eq!(parse_persistent_id("{3c2e1f5b-8a7d-4e6f-9a0b-1c2d3e4f5a6b}").unwrap(), expected);
    }

    #[test]
    fn test_malformed_persistent_id() {
        match parse_persistent_id("not-a-guid") {
            Err(ArrangementError::MalformedIdentifier { value, .. }) => assert_eq!(value, "not-a-guid"),
            other => panic!("Expected MalformedIdentifier, got {:?}", other),
        }
    }
}
