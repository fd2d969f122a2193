//! One-line arrangement summaries for listings
//!
//! ```text
//! Guitar - Lead [Drop D: A431.69, Capo Fret 2] (Clean, Crunch) +Metronome
//! Bass [E Standard] (CleanBass)
//! Vocals
//! ```

use crate::models::arrangement::{Arrangement, ToneSlots, DEFAULT_TUNING_PITCH};
use crate::models::enums::{ArrangementType, Metronome};
use std::fmt;

/// Comma-joined tone names, skipping empty slots.
/// Tone A is omitted when it repeats the base tone.
pub fn tone_description(tones: &ToneSlots) -> String {
    let base = tones.base.as_deref().filter(|s| !s.is_empty());
    let a = tones
        .a
        .as_deref()
        .filter(|s| !s.is_empty() && Some(*s) != tones.base.as_deref());

    [base, a, tones.b.as_deref(), tones.c.as_deref(), tones.d.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn pitch_info(pitch: f64) -> String {
    if pitch == DEFAULT_TUNING_PITCH {
        String::new()
    } else {
        format!(": A{}", pitch)
    }
}

fn capo_info(capo_fret: f64) -> String {
    if capo_fret > 0.0 {
        format!(", Capo Fret {}", capo_fret)
    } else {
        String::new()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = format!(
            "[{}{}{}] ({}){}",
            self.tuning.as_deref().unwrap_or_default(),
            pitch_info(self.tuning_pitch),
            capo_info(self.capo_fret),
            tone_description(&self.tones),
            if self.metronome == Metronome::Generate { " +Metronome" } else { "" },
        );

        match self.arrangement_type {
            ArrangementType::Bass => write!(f, "{} {}", self.arrangement_type, detail),
            ArrangementType::Vocal => write!(f, "{}", self.name),
            ArrangementType::Guitar => {
                write!(f, "{} - {} {}", self.arrangement_type, self.name, detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ArrangementName;
    use crate::utils::ids::SequentialIds;

    fn slots(names: [Option<&str>; 5]) -> ToneSlots {
        let [base, a, b, c, d] = names.map(|n| n.map(str::to_string));
        ToneSlots { base, a, b, c, d }
    }

    fn arrangement(name: ArrangementName) -> Arrangement {
        let mut arrangement = Arrangement::blank(name, &mut SequentialIds::starting_at(1)).unwrap();
        arrangement.tuning = Some("E Standard".to_string());
        arrangement
    }

    #[test]
    fn test_tone_a_matching_base_is_shown_once() {
        let tones = slots([Some("Clean"), Some("Clean"), Some("Crunch"), None, None]);
        assert_eq!(tone_description(&tones), "Clean, Crunch");
    }

    #[test]
    fn test_empty_slots_are_skipped() {
        let tones = slots([None, Some("Lead"), Some(""), None, Some("Wah")]);
        assert_eq!(tone_description(&tones), "Lead, Wah");
        assert_eq!(tone_description(&ToneSlots::default()), "");
    }

    #[test]
    fn test_guitar_summary_with_all_annotations() {
        let mut lead = arrangement(ArrangementName::Lead);
        lead.tuning = Some("Drop D".to_string());
        lead.tuning_pitch = 431.69;
        lead.capo_fret = 2.0;
        lead.metronome = Metronome::Generate;
        lead.tones = slots([Some("Clean"), Some("Clean"), Some("Crunch"), None, None]);

        assert_eq!(
            lead.to_string(),
            "Guitar - Lead [Drop D: A431.69, Capo Fret 2] (Clean, Crunch) +Metronome"
        );
    }

    #[test]
    fn test_bass_summary_omits_default_pitch_and_zero_capo() {
        let mut bass = arrangement(ArrangementName::Bass);
        bass.tones = slots([Some("CleanBass"), None, None, None, None]);
        assert_eq!(bass.to_string(), "Bass [E Standard] (CleanBass)");
    }

    #[test]
    fn test_itself_metronome_is_not_annotated() {
        let mut rhythm = arrangement(ArrangementName::Rhythm);
        rhythm.metronome = Metronome::Itself;
        assert_eq!(rhythm.to_string(), "Guitar - Rhythm [E Standard] ()");
    }

    #[test]
    fn test_vocals_show_name_only() {
        let mut vocals = arrangement(ArrangementName::Vocals);
        vocals.capo_fret = 3.0;
        assert_eq!(vocals.to_string(), "Vocals");
    }
}
