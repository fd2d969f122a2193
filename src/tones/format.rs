//! Legacy vs multi-tone attribute formats

use crate::errors::{ArrangementError, Result};
use crate::models::arrangement::ToneSlots;
use crate::models::attributes::Attributes2014;

/// Tone-declaration schema of an attribute record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneFormat {
    /// Single tone, no `Tones` collection (2012 records)
    Legacy,
    /// `Tones` collection plus base and A-D slots (2014 records, converted 2012 records)
    Modern,
}

impl ToneFormat {
    pub fn detect(attr: &Attributes2014) -> Self {
        if attr.tones.is_some() {
            ToneFormat::Modern
        } else {
            ToneFormat::Legacy
        }
    }
}

/// Tone slots of a legacy record: the base tone and nothing else.
///
/// A non-empty value in any of slots A-D means modern data leaked into a
/// legacy record. Empty strings are treated as unset.
pub fn legacy_tones(attr: &Attributes2014) -> Result<ToneSlots> {
    let slots: Vec<&'static str> = [
        ("Tone_A", &attr.tone_a),
        ("Tone_B", &attr.tone_b),
        ("Tone_C", &attr.tone_c),
        ("Tone_D", &attr.tone_d),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().map_or(false, |v| !v.is_empty()))
    .map(|(label, _)| label)
    .collect();

    if !slots.is_empty() {
        return Err(ArrangementError::InconsistentLegacyToneData { slots });
    }

    Ok(ToneSlots {
        base: attr.tone_base.clone(),
        ..ToneSlots::default()
    })
}
