//! Cross-checking manifest tone names against the XML tone list

use crate::errors::{ArrangementError, Result};
use crate::models::arrangement::ToneSlots;
use crate::models::attributes::{Attributes2014, ToneEntry};
use crate::song_xml::XmlTone;
use crate::tones::format::{legacy_tones, ToneFormat};

/// Outcome of tone reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct ToneReconciliation {
    pub format: ToneFormat,
    pub tones: ToneSlots,
    /// Whether any XML tone entry was renamed or re-slotted
    pub xml_changed: bool,
}

impl ToneReconciliation {
    /// The XML document is written back for every modern record
    pub fn requires_write(&self) -> bool {
        self.format == ToneFormat::Modern
    }
}

/// Which attribute field a declared tone matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Base,
    A,
    B,
    C,
    D,
}

impl Slot {
    /// Ordinal storage slot in the XML tone list; base and A share slot 0
    fn ordinal(self) -> i32 {
        match self {
            Slot::Base | Slot::A => 0,
            Slot::B => 1,
            Slot::C => 2,
            Slot::D => 3,
        }
    }
}

/// Reconcile the record's tone claims with the XML tone list.
///
/// Legacy records only pass their base tone through. For modern records each
/// declared tone is matched (case-insensitively) against the base and A-D
/// fields; the first XML entry whose name equals the declared name, or is
/// contained in it, is renamed to the declared name and given the slot of the
/// matched field. `xml_tones` is mutated in place.
pub fn reconcile_tones(
    attr: &Attributes2014,
    mut xml_tones: Option<&mut Vec<XmlTone>>,
) -> Result<ToneReconciliation> {
    let declared = match &attr.tones {
        None => {
            return Ok(ToneReconciliation {
                format: ToneFormat::Legacy,
                tones: legacy_tones(attr)?,
                xml_changed: false,
            })
        }
        Some(declared) => declared,
    };

    let has_xml_tones = xml_tones.as_ref().map_or(false, |tones| !tones.is_empty());
    let mut resolved = ToneSlots::default();
    let mut xml_changed = false;

    for entry in declared {
        let entry = match entry {
            Some(entry) => entry,
            None => {
                log::warn!("Skipping null entry in Tones collection");
                continue;
            }
        };

        let tone_id = claim_slots(attr, entry, &mut resolved);

        if tone_id > 0 && !has_xml_tones {
            return Err(ArrangementError::MissingXmlToneData {
                tone: entry.name.clone(),
            });
        }

        if let Some(tones) = xml_tones.as_deref_mut() {
            if let Some(xml_tone) = tones.iter_mut().find(|t| xml_name_matches(&t.name, &entry.name)) {
                if xml_tone.name != entry.name || xml_tone.id != tone_id {
                    log::debug!(
                        "XML tone '{}' (id {}) -> '{}' (id {})",
                        xml_tone.name,
                        xml_tone.id,
                        entry.name,
                        tone_id
                    );
                    xml_tone.name = entry.name.clone();
                    xml_tone.id = tone_id;
                    xml_changed = true;
                }
            }
        }
    }

    Ok(ToneReconciliation {
        format: ToneFormat::Modern,
        tones: resolved,
        xml_changed,
    })
}

/// Adopt the attribute tone fields that name `entry`; returns the XML slot.
/// When several fields match, the highest slot wins.
fn claim_slots(attr: &Attributes2014, entry: &ToneEntry, resolved: &mut ToneSlots) -> i32 {
    let declared = entry.name.to_lowercase();
    let mut tone_id = 0;

    let fields = [
        (Slot::Base, &attr.tone_base, &mut resolved.base),
        (Slot::A, &attr.tone_a, &mut resolved.a),
        (Slot::B, &attr.tone_b, &mut resolved.b),
        (Slot::C, &attr.tone_c, &mut resolved.c),
        (Slot::D, &attr.tone_d, &mut resolved.d),
    ];

    for (slot, claim, target) in fields {
        if let Some(claim) = claim {
            if claim.to_lowercase() == declared {
                *target = Some(claim.clone());
                if slot.ordinal() > 0 {
                    tone_id = slot.ordinal();
                }
            }
        }
    }

    tone_id
}

/// Exact (case-insensitive) match, or the XML name is a substring of the
/// declared name. Authoring tools sometimes truncate tone names or leave
/// them unset, so an empty XML name matches any declared tone.
fn xml_name_matches(xml_name: &str, declared: &str) -> bool {
    let xml_name = xml_name.to_lowercase();
    let declared = declared.to_lowercase();
    if xml_name == declared {
        return true;
    }
    let contained = declared.contains(&xml_name);
    if contained {
        log::warn!("Matched XML tone '{}' to declared tone '{}' by substring", xml_name, declared);
    }
    contained
}
