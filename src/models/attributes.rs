//! Manifest attribute records
//!
//! Field names follow the JSON written into song package manifests, which is
//! why the serde renames are not uniform (`PersistentID`, `MasterID_RDV`,
//! camelCase arrangement properties).

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the manifest's `Tones` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToneEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ToneEntry {
    pub fn named(name: &str) -> Self {
        ToneEntry { name: name.to_string(), key: None }
    }
}

/// Gameplay properties nested under `ArrangementProperties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementProperties {
    #[serde(default)]
    pub bass_pick: i32,
    #[serde(default)]
    pub route_mask: i32,
    #[serde(default)]
    pub bonus_arr: i32,
    #[serde(default, rename = "Metronome")]
    pub metronome: i32,
}

/// Attribute record describing one arrangement in a manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attributes2014 {
    /// Numeric arrangement-name code used to classify the instrument
    #[serde(default)]
    pub arrangement_type: i32,
    #[serde(default)]
    pub arrangement_name: String,
    #[serde(default)]
    pub arrangement_sort: i32,
    #[serde(default)]
    pub capo_fret: f64,
    #[serde(default)]
    pub cent_offset: Option<f64>,
    #[serde(default)]
    pub dynamic_visual_density: Vec<f64>,
    #[serde(default)]
    pub arrangement_properties: ArrangementProperties,
    #[serde(default, rename = "PersistentID")]
    pub persistent_id: String,
    #[serde(default, rename = "MasterID_RDV")]
    pub master_id_rdv: i32,

    /// Present for multi-tone (2014) records, absent for legacy ones.
    /// Entries may be null.
    #[serde(default)]
    pub tones: Option<Vec<Option<ToneEntry>>>,
    #[serde(default, rename = "Tone_Base")]
    pub tone_base: Option<String>,
    #[serde(default, rename = "Tone_A")]
    pub tone_a: Option<String>,
    #[serde(default, rename = "Tone_B")]
    pub tone_b: Option<String>,
    #[serde(default, rename = "Tone_C")]
    pub tone_c: Option<String>,
    #[serde(default, rename = "Tone_D")]
    pub tone_d: Option<String>,
    #[serde(default, rename = "Tone_Multiplayer")]
    pub tone_multiplayer: Option<String>,
}

impl Attributes2014 {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestEntry {
    pub attributes: Attributes2014,
}

/// A manifest file: attribute records keyed by entry id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    #[serde(default)]
    pub entries: BTreeMap<String, ManifestEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_version: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_root: Option<String>,
}

impl Manifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First attribute record in the manifest (single-arrangement manifests)
    pub fn first_attributes(&self) -> Option<&Attributes2014> {
        self.entries.values().next().map(|entry| &entry.attributes)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attributes2014)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), &entry.attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
  "Entries": {
    "3C2E1F5B8A7D4E6F9A0B1C2D3E4F5A6B": {
      "Attributes": {
        "ArrangementType": 0,
        "ArrangementName": "Lead",
        "ArrangementSort": 0,
        "CapoFret": 0.0,
        "CentOffset": -33.0,
        "DynamicVisualDensity": [4.5, 4.3, 2.0],
        "ArrangementProperties": { "bassPick": 0, "routeMask": 1, "bonusArr": 0, "Metronome": 0 },
        "PersistentID": "3C2E1F5B8A7D4E6F9A0B1C2D3E4F5A6B",
        "MasterID_RDV": 31337,
        "Tone_Base": "LeadDrive",
        "Tone_A": "LeadDrive",
        "Tone_B": "Clean",
        "Tone_C": null,
        "Tone_D": null,
        "Tone_Multiplayer": "",
        "Tones": [ { "Name": "LeadDrive", "Key": "LeadDrive" }, null, { "Name": "Clean" } ]
      }
    }
  },
  "ModelName": "RSEnumerable_Song",
  "IterationVersion": 2,
  "InsertRoot": "Static.Songs.Entries"
}"#;

    #[test]
    fn test_parse_manifest_envelope() {
        let manifest = Manifest::from_json_str(MANIFEST).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.iteration_version, Some(2));

        let attr = manifest.first_attributes().unwrap();
        assert_eq!(attr.arrangement_name, "Lead");
        assert_eq!(attr.cent_offset, Some(-33.0));
        assert_eq!(attr.dynamic_visual_density.last(), Some(&2.0));
        assert_eq!(attr.arrangement_properties.route_mask, 1);
        assert_eq!(attr.master_id_rdv, 31337);
        assert_eq!(attr.tone_c, None);

        let tones = attr.tones.as_ref().unwrap();
        assert_eq!(tones.len(), 3);
        assert!(tones[1].is_none());
        assert_eq!(tones[2].as_ref().unwrap().name, "Clean");
    }

    #[test]
    fn test_legacy_record_has_no_tone_collection() {
        let attr = Attributes2014::from_json_str(
            r#"{ "ArrangementName": "Bass", "ArrangementType": 3, "Tone_Base": "CleanBass" }"#,
        )
        .unwrap();
        assert!(attr.tones.is_none());
        assert_eq!(attr.cent_offset, None);
        assert_eq!(attr.tone_base.as_deref(), Some("CleanBass"));
    }
}
