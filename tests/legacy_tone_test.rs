// Legacy (single tone) attribute records

use songpack_arrangement::{
    ArrangementBuilder, ArrangementError, ArrangementType, Attributes2014, TuningCatalog,
};
use std::io::Write;
use tempfile::NamedTempFile;

const BASS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<song version="7">
  <title>Legacy Bass</title>
  <arrangement>Bass</arrangement>
  <tuning string0="0" string1="0" string2="0" string3="0" string4="0" string5="0" />
  <tones count="1">
    <tone time="5.0" id="0" name="cleanbass" />
  </tones>
</song>
"#;

fn write_song(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn legacy_bass() -> Attributes2014 {
    Attributes2014 {
        arrangement_type: 3,
        arrangement_name: "Bass".to_string(),
        capo_fret: 0.0,
        dynamic_visual_density: vec![2.0],
        persistent_id: "8f3b8a3e-0b6b-4f5e-9d7e-2a1c4b5d6e7f".to_string(),
        master_id_rdv: 4242,
        tone_base: Some("CleanBass".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_legacy_bass_copies_base_tone_only() {
    let file = write_song(BASS_XML);
    let catalog = TuningCatalog::with_builtins();
    let builder = ArrangementBuilder::new(&catalog);

    let arrangement = builder.build(&legacy_bass(), file.path()).expect("legacy build should succeed");

    assert_eq!(arrangement.arrangement_type, ArrangementType::Bass);
    assert_eq!(arrangement.tones.base.as_deref(), Some("CleanBass"));
    assert_eq!(arrangement.tones.a, None);
    assert_eq!(arrangement.tones.b, None);
    assert_eq!(arrangement.tones.c, None);
    assert_eq!(arrangement.tones.d, None);
    assert_eq!(arrangement.tuning.as_deref(), Some("E Standard"));
    assert_eq!(arrangement.master_id, 4242);

    // Legacy records never write the XML back
    let on_disk = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(on_disk, BASS_XML);
}

#[test]
fn test_legacy_with_slot_tones_fails_without_writing() {
    let file = write_song(BASS_XML);
    let catalog = TuningCatalog::with_builtins();
    let builder = ArrangementBuilder::new(&catalog);

    for slot in 0..4 {
        let mut attr = legacy_bass();
        let extra = Some("Overdrive".to_string());
        match slot {
            0 => attr.tone_a = extra,
            1 => attr.tone_b = extra,
            2 => attr.tone_c = extra,
            _ => attr.tone_d = extra,
        }

        let err = builder.build(&attr, file.path()).unwrap_err();
        assert!(
            matches!(err, ArrangementError::InconsistentLegacyToneData { .. }),
            "slot {} should be rejected, got {:?}",
            slot,
            err
        );
    }

    let on_disk = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(on_disk, BASS_XML);
}
