// Tuning resolution through the builder

use songpack_arrangement::{
    resolve_tuning, ArrangementBuilder, ArrangementType, Attributes2014, GameVersion,
    TuningCatalog, TuningStrings,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_song(tuning: [i16; 6]) -> NamedTempFile {
    let attrs: String = tuning
        .iter()
        .enumerate()
        .map(|(i, offset)| format!(r#" string{}="{}""#, i, offset))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\"?>\n<song version=\"7\">\n  <tuning{} />\n</song>\n",
        attrs
    );
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(xml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn attributes(code: i32, name: &str) -> Attributes2014 {
    Attributes2014 {
        arrangement_type: code,
        arrangement_name: name.to_string(),
        dynamic_visual_density: vec![1.0],
        persistent_id: "0f0e0d0c-0b0a-4908-8706-050403020100".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_custom_tuning_is_registered_once_across_builds() {
    let catalog = TuningCatalog::with_builtins();
    let builder = ArrangementBuilder::new(&catalog);
    let before = catalog.len();

    let first_song = write_song([-3, -1, -1, -1, -1, -3]);
    let second_song = write_song([-3, -1, -1, -1, -1, -3]);
    let first = builder.build(&attributes(1, "Rhythm"), first_song.path()).unwrap();
    let second = builder.build(&attributes(0, "Lead"), second_song.path()).unwrap();

    assert_eq!(first.tuning, second.tuning);
    assert_eq!(first.tuning_strings, second.tuning_strings);
    assert_eq!(first.tuning.as_deref(), Some("C#G#C#F#A#C#"));
    assert_eq!(catalog.len(), before + 1);

    // A third lookup finds the registered definition
    let third = resolve_tuning(
        &catalog,
        &TuningStrings::new([-3, -1, -1, -1, -1, -3]),
        ArrangementType::Guitar,
        GameVersion::RS2014,
    );
    assert!(third.custom);
    assert_eq!(catalog.custom_definitions().len(), 1);
}

#[test]
fn test_bass_uses_bass_table() {
    let catalog = TuningCatalog::with_builtins();
    let builder = ArrangementBuilder::new(&catalog);

    // Upper strings of a bass XML are often junk
    let song = write_song([-2, 0, 0, 0, 3, 3]);
    let bass = builder.build(&attributes(3, "Bass"), song.path()).unwrap();

    assert_eq!(bass.arrangement_type, ArrangementType::Bass);
    assert_eq!(bass.tuning.as_deref(), Some("Drop D"));
    assert!(catalog.custom_definitions().is_empty());
}

#[test]
fn test_vocals_skip_tuning_resolution() {
    let catalog = TuningCatalog::new();
    let builder = ArrangementBuilder::new(&catalog);

    let song = write_song([5, 5, 5, 5, 5, 5]);
    let vocals = builder.build(&attributes(4, "Vocals"), song.path()).unwrap();

    assert_eq!(vocals.arrangement_type, ArrangementType::Vocal);
    assert_eq!(vocals.tuning, None);
    assert_eq!(vocals.tuning_strings, None);
    assert!(catalog.is_empty());
}

#[test]
fn test_concurrent_resolution_does_not_duplicate() {
    let catalog = TuningCatalog::new();
    let strings = TuningStrings::new([4, 4, 4, 4, 4, 4]);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                resolve_tuning(&catalog, &strings, ArrangementType::Guitar, GameVersion::RS2014)
            });
        }
    });

    assert_eq!(catalog.len(), 1);
}
