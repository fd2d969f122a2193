use crate::models::enums::{ArrangementType, GameVersion};
use crate::models::tuning::{TuningDefinition, TuningStrings};
use crate::tuning::repository::TuningRepository;

/// Find the named tuning for `tuning`, registering a custom one if none matches.
///
/// Bass arrangements search the bass table; every other category searches the
/// general table. Never fails: an unknown tuning becomes a custom definition
/// named after its offsets, and later calls with the same offsets find it.
pub fn resolve_tuning(
    repository: &dyn TuningRepository,
    tuning: &TuningStrings,
    category: ArrangementType,
    version: GameVersion,
) -> TuningDefinition {
    let is_bass = category == ArrangementType::Bass;
    let found = if is_bass {
        repository.select_bass(tuning, version)
    } else {
        repository.select_general(tuning, version)
    };

    if let Some(definition) = found {
        log::debug!("Resolved tuning {:?} to '{}'", tuning.to_array(), definition.ui_name);
        return definition;
    }

    let definition = TuningDefinition::custom_from_strings(*tuning, is_bass, version);
    log::info!(
        "Registering custom {} tuning '{}' for {:?}",
        category,
        definition.name,
        tuning.to_array()
    );
    repository.add(definition.clone(), true);
    definition
}
