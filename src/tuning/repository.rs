//! Tuning definition catalog

use crate::errors::Result;
use crate::models::enums::GameVersion;
use crate::models::tuning::{TuningDefinition, TuningStrings};
use once_cell::sync::Lazy;
use std::io::Read;
use std::sync::RwLock;

/// Lookup and registration of named tunings
pub trait TuningRepository {
    /// Six-string lookup by exact offsets
    fn select_general(&self, tuning: &TuningStrings, version: GameVersion) -> Option<TuningDefinition>;

    /// Bass lookup, comparing the four bass strings only
    fn select_bass(&self, tuning: &TuningStrings, version: GameVersion) -> Option<TuningDefinition>;

    /// Register a definition, stamping its custom flag
    fn add(&self, definition: TuningDefinition, is_custom: bool);
}

/// Standard tunings shipped with the catalog
static BUILTIN_TUNINGS: Lazy<Vec<TuningDefinition>> = Lazy::new(|| {
    use GameVersion::*;
    vec![
        TuningDefinition::new("E Standard", "E Standard", [0, 0, 0, 0, 0, 0], RS2014),
        TuningDefinition::new("Drop D", "Drop D", [-2, 0, 0, 0, 0, 0], RS2014),
        TuningDefinition::new("Eb Standard", "Eb Standard", [-1, -1, -1, -1, -1, -1], RS2014),
        TuningDefinition::new("Eb Drop Db", "Eb Drop Db", [-3, -1, -1, -1, -1, -1], RS2014),
        TuningDefinition::new("D Standard", "D Standard", [-2, -2, -2, -2, -2, -2], RS2014),
        TuningDefinition::new("D Drop C", "D Drop C", [-4, -2, -2, -2, -2, -2], RS2014),
        TuningDefinition::new("C# Standard", "C# Standard", [-3, -3, -3, -3, -3, -3], RS2014),
        TuningDefinition::new("C Standard", "C Standard", [-4, -4, -4, -4, -4, -4], RS2014),
        TuningDefinition::new("Open G", "Open G", [-2, -2, 0, 0, 0, -2], RS2014),
        TuningDefinition::new("Open D", "Open D", [-2, 0, 0, -1, -2, -2], RS2014),
        TuningDefinition::new("Open A", "Open A", [0, 0, 2, 2, 2, 0], RS2014),
        TuningDefinition::new("DADGAD", "DADGAD", [-2, 0, 0, 0, -2, -2], RS2014),
        TuningDefinition::new("E Standard", "E Standard", [0, 0, 0, 0, 0, 0], RS2012),
        TuningDefinition::new("Drop D", "Drop D", [-2, 0, 0, 0, 0, 0], RS2012),
    ]
});

/// In-memory catalog: read-mostly, append-only for custom entries
#[derive(Debug, Default)]
pub struct TuningCatalog {
    definitions: RwLock<Vec<TuningDefinition>>,
}

impl TuningCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the standard tunings
    pub fn with_builtins() -> Self {
        Self::from_definitions(BUILTIN_TUNINGS.clone())
    }

    pub fn from_definitions(definitions: Vec<TuningDefinition>) -> Self {
        TuningCatalog {
            definitions: RwLock::new(definitions),
        }
    }

    /// Load a JSON array of definitions
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let definitions: Vec<TuningDefinition> = serde_json::from_reader(reader)?;
        log::debug!("Loaded {} tuning definitions", definitions.len());
        Ok(Self::from_definitions(definitions))
    }

    /// Export all definitions, custom ones included
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn snapshot(&self) -> Vec<TuningDefinition> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn custom_definitions(&self) -> Vec<TuningDefinition> {
        self.read().iter().filter(|d| d.custom).cloned().collect()
    }

    fn find(
        &self,
        version: GameVersion,
        matches: impl Fn(&TuningStrings) -> bool,
    ) -> Option<TuningDefinition> {
        self.read()
            .iter()
            .find(|d| d.game_version == version && matches(&d.tuning))
            .cloned()
    }

    // A poisoned lock only means a writer panicked mid-push; the Vec is still valid.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<TuningDefinition>> {
        self.definitions.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl TuningRepository for TuningCatalog {
    fn select_general(&self, tuning: &TuningStrings, version: GameVersion) -> Option<TuningDefinition> {
        self.find(version, |candidate| candidate == tuning)
    }

    fn select_bass(&self, tuning: &TuningStrings, version: GameVersion) -> Option<TuningDefinition> {
        self.find(version, |candidate| candidate.bass_matches(tuning))
    }

    fn add(&self, mut definition: TuningDefinition, is_custom: bool) {
        definition.custom = is_custom;
        let mut definitions = self.definitions.write().unwrap_or_else(|e| e.into_inner());
        let duplicate = definitions.iter().any(|d| {
            d.name == definition.name
                && d.game_version == definition.game_version
                && d.tuning == definition.tuning
        });
        if duplicate {
            log::debug!("Tuning '{}' already registered, skipping", definition.name);
            return;
        }
        definitions.push(definition);
    }
}
