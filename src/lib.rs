//! Song Package Arrangement Module
//!
//! Builds validated arrangement descriptors for rhythm-game song packages
//! from a manifest attribute record and its XML song document, reconciling
//! the tuning and tone data the two sources disagree on.

pub mod builder;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod song_xml;
pub mod tones;
pub mod tuning;
pub mod utils;

// Re-export commonly used types
pub use builder::{ArrangementBuilder, BuildOptions};
pub use errors::{ArrangementError, Result, SongXmlError};
pub use models::{
    Arrangement, ArrangementName, ArrangementType, Attributes2014, GameVersion, Manifest,
    Metronome, PluckedType, RouteMask, ToneEntry, ToneSlots, TuningDefinition, TuningStrings,
};
pub use song_xml::{SongDocument, WriteMode, XmlTone};
pub use tuning::{resolve_tuning, TuningCatalog, TuningRepository};
