//! Models module for song package arrangements
//!
//! This module contains the manifest-side input records and the
//! arrangement descriptor produced from them.

pub mod arrangement;
pub mod attributes;
pub mod enums;
pub mod tuning;

// Re-export commonly used types
pub use arrangement::{Arrangement, SongData, SongDataLoader, ToneSlots, DEFAULT_TUNING_PITCH};
pub use attributes::{ArrangementProperties, Attributes2014, Manifest, ManifestEntry, ToneEntry};
pub use enums::*;
pub use tuning::{TuningDefinition, TuningStrings};
