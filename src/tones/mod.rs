//! Tone declarations
//!
//! A manifest names tones three ways: the `Tones` collection, the discrete
//! `Tone_Base`/`Tone_A`..`Tone_D` fields, and the `<tones>` list in the XML
//! song. `format` decides which schema a record uses and rejects legacy
//! records carrying slot data; `reconcile` makes the XML tone list agree
//! with the manifest.

pub mod format;
pub mod reconcile;

pub use format::{legacy_tones, ToneFormat};
pub use reconcile::{reconcile_tones, ToneReconciliation};
