//! Renderers module
//!
//! Human-readable presentation of finished descriptors.

pub mod summary;

pub use summary::tone_description;
