//! Tuning resolution
//!
//! Arrangements carry raw per-string offsets; packaging wants a named tuning.
//! `resolve_tuning` maps one to the other through a `TuningRepository`,
//! registering a custom definition when the catalog has no match.
//!
//! The repository is passed in rather than held globally, so one catalog can
//! be shared across every build in a process, or a fresh one used per test.

pub mod repository;
pub mod resolver;

pub use repository::{TuningCatalog, TuningRepository};
pub use resolver::resolve_tuning;
