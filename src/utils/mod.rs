//! Utility modules

pub mod ids;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
