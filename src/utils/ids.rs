//! Identifier sources for descriptors built from scratch

use crate::errors::{ArrangementError, Result};
use uuid::{Builder, Uuid};

/// Supplies fresh identifiers for new arrangements
pub trait IdGenerator {
    fn guid(&mut self) -> Result<Uuid>;

    /// Non-negative pseudo-random integer
    fn next_int(&mut self) -> Result<i32>;
}

/// OS-backed generator (`getrandom` bytes, v4 UUIDs)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf).map_err(|e| ArrangementError::RandomSource(e.to_string()))
}

impl IdGenerator for RandomIds {
    fn guid(&mut self) -> Result<Uuid> {
        let mut bytes = [0u8; 16];
        fill_random(&mut bytes)?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }

    fn next_int(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        fill_random(&mut buf)?;
        Ok((u32::from_le_bytes(buf) >> 1) as i32)
    }
}

/// Deterministic generator for reproducible output
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn starting_at(next: u128) -> Self {
        SequentialIds { next }
    }
}

impl IdGenerator for SequentialIds {
    fn guid(&mut self) -> Result<Uuid> {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        Ok(id)
    }

    fn next_int(&mut self) -> Result<i32> {
        let value = (self.next % i32::MAX as u128) as i32;
        self.next += 1;
        Ok(value)
    }
}
