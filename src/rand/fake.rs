//! Deterministic sources for tests.

use std::cell::Cell;

use super::SecureRandomSource;
use crate::{Error, Result};

/// Replays a fixed list of values, wrapping around at the end.
pub struct Sequence {
    values: Vec<u32>,
    pos: Cell<usize>,
}

impl Sequence {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            pos: Cell::new(0),
        }
    }

    fn next(&self) -> u32 {
        let i = self.pos.get();
        self.pos.set(i + 1);
        self.values[i % self.values.len()]
    }
}

impl SecureRandomSource for Sequence {
    fn next_u32s(&self, n: usize) -> Result<Vec<u32>> {
        Ok((0..n).map(|_| self.next()).collect())
    }

    fn next_bytes(&self, n: usize) -> Result<Vec<u8>> {
        Ok((0..n).map(|_| self.next() as u8).collect())
    }
}

/// Always fails, like a host with no entropy device.
pub struct Exhausted;

impl SecureRandomSource for Exhausted {
    fn next_u32s(&self, _: usize) -> Result<Vec<u32>> {
        Err(Error::EntropyUnavailable("no entropy device".into()))
    }

    fn next_bytes(&self, _: usize) -> Result<Vec<u8>> {
        Err(Error::EntropyUnavailable("no entropy device".into()))
    }
}
