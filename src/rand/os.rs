//! OS-backed entropy via `getrandom`.

use zeroize::Zeroize;

use super::SecureRandomSource;
use crate::{Error, Result};

/// Stateless handle to the operating system CSPRNG.
///
/// Holds no buffers between calls, so one value can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        OsRandom
    }

    fn fill(buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| {
            log::error!("getrandom failed: {e}");
            e.into()
        })
    }

    /// Zeroed buffer of `len` bytes, or `InvalidLength` if it cannot be
    /// allocated.
    fn zeroed(len: usize, requested: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| Error::InvalidLength(requested))?;
        buf.resize(len, 0);
        Ok(buf)
    }
}

impl SecureRandomSource for OsRandom {
    fn next_u32s(&self, n: usize) -> Result<Vec<u32>> {
        let len = n.checked_mul(4).ok_or(Error::InvalidLength(n))?;
        let mut raw = Self::zeroed(len, n)?;
        Self::fill(&mut raw)?;

        let values = raw
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        raw.zeroize();
        Ok(values)
    }

    fn next_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut bytes = Self::zeroed(n, n)?;
        Self::fill(&mut bytes)?;
        Ok(bytes)
    }
}
