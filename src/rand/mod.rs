//! Secure random number generation.
//!
//! Everything that needs randomness takes a [`SecureRandomSource`] so the
//! entropy source stays an explicit, injectable capability. [`OsRandom`] is
//! the only production implementation.

mod os;

#[cfg(test)]
pub(crate) mod fake;

use crate::Result;

pub use os::OsRandom;

/// Uniform random draws backed by a cryptographically secure generator.
///
/// Implementations must never degrade to a non-cryptographic generator. If
/// the underlying source is unavailable, return an error.
pub trait SecureRandomSource {
    /// `n` independent draws, each uniform over `[0, 2^32)`.
    fn next_u32s(&self, n: usize) -> Result<Vec<u32>>;

    /// `n` independent bytes, each uniform over `[0, 256)`.
    fn next_bytes(&self, n: usize) -> Result<Vec<u8>>;
}

impl<S: SecureRandomSource + ?Sized> SecureRandomSource for &S {
    fn next_u32s(&self, n: usize) -> Result<Vec<u32>> {
        (**self).next_u32s(n)
    }

    fn next_bytes(&self, n: usize) -> Result<Vec<u8>> {
        (**self).next_bytes(n)
    }
}

/// Name of the production entropy source, for display.
pub fn entropy_source() -> &'static str {
    "getrandom (OS CSPRNG)"
}
