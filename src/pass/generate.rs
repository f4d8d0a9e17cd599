//! Password generation.

use zeroize::Zeroize;

use super::charset;
use crate::options::GenerationOptions;
use crate::rand::SecureRandomSource;
use crate::{Error, MAX_LENGTH, Result};

/// Generate a single password.
///
/// Returns an empty string when `options` leave the pool empty. That is a
/// defined result for the caller to surface, not an error.
///
/// Each character is `pool[v % pool.len()]` for an independent `u32` draw `v`.
/// When the pool size does not divide 2^32 the lower indices are very slightly
/// favoured (under 2^-24 relative for pools this small).
///
/// `length` must be in `1..=MAX_LENGTH`.
pub fn generate<R: SecureRandomSource>(rng: &R, options: &GenerationOptions) -> Result<String> {
    if options.length == 0 || options.length > MAX_LENGTH {
        return Err(Error::InvalidLength(options.length));
    }

    let chars = charset::build(options);
    if chars.is_empty() {
        log::debug!("empty charset pool, returning empty password");
        return Ok(String::new());
    }

    let mut draws = rng.next_u32s(options.length)?;
    let mut buf = Vec::with_capacity(options.length);
    generate_from_charset(&chars, &draws, &mut buf);
    draws.zeroize();

    // Pool is ASCII: one byte per char.
    let pass = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    Ok(pass)
}

/// Generate `count` passwords with the same options.
pub fn generate_batch<R: SecureRandomSource>(
    rng: &R,
    options: &GenerationOptions,
    count: usize,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate(rng, options)).collect()
}

/// Map each draw onto the pool, filling `buf`.
/// Caller owns the buffer and must zeroize it.
#[inline]
fn generate_from_charset(chars: &[u8], draws: &[u32], buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(draws.iter().map(|&v| random_byte(chars, v)));
}

#[inline]
fn random_byte(chars: &[u8], v: u32) -> u8 {
    chars[v as usize % chars.len()]
}
