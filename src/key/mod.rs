//! Random key generation with hex or base64 output.

mod encode;

use std::fmt;

use zeroize::Zeroize;

use crate::{Error, MAX_LENGTH, Result};
use crate::rand::SecureRandomSource;

pub use encode::encoded_len;

/// Text encoding for generated keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hexadecimal, two digits per byte.
    Hex,
    /// RFC 4648 standard alphabet with `=` padding.
    Base64,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => f.write_str("hex"),
            Encoding::Base64 => f.write_str("base64"),
        }
    }
}

/// Draw `length_bytes` random bytes and encode them.
///
/// Zero bytes is valid and yields an empty string. More than `MAX_LENGTH`
/// bytes is rejected.
pub fn generate<R: SecureRandomSource>(
    rng: &R,
    length_bytes: usize,
    encoding: Encoding,
) -> Result<String> {
    if length_bytes > MAX_LENGTH {
        return Err(Error::InvalidLength(length_bytes));
    }

    let mut bytes = rng.next_bytes(length_bytes)?;
    let key = encode::encode(&bytes, encoding);
    bytes.zeroize();

    log::debug!("generated {length_bytes}-byte key as {encoding}");
    Ok(key)
}
