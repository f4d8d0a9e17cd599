//! Random password and key generation.
//!
//! Passwords are drawn from a pool built out of four fixed character classes;
//! keys are raw random bytes rendered as hex or base64. All randomness comes
//! through a [`SecureRandomSource`], normally [`OsRandom`].
//!
//! ```no_run
//! use randkey::{GenerationOptions, Mode, OsRandom, strength};
//!
//! let opts = GenerationOptions::default();
//! let pass = randkey::generate(&OsRandom, Mode::Password, &opts)?;
//! println!("{pass} ({})", strength::score(&pass));
//! # Ok::<(), randkey::Error>(())
//! ```

mod error;
pub mod key;
mod options;
pub mod pass;
pub mod rand;
pub mod strength;

pub use error::{Error, Result};
pub use key::Encoding;
pub use options::{GenerationOptions, Mode};
pub use rand::{OsRandom, SecureRandomSource};
pub use strength::Strength;

/// Longest password (characters) or key (bytes) a single call will produce.
pub const MAX_LENGTH: usize = 1 << 20;

/// Generate one value for `mode`.
///
/// Password mode uses every field of `options`. Key modes read only
/// `options.length`, as a byte count.
pub fn generate<R: SecureRandomSource>(
    rng: &R,
    mode: Mode,
    options: &GenerationOptions,
) -> Result<String> {
    match mode.encoding() {
        None => pass::generate(rng, options),
        Some(encoding) => key::generate(rng, options.length, encoding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let opts = GenerationOptions {
            length: 12,
            ..Default::default()
        };
        let rng = OsRandom::new();

        assert_eq!(generate(&rng, Mode::Password, &opts).unwrap().len(), 12);
        assert_eq!(generate(&rng, Mode::KeyHex, &opts).unwrap().len(), 24);
        assert_eq!(generate(&rng, Mode::KeyBase64, &opts).unwrap().len(), 16);
    }

    #[test]
    fn test_key_modes_ignore_categories() {
        let opts = GenerationOptions {
            length: 8,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            avoid_ambiguous: true,
        };
        let rng = OsRandom::new();

        assert_eq!(generate(&rng, Mode::Password, &opts).unwrap(), "");
        assert_eq!(generate(&rng, Mode::KeyHex, &opts).unwrap().len(), 16);
    }

    #[test]
    fn test_zero_length_by_mode() {
        let opts = GenerationOptions {
            length: 0,
            ..Default::default()
        };
        let rng = OsRandom::new();

        assert!(matches!(
            generate(&rng, Mode::Password, &opts),
            Err(Error::InvalidLength(0))
        ));
        assert_eq!(generate(&rng, Mode::KeyBase64, &opts).unwrap(), "");
    }

    #[test]
    fn test_dyn_source() {
        let rng: &dyn SecureRandomSource = &OsRandom;
        let opts = GenerationOptions::default();
        assert_eq!(generate(&rng, Mode::Password, &opts).unwrap().len(), 16);
    }
}
