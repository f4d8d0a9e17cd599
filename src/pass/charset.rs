//! Character pool construction for password generation.

use crate::options::GenerationOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Characters that are easy to confuse visually.
pub const AMBIGUOUS: &[u8] = b"0OIl1";

/// Build the character pool for `options`.
///
/// Enabled categories are concatenated upper, lower, digits, symbols. The pool
/// is not deduplicated: a character listed twice would be picked twice as
/// often. The categories are disjoint today, so this never happens.
///
/// Returns an empty pool when no category is enabled.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size_upper_bound());

    if options.uppercase {
        chars.extend(UPPERCASE.bytes());
    }

    if options.lowercase {
        chars.extend(LOWERCASE.bytes());
    }

    if options.numbers {
        chars.extend(DIGITS.bytes());
    }

    if options.symbols {
        chars.extend(SYMBOLS.bytes());
    }

    if options.avoid_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    log::trace!("charset pool built: {} chars", chars.len());
    chars
}

/// Pool size for `options` (for entropy calculation).
pub fn size(options: &GenerationOptions) -> usize {
    build(options).len()
}

const fn size_upper_bound() -> usize {
    UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len()
}
