//! Password strength label.
//!
//! A UX heuristic tallying length and character-class points, not an entropy
//! estimate. The thresholds are fixed; changing them changes labels users
//! have already seen.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw 0-6 tally: one point each for length > 8, length > 12, an uppercase
/// letter, a lowercase letter, a digit, and anything that is not an ASCII
/// letter or digit.
pub fn points(password: &str) -> u8 {
    // UTF-16 code units, so astral characters count twice.
    let len = password.encode_utf16().count();
    let has = |f: fn(&char) -> bool| password.chars().any(|c| f(&c));

    [
        len > 8,
        len > 12,
        has(char::is_ascii_uppercase),
        has(char::is_ascii_lowercase),
        has(char::is_ascii_digit),
        has(|c: &char| !c.is_ascii_alphanumeric()),
    ]
    .into_iter()
    .filter(|&p| p)
    .count() as u8
}

/// Classify `password`. Empty input is always `Weak`.
pub fn score(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Weak;
    }

    match points(password) {
        5.. => Strength::Strong,
        3..=4 => Strength::Medium,
        _ => Strength::Weak,
    }
}

/// Entropy in bits of a uniformly random string over `charset_size` symbols.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(points(""), 0);
        assert_eq!(score(""), Strength::Weak);
    }

    #[test]
    fn test_strong() {
        assert_eq!(points("Ab3$longerpassw0rd!"), 6);
        assert_eq!(score("Ab3$longerpassw0rd!"), Strength::Strong);
    }

    #[test]
    fn test_lowercase_only() {
        // length 8: only the lowercase point
        assert_eq!(points("abcdefgh"), 1);
        assert_eq!(score("abcdefgh"), Strength::Weak);
        // length 9: length > 8 plus lowercase
        assert_eq!(points("abcdefghi"), 2);
        assert_eq!(score("abcdefghi"), Strength::Weak);
    }

    #[test]
    fn test_boundaries() {
        // 3 points: length > 8, lower, digit
        assert_eq!(score("abcdefgh1"), Strength::Medium);
        // 4 points: add length > 12
        assert_eq!(score("abcdefghijkl1"), Strength::Medium);
        // 5 points: add upper
        assert_eq!(score("Abcdefghijkl1"), Strength::Strong);
        // short but every class: 4 points
        assert_eq!(score("aB1!"), Strength::Medium);
        // 2 points
        assert_eq!(score("aB"), Strength::Weak);
    }

    #[test]
    fn test_length_thresholds_are_strict() {
        assert_eq!(points("aaaaaaaa"), 1);
        assert_eq!(points("aaaaaaaaa"), 2);
        assert_eq!(points("aaaaaaaaaaaa"), 2);
        assert_eq!(points("aaaaaaaaaaaaa"), 3);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert_eq!(points("é"), 1);
        assert_eq!(points(" "), 1);
        // length counts UTF-16 units, not bytes
        assert_eq!(points("ééééééééé"), 2);
    }

    #[test]
    fn test_astral_chars_count_twice() {
        // 5 emoji are 10 UTF-16 units: length > 8 plus symbol
        assert_eq!(points("😀😀😀😀😀"), 2);
        // 13 units: both length points and all four classes
        assert_eq!(points("😀😀😀😀😀aA1"), 6);
        assert_eq!(score("😀😀😀😀😀aA1"), Strength::Strong);
        // 4 emoji + "a" is 9 units
        assert_eq!(points("😀😀😀😀a"), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(Strength::Weak < Strength::Medium);
        assert!(Strength::Medium < Strength::Strong);
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(entropy_bits(16, 0), 0.0);
        assert_eq!(entropy_bits(10, 2), 10.0);
        assert!((entropy_bits(16, 64) - 96.0).abs() < 1e-9);
    }
}
