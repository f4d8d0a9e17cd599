//! Byte-to-text encoding for keys.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::Encoding;

pub(super) fn encode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Hex => hex::encode(bytes),
        Encoding::Base64 => STANDARD.encode(bytes),
    }
}

/// Output length in characters for `length_bytes` random bytes.
pub fn encoded_len(length_bytes: usize, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Hex => 2 * length_bytes,
        Encoding::Base64 => length_bytes.div_ceil(3) * 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len_matches_output() {
        for n in 0..40 {
            let bytes = vec![0x5a; n];
            for enc in [Encoding::Hex, Encoding::Base64] {
                assert_eq!(encode(&bytes, enc).len(), encoded_len(n, enc), "{n} {enc}");
            }
        }
    }

    #[test]
    fn test_rfc4648_vectors() {
        let cases = [
            ("", ""),
            ("f", "Zg=="),
            ("fo", "Zm8="),
            ("foo", "Zm9v"),
            ("foob", "Zm9vYg=="),
            ("fooba", "Zm9vYmE="),
            ("foobar", "Zm9vYmFy"),
        ];
        for (input, expected) in cases {
            assert_eq!(encode(input.as_bytes(), Encoding::Base64), expected);
        }
        assert_eq!(encode(b"foobar", Encoding::Hex), "666f6f626172");
    }
}
