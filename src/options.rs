//! Per-call generation options.

use std::fmt;
use std::str::FromStr;

use crate::key::Encoding;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Password,
    KeyHex,
    KeyBase64,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Password => "password",
            Mode::KeyHex => "hex",
            Mode::KeyBase64 => "base64",
        }
    }

    /// Key encoding, or `None` in password mode.
    pub fn encoding(&self) -> Option<Encoding> {
        match self {
            Mode::Password => None,
            Mode::KeyHex => Some(Encoding::Hex),
            Mode::KeyBase64 => Some(Encoding::Base64),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "password" | "pass" | "pw" => Ok(Mode::Password),
            "hex" | "key-hex" => Ok(Mode::KeyHex),
            "base64" | "b64" | "key-base64" => Ok(Mode::KeyBase64),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Options for a single generation call.
///
/// In password mode `length` is a character count; in key modes it is the
/// number of random bytes and the category flags are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub avoid_ambiguous: bool,
}

impl GenerationOptions {
    /// True when at least one character category is enabled.
    pub fn any_category(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            avoid_ambiguous: false,
        }
    }
}
