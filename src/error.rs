//! Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Zero-length password, or a length above [`crate::MAX_LENGTH`] or
    /// beyond what can be allocated.
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// The OS entropy source could not be read. There is no fallback.
    #[error("secure entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Self {
        Error::EntropyUnavailable(e.to_string())
    }
}
