//! Error taxonomy shared by every fallible operation in the crate.

use aes_core::AesError;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a cryptographic or encoding operation rejected its input.
///
/// Lower-level failures keep their identity when they surface here, so a
/// wrong password (`InvalidPadding`) stays distinguishable from a corrupted
/// envelope (`InvalidEncoding`).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Key material was not exactly 32 bytes.
    #[error("AES-256 key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// IV was not exactly 16 bytes.
    #[error("initialization vector must be 16 bytes, got {0}")]
    InvalidIvLength(usize),
    /// PKCS7 padding did not validate after decryption.
    #[error("invalid PKCS7 padding")]
    InvalidPadding,
    /// Hex, base64 or envelope framing was malformed.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    /// Ciphertext was empty or not a whole number of blocks.
    #[error("ciphertext length {0} is not a non-zero multiple of 16")]
    InsufficientData(usize),
}

impl From<AesError> for Error {
    fn from(err: AesError) -> Self {
        match err {
            AesError::InvalidKeyLength(len) => Error::InvalidKeyLength(len),
            AesError::InvalidIvLength(len) => Error::InvalidIvLength(len),
            AesError::InvalidPadding => Error::InvalidPadding,
            AesError::InsufficientData(len) => Error::InsufficientData(len),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidEncoding(format!("hex: {err}"))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidEncoding(format!("base64: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_errors_keep_their_kind() {
        assert_eq!(Error::from(AesError::InvalidPadding), Error::InvalidPadding);
        assert_eq!(
            Error::from(AesError::InsufficientData(5)),
            Error::InsufficientData(5)
        );
        assert_eq!(
            Error::from(AesError::InvalidKeyLength(16)),
            Error::InvalidKeyLength(16)
        );
        assert_eq!(
            Error::from(AesError::InvalidIvLength(8)),
            Error::InvalidIvLength(8)
        );
    }

    #[test]
    fn messages_mention_lengths() {
        assert_eq!(
            Error::InvalidKeyLength(31).to_string(),
            "AES-256 key must be 32 bytes, got 31"
        );
        assert!(Error::InvalidEncoding("hex: odd".into())
            .to_string()
            .starts_with("invalid encoding"));
    }
}
