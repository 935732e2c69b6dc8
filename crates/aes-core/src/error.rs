//! Errors raised by the AES-256 engine.

use thiserror::Error;

/// Failures observed while validating or decrypting AES-256-CBC input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AesError {
    /// Key material was not exactly 32 bytes.
    #[error("AES-256 key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// IV was not exactly 16 bytes.
    #[error("CBC initialization vector must be 16 bytes, got {0}")]
    InvalidIvLength(usize),
    /// Trailing PKCS7 padding was malformed.
    #[error("invalid PKCS7 padding")]
    InvalidPadding,
    /// Ciphertext was empty or not a whole number of blocks.
    #[error("ciphertext length {0} is not a non-zero multiple of 16")]
    InsufficientData(usize),
}
