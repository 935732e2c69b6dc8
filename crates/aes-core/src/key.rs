//! Key types for AES-256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_LEN};
use crate::error::AesError;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// Number of round keys produced by the AES-256 schedule (14 rounds + initial).
pub const ROUND_KEY_COUNT: usize = 15;

/// AES-256 key wrapper. Wiped from memory when dropped.
///
/// Deliberately not `PartialEq`: keys are never compared with `==`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key([u8; KEY_LEN]);

impl Aes256Key {
    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Aes256Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes256Key {
    type Error = AesError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_LEN] = value
            .try_into()
            .map_err(|_| AesError::InvalidKeyLength(value.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256Key(<redacted>)")
    }
}

/// Parses a 16-byte CBC initialization vector.
pub fn iv_from_slice(value: &[u8]) -> Result<Block, AesError> {
    value
        .try_into()
        .map_err(|_| AesError::InvalidIvLength(value.len()))
}

/// Expanded round keys for AES-256. Write-once, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundKeys(<{} x {} bytes redacted>)", ROUND_KEY_COUNT, BLOCK_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        assert!(Aes256Key::try_from(&[0u8; 32][..]).is_ok());
        assert_eq!(
            Aes256Key::try_from(&[0u8; 16][..]).err(),
            Some(AesError::InvalidKeyLength(16))
        );
        assert_eq!(
            Aes256Key::try_from(&[0u8; 33][..]).err(),
            Some(AesError::InvalidKeyLength(33))
        );
    }

    #[test]
    fn iv_from_slice_checks_length() {
        assert_eq!(iv_from_slice(&[7u8; 16]), Ok([7u8; 16]));
        assert_eq!(iv_from_slice(&[]), Err(AesError::InvalidIvLength(0)));
        assert_eq!(iv_from_slice(&[0u8; 32]), Err(AesError::InvalidIvLength(32)));
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = Aes256Key::from([0xab; 32]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("171"));
        assert!(rendered.contains("redacted"));
    }
}
