//! AES-256-CBC over caller-supplied keys and IVs.

use aes_core::{cbc, iv_from_slice, Aes256Key, Block};
use rand::rngs::OsRng;
use tracing::trace;

use crate::bytes::ByteLike;
use crate::error::Result;
use crate::random::{generate_iv_with, RandomSource};

/// Ciphertext together with the IV it was produced under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AesCiphertext {
    /// PKCS7-padded CBC ciphertext, a non-zero multiple of 16 bytes.
    pub ciphertext: Vec<u8>,
    /// The 16-byte IV used for the first block.
    pub iv: Block,
}

/// Encrypts `plaintext` under a 32-byte `key`.
///
/// When `iv` is `None` a fresh one is drawn from the operating system CSPRNG.
pub fn aes_encrypt<'a>(
    plaintext: impl Into<ByteLike<'a>>,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<AesCiphertext> {
    aes_encrypt_with(&mut OsRng, plaintext, key, iv)
}

/// Same as [`aes_encrypt`], drawing a missing IV from `rng`.
pub fn aes_encrypt_with<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    plaintext: impl Into<ByteLike<'a>>,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<AesCiphertext> {
    let plaintext = plaintext.into();
    let key = Aes256Key::try_from(key)?;
    let iv = match iv {
        Some(bytes) => iv_from_slice(bytes)?,
        None => generate_iv_with(rng),
    };
    let ciphertext = cbc::encrypt(&key, &iv, plaintext.as_bytes());
    trace!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "aes-256-cbc encrypt"
    );
    Ok(AesCiphertext { ciphertext, iv })
}

/// Decrypts CBC `ciphertext` under `key` and `iv`, then strips the padding.
///
/// Validation order is key length, IV length, ciphertext length, padding.
pub fn aes_decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let key = Aes256Key::try_from(key)?;
    let iv = iv_from_slice(iv)?;
    let plaintext = cbc::decrypt(&key, &iv, ciphertext)?;
    trace!(
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "aes-256-cbc decrypt"
    );
    Ok(plaintext)
}
