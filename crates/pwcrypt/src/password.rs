//! Password-based string encryption.
//!
//! Envelope format: `base64(IV || AES-256-CBC(SHA-256(password), IV, PKCS7(plaintext)))`.
//!
//! The key is a single unsalted SHA-256 pass over the password and the
//! envelope carries no MAC. Both properties are part of the existing wire
//! format; changing either breaks envelopes already in circulation.

use aes_core::{cbc, Aes256Key, BLOCK_LEN};
use rand::rngs::OsRng;
use tracing::debug;

use crate::bytes::ByteLike;
use crate::encoding::{base64_to_bytes, bytes_to_base64, bytes_to_string};
use crate::error::{Error, Result};
use crate::random::{generate_iv_with, RandomSource};

/// Derives the AES-256 key for `password` (`SHA-256(password)`).
pub fn derive_key<'a>(password: impl Into<ByteLike<'a>>) -> Aes256Key {
    Aes256Key::from(digest_core::sha256(password.into().as_bytes()))
}

/// Encrypts and decrypts envelopes, drawing IVs from an injected source.
#[derive(Debug, Default)]
pub struct PasswordCipher<R = OsRng> {
    rng: R,
}

impl PasswordCipher<OsRng> {
    /// Cipher backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RandomSource> PasswordCipher<R> {
    /// Cipher drawing IVs from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a mutable reference to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Encrypts raw bytes into a base64 envelope.
    pub fn encrypt_bytes<'a>(
        &mut self,
        plaintext: impl Into<ByteLike<'a>>,
        password: &str,
    ) -> Result<String> {
        let plaintext = plaintext.into();
        let key = derive_key(password);
        let iv = generate_iv_with(&mut self.rng);
        let ciphertext = cbc::encrypt(&key, &iv, plaintext.as_bytes());

        let mut envelope = Vec::with_capacity(BLOCK_LEN + ciphertext.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);
        let encoded = bytes_to_base64(&envelope);
        debug!(
            plaintext_len = plaintext.len(),
            envelope_len = encoded.len(),
            "encrypted envelope"
        );
        Ok(encoded)
    }

    /// Encrypts text into a base64 envelope.
    pub fn encrypt_string(&mut self, plaintext: &str, password: &str) -> Result<String> {
        self.encrypt_bytes(plaintext, password)
    }

    /// Opens an envelope and returns the raw plaintext bytes.
    pub fn decrypt_bytes(&self, encoded: &str, password: &str) -> Result<Vec<u8>> {
        open_envelope(encoded, password).inspect_err(|err| {
            debug!(error = %err, envelope_len = encoded.len(), "envelope rejected");
        })
    }

    /// Opens an envelope whose plaintext is text.
    ///
    /// Once the padding checks out the text step cannot fail; bytes that are
    /// not UTF-8 come back as U+FFFD. Only framing problems are reported as
    /// `InvalidEncoding`.
    pub fn decrypt_string(&self, encoded: &str, password: &str) -> Result<String> {
        let bytes = self.decrypt_bytes(encoded, password)?;
        Ok(bytes_to_string(&bytes))
    }
}

fn open_envelope(encoded: &str, password: &str) -> Result<Vec<u8>> {
    let raw = base64_to_bytes(encoded)?;
    if raw.len() < BLOCK_LEN {
        return Err(Error::InvalidEncoding(format!(
            "envelope is {} bytes, shorter than the {BLOCK_LEN}-byte IV",
            raw.len()
        )));
    }
    let (iv, ciphertext) = raw.split_at(BLOCK_LEN);
    let iv = aes_core::iv_from_slice(iv)?;
    let key = derive_key(password);
    let plaintext = cbc::decrypt(&key, &iv, ciphertext)?;
    debug!(plaintext_len = plaintext.len(), "decrypted envelope");
    Ok(plaintext)
}

/// Encrypts `plaintext` under `password` using the operating system CSPRNG.
pub fn encrypt_string(plaintext: &str, password: &str) -> Result<String> {
    PasswordCipher::new().encrypt_string(plaintext, password)
}

/// Decrypts an envelope produced by [`encrypt_string`].
pub fn decrypt_string(encoded: &str, password: &str) -> Result<String> {
    PasswordCipher::new().decrypt_string(encoded, password)
}
