//! Secure random source used for keys and IVs.
//!
//! Any `rand` generator that carries the [`CryptoRng`] marker can serve as a
//! source, which keeps statistical PRNGs out by construction. Production
//! paths use [`OsRng`]; tests inject a seeded `ChaCha20Rng`.

use aes_core::{Block, BLOCK_LEN, KEY_LEN};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// A cryptographically secure byte source.
pub trait RandomSource {
    /// Fills `dest` with random bytes. Failure of the underlying source is fatal.
    fn fill(&mut self, dest: &mut [u8]);

    /// Returns `len` fresh random bytes.
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(&mut out);
        out
    }
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}

/// Returns `len` bytes from the operating system CSPRNG.
pub fn random_bytes(len: usize) -> Vec<u8> {
    OsRng.random_bytes(len)
}

/// Draws a fresh AES-256 key from `rng`.
pub fn generate_aes_key_with<R: RandomSource + ?Sized>(rng: &mut R) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rng.fill(&mut key);
    key
}

/// Draws a fresh CBC initialization vector from `rng`.
pub fn generate_iv_with<R: RandomSource + ?Sized>(rng: &mut R) -> Block {
    let mut iv = [0u8; BLOCK_LEN];
    rng.fill(&mut iv);
    iv
}

/// Draws a fresh AES-256 key from the operating system CSPRNG.
pub fn generate_aes_key() -> [u8; KEY_LEN] {
    generate_aes_key_with(&mut OsRng)
}

/// Draws a fresh CBC initialization vector from the operating system CSPRNG.
pub fn generate_iv() -> Block {
    generate_iv_with(&mut OsRng)
}
