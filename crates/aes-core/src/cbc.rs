//! Cipher block chaining over the AES-256 block transform.
//!
//! Round keys are expanded per call and dropped (and wiped) before returning.

use zeroize::Zeroizing;

use crate::block::{block_from_chunk, xor_in_place, Block, BLOCK_LEN};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::AesError;
use crate::key::Aes256Key;
use crate::padding::{pad, unpad};

/// PKCS7-pads `plaintext` and encrypts it in CBC mode.
pub fn encrypt(key: &Aes256Key, iv: &Block, plaintext: &[u8]) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut data = pad(plaintext);
    let mut prev = *iv;
    for chunk in data.chunks_exact_mut(BLOCK_LEN) {
        let mut block = block_from_chunk(chunk);
        xor_in_place(&mut block, &prev);
        prev = encrypt_block(&block, &round_keys);
        chunk.copy_from_slice(&prev);
    }
    data
}

/// Decrypts CBC ciphertext and strips its PKCS7 padding.
pub fn decrypt(key: &Aes256Key, iv: &Block, ciphertext: &[u8]) -> Result<Vec<u8>, AesError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(AesError::InsufficientData(ciphertext.len()));
    }

    let round_keys = expand_key(key);
    let mut padded = Zeroizing::new(Vec::with_capacity(ciphertext.len()));
    let mut prev = *iv;
    for chunk in ciphertext.chunks_exact(BLOCK_LEN) {
        let block = block_from_chunk(chunk);
        let mut plain = decrypt_block(&block, &round_keys);
        xor_in_place(&mut plain, &prev);
        padded.extend_from_slice(&plain);
        prev = block;
    }

    Ok(unpad(&padded)?.to_vec())
}
