//! AES-256 (FIPS-197) with CBC chaining and PKCS7 padding.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-256 (14 rounds, 15 round keys).
//! - Single-block encryption and decryption.
//! - CBC encryption/decryption over PKCS7-padded buffers.
//!
//! S-box lookups are table-based and therefore not hardened against cache
//! timing. Padding validation is branch-free over the final block.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
pub mod cbc;
mod cipher;
mod error;
mod key;
pub mod padding;
pub mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, ROUNDS};
pub use crate::error::AesError;
pub use crate::key::{iv_from_slice, Aes256Key, RoundKeys, KEY_LEN, ROUND_KEY_COUNT};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
