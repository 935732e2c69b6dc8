//! Password-based AES-256-CBC encryption and the primitives behind it.
//!
//! The crate ties together:
//! - [`aes_core`]: AES-256 key schedule, block transform, CBC and PKCS7.
//! - [`digest_core`]: SHA-256, HMAC-SHA256 and constant-time comparison.
//! - Hex, base64 and text conversions ([`encoding`]).
//! - An injectable CSPRNG abstraction ([`random`]).
//! - The password envelope API ([`encrypt_string`] / [`decrypt_string`]).
//!
//! Every fallible function returns [`Result`]; errors from the cipher layer
//! surface with their original kind.
//!
//! ```
//! let envelope = pwcrypt::encrypt_string("meet at noon", "correct horse").unwrap();
//! let plain = pwcrypt::decrypt_string(&envelope, "correct horse").unwrap();
//! assert_eq!(plain, "meet at noon");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aes;
pub mod bytes;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod password;
pub mod random;

pub use crate::aes::{aes_decrypt, aes_encrypt, aes_encrypt_with, AesCiphertext};
pub use crate::bytes::ByteLike;
pub use crate::digest::{hmac_sha256, hmac_sha256_hex, sha256, sha256_hex, verify_hmac_sha256};
pub use crate::encoding::{
    base64_to_bytes, bytes_to_base64, bytes_to_hex, bytes_to_string, hex_to_bytes,
    string_to_bytes,
};
pub use crate::error::{Error, Result};
pub use crate::password::{decrypt_string, derive_key, encrypt_string, PasswordCipher};
pub use crate::random::{
    generate_aes_key, generate_aes_key_with, generate_iv, generate_iv_with, random_bytes,
    RandomSource,
};
