//! SHA-256 and HMAC-SHA256 over byte-like inputs.

use digest_core::Digest;

use crate::bytes::ByteLike;

/// SHA-256 digest of `data`.
pub fn sha256<'a>(data: impl Into<ByteLike<'a>>) -> Digest {
    digest_core::sha256(data.into().as_bytes())
}

/// SHA-256 digest of `data` as lowercase hex.
pub fn sha256_hex<'a>(data: impl Into<ByteLike<'a>>) -> String {
    hex::encode(sha256(data))
}

/// HMAC-SHA256 of `message` under `key`.
pub fn hmac_sha256<'k, 'm>(
    key: impl Into<ByteLike<'k>>,
    message: impl Into<ByteLike<'m>>,
) -> Digest {
    digest_core::hmac_sha256(key.into().as_bytes(), message.into().as_bytes())
}

/// HMAC-SHA256 of `message` under `key` as lowercase hex.
pub fn hmac_sha256_hex<'k, 'm>(
    key: impl Into<ByteLike<'k>>,
    message: impl Into<ByteLike<'m>>,
) -> String {
    hex::encode(hmac_sha256(key, message))
}

/// Checks `tag` against the HMAC of `message`, comparing in constant time.
pub fn verify_hmac_sha256<'k, 'm>(
    key: impl Into<ByteLike<'k>>,
    message: impl Into<ByteLike<'m>>,
    tag: &[u8],
) -> bool {
    digest_core::verify_hmac_sha256(key.into().as_bytes(), message.into().as_bytes(), tag)
}
