//! Conversions between text, bytes, hexadecimal and base64.
//!
//! Hex output is lowercase; hex input accepts either case. Base64 uses the
//! standard alphabet with canonical `=` padding, and rejects anything else.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::bytes::ByteLike;
use crate::error::Result;

/// Text to bytes, via the string's UTF-8 representation.
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Bytes to text. Never fails: sequences that are not UTF-8 become U+FFFD.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Lowercase hexadecimal rendering.
pub fn bytes_to_hex<'a>(data: impl Into<ByteLike<'a>>) -> String {
    hex::encode(data.into().as_bytes())
}

/// Parses hexadecimal. Odd lengths and non-hex characters are rejected.
pub fn hex_to_bytes(encoded: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(encoded)?)
}

/// Standard padded base64 rendering.
pub fn bytes_to_base64<'a>(data: impl Into<ByteLike<'a>>) -> String {
    STANDARD.encode(data.into().as_bytes())
}

/// Parses standard padded base64.
pub fn base64_to_bytes(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
