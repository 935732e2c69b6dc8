//! Byte-like inputs accepted at the public boundary.

/// Either text or raw bytes, normalized to bytes as soon as it is received.
///
/// Text is taken byte-for-byte from its UTF-8 representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteLike<'a> {
    /// A string slice.
    Text(&'a str),
    /// Raw bytes.
    Bytes(&'a [u8]),
}

impl<'a> ByteLike<'a> {
    /// Returns the normalized byte view.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            ByteLike::Text(text) => text.as_bytes(),
            ByteLike::Bytes(bytes) => bytes,
        }
    }

    /// Number of bytes after normalization.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the normalized input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for ByteLike<'a> {
    fn from(value: &'a str) -> Self {
        ByteLike::Text(value)
    }
}

impl<'a> From<&'a String> for ByteLike<'a> {
    fn from(value: &'a String) -> Self {
        ByteLike::Text(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for ByteLike<'a> {
    fn from(value: &'a [u8]) -> Self {
        ByteLike::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteLike<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        ByteLike::Bytes(value.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteLike<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        ByteLike::Bytes(value.as_slice())
    }
}
