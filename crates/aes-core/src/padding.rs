//! PKCS7 padding for 16-byte blocks.
//!
//! `unpad` inspects the whole final block with masks and decides once at the
//! end, so its running time does not depend on where the padding is wrong.

use crate::block::BLOCK_LEN;
use crate::error::AesError;

/// `0xff` when `a < b`, otherwise `0x00`.
#[inline]
fn ct_lt(a: u8, b: u8) -> u8 {
    ((u16::from(a).wrapping_sub(u16::from(b))) >> 8) as u8
}

/// Appends 1..=16 padding bytes, each equal to the pad length.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips and validates PKCS7 padding, returning the unpadded prefix.
pub fn unpad(data: &[u8]) -> Result<&[u8], AesError> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(AesError::InsufficientData(data.len()));
    }

    let tail = &data[data.len() - BLOCK_LEN..];
    let pad_len = tail[BLOCK_LEN - 1];

    // pad_len == 0 or pad_len > 16
    let mut bad = ct_lt(pad_len, 1) | ct_lt(BLOCK_LEN as u8, pad_len);
    for (i, &byte) in tail.iter().rev().enumerate() {
        bad |= ct_lt(i as u8, pad_len) & (byte ^ pad_len);
    }

    if bad != 0 {
        return Err(AesError::InvalidPadding);
    }
    Ok(&data[..data.len() - usize::from(pad_len)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_always_adds_bytes() {
        assert_eq!(pad(b""), vec![16u8; 16]);
        let padded = pad(&[0xaa; 16]);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
        let padded = pad(b"YELLOW SUBMARINE!");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[17..], &[15u8; 15]);
        assert_eq!(pad(&[1u8; 15])[15], 1);
    }

    #[test]
    fn unpad_inverts_pad() {
        for len in 0..64 {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(unpad(&pad(&data)).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn unpad_rejects_out_of_range_lengths() {
        let mut block = [0u8; 16];
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));
        block[15] = 17;
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));
        block[15] = 0xff;
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_inconsistent_bytes() {
        let mut block = [4u8; 16];
        block[12] = 3;
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));

        // Bytes outside the claimed padding are ignored.
        let mut block = [4u8; 16];
        block[11] = 9;
        assert_eq!(unpad(&block).unwrap().len(), 12);

        let mut full = [16u8; 16];
        full[0] = 15;
        assert_eq!(unpad(&full), Err(AesError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_partial_blocks() {
        assert_eq!(unpad(&[]), Err(AesError::InsufficientData(0)));
        assert_eq!(unpad(&[1u8; 17]), Err(AesError::InsufficientData(17)));
    }

    #[test]
    fn ct_lt_truth_table() {
        for a in 0u8..=255 {
            for b in [0u8, 1, 16, 17, 255] {
                assert_eq!(ct_lt(a, b) == 0xff, a < b);
            }
        }
    }
}
