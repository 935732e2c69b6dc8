//! AES round transformations over the column-major 4x4 state.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Source index for each output byte of ShiftRows (row `r` rotates left by `r`).
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Source index for each output byte of InvShiftRows.
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

#[inline]
fn permute(state: &mut Block, map: &[usize; 16]) {
    let src = *state;
    for (dst, &idx) in state.iter_mut().zip(map.iter()) {
        *dst = src[idx];
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    permute(state, &SHIFT_ROWS);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    permute(state, &INV_SHIFT_ROWS);
}

/// Multiplication by `x` in GF(2^8), without branching on the operand.
#[inline]
fn xtime(byte: u8) -> u8 {
    let reduce = 0u8.wrapping_sub(byte >> 7) & 0x1b;
    (byte << 1) ^ reduce
}

/// General GF(2^8) multiply with a public constant `b`.
#[inline]
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        product ^= 0u8.wrapping_sub(b & 1) & a;
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    state.chunks_exact_mut(4).for_each(mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    state.chunks_exact_mut(4).for_each(inv_mix_single_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn mix_columns_matches_known_column() {
        // Classic worked example: db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        state[4..8].copy_from_slice(&[0xf2, 0x0a, 0x22, 0x5c]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0x9f, 0xdc, 0x58, 0x9d]);
    }

    #[test]
    fn shift_rows_moves_row_r_by_r() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        // Row 0 is unchanged, row 1 reads from the next column, and so on.
        assert_eq!([state[0], state[4], state[8], state[12]], [0, 4, 8, 12]);
        assert_eq!([state[1], state[5], state[9], state[13]], [5, 9, 13, 1]);
        assert_eq!([state[2], state[6], state[10], state[14]], [10, 14, 2, 6]);
        assert_eq!([state[3], state[7], state[11], state[15]], [15, 3, 7, 11]);
    }

    #[test]
    fn inverse_transforms_undo_forward_ones() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..64 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn gmul_agrees_with_repeated_xtime() {
        for a in 0u8..=255 {
            assert_eq!(gmul(a, 0x02), xtime(a));
            assert_eq!(gmul(a, 0x03), xtime(a) ^ a);
            assert_eq!(gmul(a, 0x01), a);
        }
    }
}
