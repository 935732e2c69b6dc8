//! Constant-time helpers for comparing secret-derived bytes.

/// Returns `true` when `a` and `b` are equal.
///
/// Every byte is examined regardless of where the first difference is. Only
/// the lengths, which are public for MAC tags, influence control flow.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    core::hint::black_box(diff) == 0
}
