//! HMAC-SHA256 (RFC 2104).
//!
//! `HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))`, where `K'` is the key
//! hashed down (if longer than a block) and zero-padded to 64 bytes.

use zeroize::Zeroizing;

use crate::ct::ct_eq;
use crate::sha256::{sha256, Digest, Sha256, BLOCK_LEN, DIGEST_LEN};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Normalizes an arbitrary-length key to one SHA-256 block.
fn block_key(key: &[u8]) -> Zeroizing<[u8; BLOCK_LEN]> {
    let mut k = Zeroizing::new([0u8; BLOCK_LEN]);
    if key.len() > BLOCK_LEN {
        let hashed = Zeroizing::new(sha256(key));
        k[..DIGEST_LEN].copy_from_slice(&hashed[..]);
    } else {
        k[..key.len()].copy_from_slice(key);
    }
    k
}

fn xor_pad(key: &[u8; BLOCK_LEN], pad: u8) -> Zeroizing<[u8; BLOCK_LEN]> {
    Zeroizing::new(key.map(|b| b ^ pad))
}

/// Incremental HMAC-SHA256.
#[derive(Clone)]
pub struct HmacSha256 {
    inner: Sha256,
    outer_pad: Zeroizing<[u8; BLOCK_LEN]>,
}

impl HmacSha256 {
    /// Keys a new MAC. Any key length is accepted.
    pub fn new(key: &[u8]) -> Self {
        let k = block_key(key);
        let mut inner = Sha256::new();
        inner.update(&xor_pad(&k, IPAD)[..]);
        Self {
            inner,
            outer_pad: xor_pad(&k, OPAD),
        }
    }

    /// Absorbs message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Produces the 32-byte tag.
    pub fn finalize(self) -> Digest {
        let inner_digest = self.inner.finalize();
        let mut outer = Sha256::new();
        outer.update(&self.outer_pad[..]);
        outer.update(&inner_digest);
        outer.finalize()
    }
}

/// Computes `HMAC-SHA256(key, message)` in one shot.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    let mut mac = HmacSha256::new(key);
    mac.update(message);
    mac.finalize()
}

/// Recomputes the tag for `message` and compares it to `tag` in constant time.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], tag: &[u8]) -> bool {
    ct_eq(&hmac_sha256(key, message), tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_hex(key: &[u8], data: &[u8]) -> String {
        hex::encode(hmac_sha256(key, data))
    }

    // RFC 4231 test cases.

    #[test]
    fn rfc4231_case1() {
        let key = [0x0b; 20];
        assert_eq!(
            tag_hex(&key, b"Hi There"),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }

    #[test]
    fn rfc4231_case2() {
        assert_eq!(
            tag_hex(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn rfc4231_case3() {
        assert_eq!(
            tag_hex(&[0xaa; 20], &[0xdd; 50]),
            "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe"
        );
    }

    #[test]
    fn rfc4231_case4() {
        let key = hex::decode("0102030405060708090a0b0c0d0e0f10111213141516171819").unwrap();
        assert_eq!(
            tag_hex(&key, &[0xcd; 50]),
            "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b"
        );
    }

    #[test]
    fn rfc4231_case6_long_key() {
        assert_eq!(
            tag_hex(
                &[0xaa; 131],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            ),
            "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
        );
    }

    #[test]
    fn rfc4231_case7_long_key_and_data() {
        let data = b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.";
        assert_eq!(
            tag_hex(&[0xaa; 131], data),
            "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2"
        );
    }

    #[test]
    fn exact_block_key_is_not_hashed() {
        let key = [0x5a; BLOCK_LEN];
        let mut longer = key.to_vec();
        longer.push(0);
        assert_ne!(hmac_sha256(&key, b"m"), hmac_sha256(&longer, b"m"));
        // A long key is equivalent to its digest.
        assert_eq!(hmac_sha256(&longer, b"m"), hmac_sha256(&sha256(&longer), b"m"));
    }

    #[test]
    fn incremental_matches_one_shot() {
        let data = b"Hello, World! This is a test of incremental HMAC.";
        let mut mac = HmacSha256::new(b"secret key");
        mac.update(&data[..13]);
        mac.update(&data[13..]);
        assert_eq!(mac.finalize(), hmac_sha256(b"secret key", data));
    }

    #[test]
    fn verify_accepts_only_the_right_tag() {
        let tag = hmac_sha256(b"k", b"message");
        assert!(verify_hmac_sha256(b"k", b"message", &tag));
        let mut forged = tag;
        forged[31] ^= 1;
        assert!(!verify_hmac_sha256(b"k", b"message", &forged));
        assert!(!verify_hmac_sha256(b"k", b"message", &tag[..16]));
        assert!(!verify_hmac_sha256(b"other", b"message", &tag));
    }
}
