//! SHA-256 and HMAC-SHA256 implemented from FIPS 180-4 and RFC 2104.
//!
//! Both primitives offer a whole-input function ([`sha256`], [`hmac_sha256`])
//! and an incremental type. Tag verification goes through [`ct_eq`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ct;
pub mod hmac;
pub mod sha256;

pub use crate::ct::ct_eq;
pub use crate::hmac::{hmac_sha256, verify_hmac_sha256, HmacSha256};
pub use crate::sha256::{sha256, Digest, Sha256, BLOCK_LEN, DIGEST_LEN};
