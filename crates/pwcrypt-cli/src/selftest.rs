//! Known-answer tests exposed through `pwcrypt check`.

use aes_core::{cbc, decrypt_block, encrypt_block, expand_key, Aes256Key, Block};
use anyhow::{bail, ensure, Context, Result};
use digest_core::{hmac_sha256, sha256};
use tracing::info;

struct Vector {
    name: &'static str,
    run: fn() -> Result<()>,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "fips197-c3-aes256-block",
        run: aes_block,
    },
    Vector {
        name: "sp800-38a-f25-cbc-aes256",
        run: aes_cbc,
    },
    Vector {
        name: "fips180-sha256",
        run: sha256_vectors,
    },
    Vector {
        name: "rfc4231-hmac-sha256",
        run: hmac_vectors,
    },
    Vector {
        name: "password-envelope-roundtrip",
        run: envelope_roundtrip,
    },
];

/// Runs every vector, printing one line per result.
pub fn run() -> Result<()> {
    let mut failures = 0;
    for vector in VECTORS {
        match (vector.run)() {
            Ok(()) => {
                info!(vector = vector.name, "known-answer test passed");
                println!("ok   {}", vector.name);
            }
            Err(err) => {
                failures += 1;
                println!("FAIL {}: {err:#}", vector.name);
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} known-answer tests failed", VECTORS.len());
    }
    Ok(())
}

fn decode<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).context("decode vector hex")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("expected {N} bytes, got {}", bytes.len()))
}

fn aes_block() -> Result<()> {
    let key = Aes256Key::from(decode::<32>(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    )?);
    let plain: Block = decode("00112233445566778899aabbccddeeff")?;
    let expected: Block = decode("8ea2b7ca516745bfeafc49904b496089")?;

    let round_keys = expand_key(&key);
    let ct = encrypt_block(&plain, &round_keys);
    ensure!(ct == expected, "encrypt gave {}", hex::encode(ct));
    ensure!(
        decrypt_block(&ct, &round_keys) == plain,
        "decrypt did not invert encrypt"
    );
    Ok(())
}

fn aes_cbc() -> Result<()> {
    let key = Aes256Key::from(decode::<32>(
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
    )?);
    let iv: Block = decode("000102030405060708090a0b0c0d0e0f")?;
    let plain: [u8; 32] =
        decode("6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51")?;
    let expected = "f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d";

    let ct = cbc::encrypt(&key, &iv, &plain);
    ensure!(ct.len() == 48, "unexpected ciphertext length {}", ct.len());
    ensure!(
        hex::encode(&ct[..32]) == expected,
        "ciphertext {}",
        hex::encode(&ct[..32])
    );
    let recovered = cbc::decrypt(&key, &iv, &ct)?;
    ensure!(recovered == plain, "decrypt did not recover plaintext");
    Ok(())
}

fn sha256_vectors() -> Result<()> {
    let cases: [(&[u8], &str); 3] = [
        (
            b"",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            b"abc",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
    ];
    for (input, expected) in cases {
        let actual = hex::encode(sha256(input));
        ensure!(actual == expected, "sha256({input:?}) = {actual}");
    }
    Ok(())
}

fn hmac_vectors() -> Result<()> {
    let actual = hex::encode(hmac_sha256(b"Jefe", b"what do ya want for nothing?"));
    ensure!(
        actual == "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        "case 2 tag {actual}"
    );
    let actual = hex::encode(hmac_sha256(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
    ));
    ensure!(
        actual == "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
        "case 6 tag {actual}"
    );
    Ok(())
}

fn envelope_roundtrip() -> Result<()> {
    let envelope = pwcrypt::encrypt_string("known-answer self test", "check")?;
    let plain = pwcrypt::decrypt_string(&envelope, "check")?;
    ensure!(plain == "known-answer self test", "round trip returned {plain:?}");
    match pwcrypt::decrypt_string(&envelope, "not the password") {
        Ok(text) if text == "known-answer self test" => bail!("wrong password decrypted"),
        _ => Ok(()),
    }
}
