use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pwcrypt"));
    cmd.env_remove("PWCRYPT_PASSWORD").env_remove("RUST_LOG");
    cmd
}

fn encrypt_text(text: &str, password: &str) -> String {
    let output = bin()
        .args(["encrypt", "--password", password, "--text", text])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn hash_prints_known_digest() {
    bin()
        .args(["hash", "--text", "abc"])
        .assert()
        .success()
        .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
}

#[test]
fn hmac_accepts_text_and_hex_keys() {
    bin()
        .args(["hmac", "--key", "Jefe", "--text", "what do ya want for nothing?"])
        .assert()
        .success()
        .stdout("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843\n");

    bin()
        .args([
            "hmac",
            "--key-hex",
            "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b",
            "--text",
            "Hi There",
        ])
        .assert()
        .success()
        .stdout("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7\n");
}

#[test]
fn encrypt_then_decrypt_roundtrip() {
    let envelope = encrypt_text("hello from the cli", "pw");
    bin()
        .args(["decrypt", "--password", "pw", "--envelope", &envelope])
        .assert()
        .success()
        .stdout("hello from the cli\n");
}

#[test]
fn password_can_come_from_env() {
    let envelope = encrypt_text("env secret", "from-env");
    bin()
        .env("PWCRYPT_PASSWORD", "from-env")
        .args(["decrypt", "--envelope", &envelope])
        .assert()
        .success()
        .stdout(predicate::str::contains("env secret"));
}

#[test]
fn help_steers_passwords_to_the_environment() {
    for sub in ["encrypt", "decrypt"] {
        bin()
            .args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("prefer PWCRYPT_PASSWORD"))
            .stdout(predicate::str::contains("process list"));
    }
}

#[test]
fn seeded_encrypt_is_reproducible() {
    let run = || {
        bin()
            .args(["encrypt", "--password", "pw", "--text", "x", "--seed", "9"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn wrong_password_fails() {
    let output = bin()
        .args(["encrypt", "--password", "right", "--seed", "5"])
        .args(["--text", "a message long enough to span blocks"])
        .output()
        .unwrap();
    let envelope = String::from_utf8(output.stdout).unwrap();
    bin()
        .args(["decrypt", "--password", "wrong", "--envelope", envelope.trim()])
        .assert()
        .failure();
}

#[test]
fn malformed_envelope_reports_encoding_error() {
    bin()
        .args(["decrypt", "--password", "pw", "--envelope", "%%%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid encoding"));
}

#[test]
fn file_input_and_output_roundtrip() {
    let dir = tempdir().unwrap();
    let plain_path = dir.path().join("plain.bin");
    let sealed_path = dir.path().join("sealed.txt");
    let opened_path = dir.path().join("opened.bin");
    let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    std::fs::write(&plain_path, &payload).unwrap();

    bin()
        .args(["encrypt", "--password", "pw", "--input"])
        .arg(&plain_path)
        .arg("--output")
        .arg(&sealed_path)
        .assert()
        .success();

    bin()
        .args(["decrypt", "--password", "pw", "--input"])
        .arg(&sealed_path)
        .arg("--output")
        .arg(&opened_path)
        .assert()
        .success();

    assert_eq!(std::fs::read(&opened_path).unwrap(), payload);
}

#[test]
fn keygen_prints_key_and_iv() {
    bin()
        .args(["keygen", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^key: [0-9a-f]{64}\niv: [0-9a-f]{32}\n$").unwrap());
}

#[test]
fn check_passes() {
    bin()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok   fips197-c3-aes256-block"))
        .stdout(predicate::str::contains("FAIL").not());
}

#[test]
fn demo_roundtrips() {
    bin()
        .args(["demo", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decrypted:"));
}

#[test]
fn input_sources_are_mutually_exclusive() {
    bin()
        .args(["hash", "--text", "a", "--input", "b"])
        .assert()
        .failure();
    bin().args(["hash"]).assert().failure();
}
