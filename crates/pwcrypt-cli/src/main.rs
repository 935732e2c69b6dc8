//! Command-line interface for `pwcrypt-rs`.

#![forbid(unsafe_code)]

mod selftest;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use pwcrypt::{
    bytes_to_hex, generate_aes_key_with, generate_iv_with, hex_to_bytes, hmac_sha256_hex,
    sha256_hex, PasswordCipher,
};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Password-based AES-256-CBC envelopes, SHA-256 and HMAC-SHA256.
#[derive(Parser)]
#[command(
    name = "pwcrypt",
    version,
    author,
    about = "Password-based AES-256-CBC envelopes, SHA-256 and HMAC-SHA256"
)]
struct Cli {
    /// Log at debug level (otherwise RUST_LOG, defaulting to warn).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Message source: inline text or a file.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Inline text input.
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,
    /// Read input bytes from a file.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

/// Envelope source: inline base64 or a file holding it.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct EnvelopeArgs {
    /// Base64 envelope.
    #[arg(long, value_name = "BASE64")]
    envelope: Option<String>,
    /// Read the envelope from a file.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

/// HMAC key: text or hex.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key given as text.
    #[arg(long, value_name = "TEXT")]
    key: Option<String>,
    /// Key given as hex.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text or a file into a base64 envelope.
    Encrypt {
        /// Password the key is derived from; prefer PWCRYPT_PASSWORD, since argv is visible in the process list.
        #[arg(long, env = "PWCRYPT_PASSWORD", hide_env_values = true)]
        password: String,
        #[command(flatten)]
        source: InputArgs,
        /// Write the envelope here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Seed the IV generator (reproducible output; testing only).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt a base64 envelope.
    Decrypt {
        /// Password the key is derived from; prefer PWCRYPT_PASSWORD, since argv is visible in the process list.
        #[arg(long, env = "PWCRYPT_PASSWORD", hide_env_values = true)]
        password: String,
        #[command(flatten)]
        source: EnvelopeArgs,
        /// Write the plaintext bytes here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the SHA-256 digest as hex.
    Hash {
        #[command(flatten)]
        source: InputArgs,
    },
    /// Print the HMAC-SHA256 tag as hex.
    Hmac {
        #[command(flatten)]
        key: KeyArgs,
        #[command(flatten)]
        source: InputArgs,
    },
    /// Generate a random AES-256 key and IV, printed as hex.
    Keygen {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the built-in known-answer tests.
    Check,
    /// Run a local demo: random password and message, encrypt then decrypt.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Encrypt {
            password,
            source,
            output,
            seed,
        } => cmd_encrypt(&password, &source, output.as_deref(), seed),
        Commands::Decrypt {
            password,
            source,
            output,
        } => cmd_decrypt(&password, &source, output.as_deref()),
        Commands::Hash { source } => cmd_hash(&source),
        Commands::Hmac { key, source } => cmd_hmac(&key, &source),
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Check => selftest::run(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_encrypt(
    password: &str,
    source: &InputArgs,
    output: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let data = read_input(source)?;
    let mut cipher = PasswordCipher::with_rng(seeded_rng(seed));
    let envelope = cipher
        .encrypt_bytes(&data, password)
        .context("encrypt input")?;
    match output {
        Some(path) => {
            fs::write(path, &envelope).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{envelope}"),
    }
    Ok(())
}

fn cmd_decrypt(password: &str, source: &EnvelopeArgs, output: Option<&Path>) -> Result<()> {
    let envelope = match (&source.envelope, &source.input) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        (None, None) => bail!("an envelope or input file is required"),
    };
    let plaintext = PasswordCipher::new()
        .decrypt_bytes(envelope.trim(), password)
        .context("decrypt envelope")?;
    debug!(plaintext_len = plaintext.len(), "envelope opened");

    match output {
        Some(path) => {
            fs::write(path, &plaintext).with_context(|| format!("write {}", path.display()))?
        }
        None => {
            let text = String::from_utf8(plaintext)
                .context("plaintext is not UTF-8; use --output to write raw bytes")?;
            println!("{text}");
        }
    }
    Ok(())
}

fn cmd_hash(source: &InputArgs) -> Result<()> {
    let data = read_input(source)?;
    println!("{}", sha256_hex(&data));
    Ok(())
}

fn cmd_hmac(key: &KeyArgs, source: &InputArgs) -> Result<()> {
    let key_bytes = match (&key.key, &key.key_hex) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(hex_key)) => hex_to_bytes(hex_key.trim()).context("decode key hex")?,
        (None, None) => bail!("a key is required"),
    };
    let data = read_input(source)?;
    println!("{}", hmac_sha256_hex(&key_bytes, &data));
    Ok(())
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key = generate_aes_key_with(&mut rng);
    let iv = generate_iv_with(&mut rng);
    println!("key: {}", bytes_to_hex(&key));
    println!("iv: {}", bytes_to_hex(&iv));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut password_bytes = [0u8; 12];
    rng.fill_bytes(&mut password_bytes);
    let password = hex::encode(password_bytes);
    let mut message_bytes = [0u8; 24];
    rng.fill_bytes(&mut message_bytes);
    let message = hex::encode(message_bytes);

    let mut cipher = PasswordCipher::with_rng(ChaCha20Rng::from_seed(derive_seed(&mut rng)));
    let envelope = cipher.encrypt_string(&message, &password)?;
    let decrypted = cipher.decrypt_string(&envelope, &password)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "demo password: {password}")?;
    writeln!(stdout, "plaintext: {message}")?;
    writeln!(stdout, "envelope: {envelope}")?;
    writeln!(stdout, "decrypted: {decrypted}")?;
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn read_input(source: &InputArgs) -> Result<Vec<u8>> {
    match (&source.text, &source.input) {
        (Some(text), _) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display())),
        (None, None) => bail!("either --text or --input is required"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

fn derive_seed(rng: &mut (impl RngCore + CryptoRng)) -> [u8; 32] {
    let mut seed_bytes = [0u8; 32];
    rng.fill_bytes(&mut seed_bytes);
    seed_bytes
}
