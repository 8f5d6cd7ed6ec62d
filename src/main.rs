mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use aesgcm::{GcmContext, Key};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --{arg} hex: {source}")]
    InvalidHex {
        arg: &'static str,
        source: std::num::ParseIntError,
    },

    #[error("invalid --{arg} hex: odd number of digits")]
    OddHex { arg: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aesgcm::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match aes_cli(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "aesgcm failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn aes_cli(args: Cli) -> Result<(), CliError> {
    match args.command {
        Commands::Encrypt(enc) => {
            let common = enc.common;

            let plaintext = fs::read(&common.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let key = Key::random(enc.key_size.into())?;
                fs::write(&common.key, key.as_bytes())?;
                info!(path = %common.key.display(), "wrote generated key");
                key
            } else {
                Key::try_from_slice(&fs::read(&common.key)?)?
            };

            let aad = parse_hex_opt("aad", common.aad.as_deref())?;
            let iv = match enc.iv {
                Some(iv) => parse_hex("iv", &iv)?,
                None => aesgcm::random_iv()?.to_vec(),
            };

            let ctx = GcmContext::new(&key);
            let start = Instant::now();
            let (ciphertext, tag) = ctx.encrypt_and_tag(&plaintext, &iv, &aad, enc.tag_len)?;
            let duration = start.elapsed();

            fs::write(&common.output, &ciphertext)?;
            println!("IV  = {}", to_hex(&iv));
            println!("Tag = {tag:x}");
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(dec) => {
            let common = dec.common;

            let ciphertext = fs::read(&common.input)?;
            let key = Key::try_from_slice(&fs::read(&common.key)?)?;
            let aad = parse_hex_opt("aad", common.aad.as_deref())?;
            let iv = parse_hex("iv", &dec.iv)?;
            let tag = parse_hex("tag", &dec.tag)?;

            let ctx = GcmContext::new(&key);
            let start = Instant::now();
            // nothing is written unless the tag verifies
            let plaintext = ctx.decrypt_and_verify(&ciphertext, &iv, &aad, &tag)?;
            let duration = start.elapsed();

            fs::write(&common.output, &plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn parse_hex_opt(arg: &'static str, s: Option<&str>) -> Result<Vec<u8>, CliError> {
    match s {
        Some(s) => parse_hex(arg, s),
        None => Ok(Vec::new()),
    }
}

fn parse_hex(arg: &'static str, s: &str) -> Result<Vec<u8>, CliError> {
    let hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if hex.len() % 2 == 1 {
        return Err(CliError::OddHex { arg });
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|source| CliError::InvalidHex { arg, source })
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
