use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Log each operation at debug level (RUST_LOG overrides).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output, printing the IV and tag
    Encrypt(EncryptArgs),

    /// Verify and decrypt input to output
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (raw 16, 24, or 32 byte key).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// Additional authenticated data, provided as hex string (optional)
    #[arg(long = "aad", value_name = "HEX")]
    pub aad: Option<String>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
        requires = "gen_key"
    )]
    pub key_size: KeySize,

    /// IV as hex string. A random 12 byte IV is generated if omitted.
    #[arg(long = "iv", value_name = "HEX")]
    pub iv: Option<String>,

    /// Tag length in bytes (1 to 16).
    #[arg(long = "tag-len", default_value_t = 16)]
    pub tag_len: usize,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// IV used for encryption, as hex string.
    #[arg(long = "iv", value_name = "HEX")]
    pub iv: String,

    /// Authentication tag, as hex string. Its length sets the tag length.
    #[arg(long = "tag", value_name = "HEX")]
    pub tag: String,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aesgcm::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aesgcm::KeySize::Bits128,
            KeySize::Bits192 => aesgcm::KeySize::Bits192,
            KeySize::Bits256 => aesgcm::KeySize::Bits256,
        }
    }
}
