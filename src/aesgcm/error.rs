use rand::rand_core;
use thiserror::Error;

/// AES-GCM Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES-GCM Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Computed authentication tag did not match input tag. Ciphertext, AAD, IV and/or tag
    /// has been modified since it was encrypted. No plaintext is released.
    #[error("GCM authentication failed (invalid tag)")]
    AuthFailed,

    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Declared key size in bits does not match the length of the supplied key bytes.
    #[error("key size mismatch: {bits} bits declared for a {len} byte key")]
    KeyBitsMismatch { bits: usize, len: usize },

    /// GCM requires an IV of at least one byte.
    #[error("invalid IV length: {len} bytes (expected at least 1)")]
    InvalidIvLength { len: usize },

    /// Requested or supplied tag is not between 1 and 16 bytes long.
    #[error("invalid tag length: {len} bytes (expected 1 to 16)")]
    InvalidTagLength { len: usize },

    /// Input exceeds the limits of GCM: plaintext longer than 2^39 - 256 bits, or AAD/IV whose
    /// bit length does not fit in 64 bits.
    #[error("input too long for GCM: {len} bytes ({context})")]
    MessageTooLong { len: usize, context: &'static str },

    /// The context has been wiped and must be rekeyed before use.
    #[error("GCM context has been wiped")]
    ContextWiped,

    /// Provided sealed message that did not match the expected `IV || Ciphertext || Tag` format.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key or IV generation")]
    Rng(#[from] rand_core::OsError),
}
