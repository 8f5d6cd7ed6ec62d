//! AES-GCM authenticated encryption (NIST SP 800-38D) for 128, 192, and 256-bit keys.
//!
//! A [GcmContext] is built once per key and then used for any number of
//! [encrypt_and_tag](GcmContext::encrypt_and_tag) and
//! [decrypt_and_verify](GcmContext::decrypt_and_verify) calls. IVs of any non-zero length
//! are accepted, and tags may be truncated to between 1 and 16 bytes.
//!
//! **Important**: never encrypt two messages under the same key and IV. Use
//! [seal](GcmContext::seal) to have a random 96-bit IV generated for each message.
//!
//! ```
//! # fn main() -> aesgcm::Result<()> {
//! use aesgcm::GcmContext;
//!
//! let ctx = GcmContext::with_key_bits(&[0x42; 32], 256)?;
//! let sealed = ctx.seal(b"secret", b"public header")?;
//! assert_eq!(ctx.open(&sealed, b"public header")?, b"secret");
//! # Ok(())
//! # }
//! ```

mod aesgcm;

pub use aesgcm::{
    Direction, Error, GcmContext, GcmStream, Key, KeySize, NONCE_LEN, PARALLEL_THRESHOLD,
    Result, TAG_LEN, Tag, random_iv,
};
