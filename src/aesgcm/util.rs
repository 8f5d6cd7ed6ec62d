use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aesgcm::error::*;

/// Length of the recommended (fast path) GCM IV in bytes.
pub const NONCE_LEN: usize = 12;

/// Draws a random 96-bit IV from the OS RNG.
///
/// **Important**: the same IV must never be reused with the same key. 96 bits is
/// sufficiently large to assume uniqueness when randomly generated, up to around 2^32
/// messages per key.
pub fn random_iv() -> Result<[u8; NONCE_LEN]> {
    let mut iv = [0u8; NONCE_LEN];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}
