use crate::aesgcm::core::encrypt_block;
use crate::aesgcm::error::*;
use crate::aesgcm::modes::ghash::{Ghash, GhashKey};
use crate::aesgcm::modes::util::{MAX_BIT_LEN_BYTES, MAX_TEXT_LEN, check_len, xor_chunks};

/*
https://csrc.nist.rip/groups/ST/toolkit/BCM/documents/proposedmodes/gcm/gcm-spec.pdf
diagram on page 5

H = block of 0s encrypted with key
start with accumulator s = 0
for each 16-byte block b:
    s = (s ^ b) * H (GF128 multiplication)

where blocks are:
    - all AAD blocks (padded)
    - all ciphertext blocks (padded)
    - one block comprised aad.len || ct.len

final tag = s ^ encrypt_block(J0, key)

where J0 is:
    - IV || 1u32 for a 96-bit IV
    - GHASH(IV (padded) || 0^64 || iv.len) for any other IV length
*/

/// Pre-counter block J0. 96-bit IVs take the fast path; every other length is hashed.
pub fn derive_j0(ghash_key: &GhashKey, iv: &[u8]) -> [u8; 16] {
    if iv.len() == 12 {
        let mut j0 = [0u8; 16];
        j0[..12].copy_from_slice(iv);
        j0[15] = 1;
        j0
    } else {
        let mut ghash = Ghash::new(ghash_key);
        ghash.update(iv);
        ghash.finalize(0, bit_len(iv.len()))
    }
}

/// Function to compute the full 16-byte GCM tag from ciphertext + AAD
pub fn compute_tag(
    ciphertext: &[u8],
    round_keys: &[[u8; 16]],
    ghash_key: &GhashKey,
    j0: &[u8; 16],
    aad: &[u8],
) -> [u8; 16] {
    let mut ghash = Ghash::new(ghash_key);
    ghash.update(aad);
    ghash.pad();
    ghash.update(ciphertext);
    let s = ghash.finalize(bit_len(aad.len()), bit_len(ciphertext.len()));

    // tag = E(K, J0) ^ S
    finish_tag(&s, round_keys, j0)
}

pub(crate) fn finish_tag(s: &[u8; 16], round_keys: &[[u8; 16]], j0: &[u8; 16]) -> [u8; 16] {
    xor_chunks(s, &encrypt_block(j0, round_keys))
}

/// Validates the IV, AAD, and text lengths shared by every GCM entry point.
pub(crate) fn check_inputs(iv: &[u8], aad: &[u8], text_len: usize) -> Result<()> {
    if iv.is_empty() {
        return Err(Error::InvalidIvLength { len: 0 });
    }
    check_len(iv.len(), MAX_BIT_LEN_BYTES, "IV bit length exceeds 64 bits")?;
    check_len(aad.len(), MAX_BIT_LEN_BYTES, "AAD bit length exceeds 64 bits")?;
    check_len(text_len, MAX_TEXT_LEN, "text exceeds 2^39 - 256 bits")
}

// lengths are validated by check_inputs before this is reached
#[inline(always)]
pub(crate) fn bit_len(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}
