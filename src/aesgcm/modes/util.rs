use crate::aesgcm::error::{Error, Result};

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // generate keystream in parallel if input size gt 4 KiB
pub(crate) const GHASH_R: u128 = 0xE100_0000_0000_0000_0000_0000_0000_0000; // reduction constant for GHASH

// GCM limits from SP 800-38D section 5.2.1.1, in bytes
pub(crate) const MAX_TEXT_LEN: u64 = ((1u64 << 32) - 2) * 16; // 2^39 - 256 bits
pub(crate) const MAX_BIT_LEN_BYTES: u64 = u64::MAX / 8; // AAD and IV bit lengths must fit in u64

/// Low 32 bits of a counter block.
#[inline(always)]
pub(crate) fn ctr_of(block: &[u8; 16]) -> u32 {
    u32::from_be_bytes([block[12], block[13], block[14], block[15]])
}

/// Replaces the low 32 bits of a counter block, leaving the upper 96 bits untouched.
#[inline(always)]
pub(crate) fn with_ctr(block: &[u8; 16], ctr: u32) -> [u8; 16] {
    let mut out = *block;
    out[12..].copy_from_slice(&ctr.to_be_bytes());
    out
}

/// inc32 from SP 800-38D: increment the low 32 bits modulo 2^32.
#[inline(always)]
pub(crate) fn inc32(block: &[u8; 16]) -> [u8; 16] {
    with_ctr(block, ctr_of(block).wrapping_add(1))
}

/// XORs up to 16 bytes of `chunk` into a copy of `y`. Short chunks behave as if zero padded.
#[inline(always)]
pub(crate) fn xor_chunks(y: &[u8; 16], chunk: &[u8]) -> [u8; 16] {
    let mut out: [u8; 16] = *y;
    for (o, c) in out.iter_mut().zip(chunk) {
        *o ^= c;
    }
    out
}

#[inline(always)]
pub(crate) fn mul_x(v: u128) -> u128 {
    // Multiply by x (in the GHASH field representation)
    let lsb = v & 1;
    let mut v2 = v >> 1;
    v2 ^= GHASH_R & (0u128.wrapping_sub(lsb));
    v2
}

#[inline(always)]
pub(crate) fn mul_x4(mut v: u128) -> u128 {
    // Multiply by x^4 (4 successive mul_x)
    v = mul_x(v);
    v = mul_x(v);
    v = mul_x(v);
    v = mul_x(v);
    v
}

/// Checks a message length against a GCM limit.
pub(crate) fn check_len(len: usize, max: u64, context: &'static str) -> Result<()> {
    if len as u64 > max {
        return Err(Error::MessageTooLong { len, context });
    }
    Ok(())
}
