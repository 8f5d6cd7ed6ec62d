use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesgcm::modes::util::{mul_x, mul_x4};

/*
GHASH over GF(2^128) with the GCM bit order: bit 0 of the block (MSB of byte 0) is the
coefficient of x^0, so blocks are read as big-endian u128 and multiplication by x is a
right shift, reduced by x^128 = x^7 + x^2 + x + 1 (GHASH_R).

Multiplication by H uses a 4-bit table (Shoup). table[n] = n * H where the nibble n holds
the coefficients of x^0..x^3 from its most significant bit down, so
    table[8] = H, table[4] = H.x, table[2] = H.x^2, table[1] = H.x^3
and the other entries are XOR combinations. X * H is then evaluated by Horner's rule over
the 32 nibbles of X, from the highest degree nibble (least significant in the u128):
    Z = (...((T[n0]) x^4 + T[n1]) x^4 + ...) x^4 + T[n31]
*/

/// Precomputed multiplication table for a hash subkey H. One per context.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GhashKey {
    table: [u128; 16],
}

impl GhashKey {
    pub fn new(h: &[u8; 16]) -> Self {
        let mut table = [0u128; 16];
        table[8] = u128::from_be_bytes(*h);
        table[4] = mul_x(table[8]);
        table[2] = mul_x(table[4]);
        table[1] = mul_x(table[2]);

        for i in [3usize, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15] {
            // split off the highest set bit
            let msb = 1usize << (usize::BITS - 1 - i.leading_zeros());
            table[i] = table[msb] ^ table[i ^ msb];
        }

        Self { table }
    }

    /// x * H in GF(2^128).
    #[inline(always)]
    pub fn mul_h(&self, x: u128) -> u128 {
        let mut z = 0u128;
        for k in 0..32 {
            z = mul_x4(z) ^ self.table[((x >> (4 * k)) & 0xf) as usize];
        }
        z
    }
}

/// Incremental GHASH accumulator. Bytes can be fed in any split; [`pad`](Ghash::pad) closes a
/// segment (AAD, ciphertext, or IV) by zero padding its final partial block.
pub struct Ghash<'a> {
    key: &'a GhashKey,
    state: u128,
    buf: [u8; 16],
    buf_len: usize,
}

impl<'a> Ghash<'a> {
    pub fn new(key: &'a GhashKey) -> Self {
        Self {
            key,
            state: 0,
            buf: [0u8; 16],
            buf_len: 0,
        }
    }

    #[inline(always)]
    fn absorb(&mut self, block: &[u8; 16]) {
        self.state = self.key.mul_h(self.state ^ u128::from_be_bytes(*block));
    }

    pub fn update(&mut self, mut data: &[u8]) {
        // top up a partially filled block first
        if self.buf_len > 0 {
            let take = data.len().min(16 - self.buf_len);
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];
            if self.buf_len < 16 {
                return;
            }
            let block = self.buf;
            self.absorb(&block);
            self.buf_len = 0;
        }

        let mut blocks = data.chunks_exact(16);
        for block in &mut blocks {
            let mut b = [0u8; 16];
            b.copy_from_slice(block);
            self.absorb(&b);
        }

        let rem = blocks.remainder();
        self.buf[..rem.len()].copy_from_slice(rem);
        self.buf_len = rem.len();
    }

    /// Absorbs any buffered partial block, zero padded.
    pub fn pad(&mut self) {
        if self.buf_len > 0 {
            self.buf[self.buf_len..].fill(0);
            let block = self.buf;
            self.absorb(&block);
            self.buf_len = 0;
        }
    }

    /// Pads the current segment, absorbs the `len(A) || len(C)` block (both in bits, big-endian)
    /// and returns the digest.
    pub fn finalize(mut self, a_bits: u64, c_bits: u64) -> [u8; 16] {
        self.pad();
        let mut len = [0u8; 16];
        len[..8].copy_from_slice(&a_bits.to_be_bytes());
        len[8..].copy_from_slice(&c_bits.to_be_bytes());
        self.absorb(&len);
        self.state.to_be_bytes()
    }
}

impl Drop for Ghash<'_> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buf.zeroize();
    }
}
