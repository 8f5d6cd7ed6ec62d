use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::{RCON, SBOX};
use super::util::xor_words;
use crate::aesgcm::key::Key;

/// Expanded AES key schedule: 11, 13, or 15 round keys for AES-128, AES-192, and AES-256.
/// The extra round key is the initial whitening key, which is simply the first 16 bytes of the
/// original key. Wiped when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: Vec<[u8; 16]>,
}

impl RoundKeys {
    /// AES key schedule (FIPS-197 section 5.2).
    pub fn expand(key: &Key) -> Self {
        let key = key.as_bytes();

        // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
        // Nk   The number of 32-bit words comprising the key
        // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
        // w    The result of the key schedule, an array of words that form round keys
        // Nw   The total number of words generated by the key schedule (including initial key)
        let nk = key.len() / 4;
        let nr = nk + 6;
        let nw = (nr + 1) * 4;

        let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

        // first nk words of w are filled with the initial key
        for (i, byte) in key.iter().enumerate() {
            w[i / 4][i % 4] = *byte;
        }

        let mut temp = w[nk - 1];
        for i in nk..nw {
            if i % nk == 0 {
                // RotWord, SubWord, then Rcon
                temp = [
                    SBOX[temp[1] as usize] ^ RCON[i / nk],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                    SBOX[temp[0] as usize],
                ];
            } else if nk == 8 && i % nk == 4 {
                // additional SubWord for AES-256 only
                temp = [
                    SBOX[temp[0] as usize],
                    SBOX[temp[1] as usize],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                ];
            }

            // w[i] = temp ⊕ w[i − Nk]
            w[i] = xor_words(&temp, &w[i - nk]);
            temp = w[i];
        }

        // words are columns of the column-major round key blocks
        let keys = w
            .chunks_exact(4)
            .map(|words| {
                let mut rk = [0u8; 16];
                for (col, word) in words.iter().enumerate() {
                    rk[col * 4..col * 4 + 4].copy_from_slice(word);
                }
                rk
            })
            .collect();

        w.zeroize();
        temp.zeroize();

        Self { keys }
    }

    pub fn as_slice(&self) -> &[[u8; 16]] {
        &self.keys
    }
}
