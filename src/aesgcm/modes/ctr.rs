use rayon::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesgcm::core::encrypt_block;
use crate::aesgcm::modes::util::{PARALLEL_THRESHOLD, ctr_of, inc32, with_ctr, xor_chunks};

/// GCTR from SP 800-38D: XORs `input` with the keystream `E(J0 + 1) || E(J0 + 2) || ...`.
/// Only the low 32 bits of the counter block increment (modulo 2^32). Encryption and decryption
/// are the same operation. Inputs above [PARALLEL_THRESHOLD] are processed in parallel.
///
/// The caller is responsible for keeping the input within the GCM length limit.
pub fn apply_keystream(input: &[u8], round_keys: &[[u8; 16]], j0: &[u8; 16]) -> Vec<u8> {
    if input.len() > PARALLEL_THRESHOLD {
        ctr_core_parallel(input, round_keys, j0)
    } else {
        ctr_core_serial(input, round_keys, j0)
    }
}

pub fn ctr_core_parallel(input: &[u8], round_keys: &[[u8; 16]], j0: &[u8; 16]) -> Vec<u8> {
    let ctr_start = ctr_of(j0).wrapping_add(1);

    // initialise vector for parallelisation
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            // block index fits in u32 given the GCM length limit
            let block = with_ctr(j0, ctr_start.wrapping_add(i as u32));
            let keystream = encrypt_block(&block, round_keys);
            let ct = xor_chunks(&keystream, in_chunk);
            out_chunk.copy_from_slice(&ct[..in_chunk.len()]);
        });

    output
}

/// Serial counter mode, block by block.
pub fn ctr_core_serial(input: &[u8], round_keys: &[[u8; 16]], j0: &[u8; 16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut counter = *j0;

    // for each chunk of input...
    for chunk in input.chunks(16) {
        counter = inc32(&counter);
        // xor each element of input chunk (1-16 bytes) with encrypted ctr block
        let keystream = encrypt_block(&counter, round_keys);
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);
    }

    output
}

/// Resumable keystream for incremental processing. Keeps the unused tail of the current
/// keystream block between calls so input can be split at any byte boundary.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Keystream<'a> {
    #[zeroize(skip)]
    round_keys: &'a [[u8; 16]],
    counter: [u8; 16],
    block: [u8; 16],
    used: usize,
}

impl<'a> Keystream<'a> {
    pub(crate) fn new(round_keys: &'a [[u8; 16]], j0: &[u8; 16]) -> Self {
        Self {
            round_keys,
            counter: *j0,
            block: [0u8; 16],
            used: 16,
        }
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    pub(crate) fn apply(&mut self, data: &mut [u8]) {
        for byte in data {
            if self.used == 16 {
                self.counter = inc32(&self.counter);
                self.block = encrypt_block(&self.counter, self.round_keys);
                self.used = 0;
            }
            *byte ^= self.block[self.used];
            self.used += 1;
        }
    }
}
