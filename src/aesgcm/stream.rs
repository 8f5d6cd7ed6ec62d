use tracing::{debug, trace};

use crate::aesgcm::context::Direction;
use crate::aesgcm::core::RoundKeys;
use crate::aesgcm::error::{Error, Result};
use crate::aesgcm::modes::{
    Ghash, GhashKey, Keystream, MAX_TEXT_LEN, bit_len, check_inputs, check_len, derive_j0,
    finish_tag,
};
use crate::aesgcm::tag::{Tag, check_tag_len};

/// Incremental GCM operation, created by [GcmContext::start](crate::GcmContext::start).
///
/// The AAD is supplied up front. Text is then fed through [update](GcmStream::update) in
/// chunks of any size, and the result is identical to the one-shot call over the
/// concatenated input.
///
/// **Important**: a decrypting stream releases plaintext before the tag has been checked.
/// Callers must discard everything returned by `update` if [verify](GcmStream::verify) fails.
/// Use [decrypt_and_verify](crate::GcmContext::decrypt_and_verify) when the whole ciphertext
/// fits in memory.
///
/// ## Examples
/// ```
/// # fn main() -> aesgcm::Result<()> {
/// use aesgcm::{Direction, GcmContext, Key, KeySize};
///
/// let ctx = GcmContext::new(&Key::random(KeySize::Bits128)?);
/// let iv = [7u8; 12];
///
/// let mut enc = ctx.start(Direction::Encrypt, &iv, b"aad")?;
/// let mut ciphertext = enc.update(b"first part, ")?;
/// ciphertext.extend(enc.update(b"second part")?);
/// let tag = enc.finish(16)?;
///
/// let mut dec = ctx.start(Direction::Decrypt, &iv, b"aad")?;
/// let plaintext = dec.update(&ciphertext)?;
/// dec.verify(tag.as_bytes())?;
/// assert_eq!(plaintext, b"first part, second part");
/// # Ok(())
/// # }
/// ```
pub struct GcmStream<'a> {
    direction: Direction,
    round_keys: &'a [[u8; 16]],
    j0: [u8; 16],
    keystream: Keystream<'a>,
    ghash: Ghash<'a>,
    aad_len: usize,
    text_len: usize,
}

impl<'a> GcmStream<'a> {
    pub(crate) fn new(
        round_keys: &'a RoundKeys,
        ghash_key: &'a GhashKey,
        direction: Direction,
        iv: &[u8],
        aad: &[u8],
    ) -> Result<Self> {
        check_inputs(iv, aad, 0)?;

        let j0 = derive_j0(ghash_key, iv);
        let mut ghash = Ghash::new(ghash_key);
        ghash.update(aad);
        ghash.pad();

        trace!(?direction, iv_len = iv.len(), aad_len = aad.len(), "GCM stream started");
        Ok(Self {
            direction,
            round_keys: round_keys.as_slice(),
            j0,
            keystream: Keystream::new(round_keys.as_slice(), &j0),
            ghash,
            aad_len: aad.len(),
            text_len: 0,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Processes the next chunk of plaintext (encrypting) or ciphertext (decrypting) and
    /// returns the same number of output bytes. Fails with
    /// [MessageTooLong](crate::Error::MessageTooLong) once the running total would exceed
    /// the GCM limit; nothing from that chunk is processed.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let total = self
            .text_len
            .checked_add(input.len())
            .ok_or(Error::MessageTooLong {
                len: usize::MAX,
                context: "stream length overflow",
            })?;
        check_len(total, MAX_TEXT_LEN, "text exceeds 2^39 - 256 bits")?;
        self.text_len = total;

        let mut output = input.to_vec();
        match self.direction {
            Direction::Encrypt => {
                self.keystream.apply(&mut output);
                self.ghash.update(&output);
            }
            Direction::Decrypt => {
                self.ghash.update(input);
                self.keystream.apply(&mut output);
            }
        }
        Ok(output)
    }

    /// Completes the operation and returns the first `tag_len` bytes (1 to 16) of the tag.
    pub fn finish(self, tag_len: usize) -> Result<Tag> {
        check_tag_len(tag_len)?;
        let s = self
            .ghash
            .finalize(bit_len(self.aad_len), bit_len(self.text_len));
        let full = finish_tag(&s, self.round_keys, &self.j0);
        trace!(text_len = self.text_len, "GCM stream finished");
        Tag::truncate(&full, tag_len)
    }

    /// Completes the operation and compares the tag against `tag` in constant time.
    /// Returns [AuthFailed](crate::Error::AuthFailed) on mismatch.
    pub fn verify(self, tag: &[u8]) -> Result<()> {
        let expected = self.finish(tag.len())?;
        if !expected.ct_eq(tag) {
            debug!("GCM stream tag mismatch");
            return Err(Error::AuthFailed);
        }
        Ok(())
    }
}
