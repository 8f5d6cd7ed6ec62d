use std::fmt;

use tracing::{debug, instrument, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesgcm::core::{RoundKeys, encrypt_block};
use crate::aesgcm::error::{Error, Result};
use crate::aesgcm::key::{Key, KeySize};
use crate::aesgcm::modes::{GhashKey, apply_keystream, check_inputs, compute_tag, derive_j0};
use crate::aesgcm::stream::GcmStream;
use crate::aesgcm::tag::{TAG_LEN, Tag, check_tag_len};
use crate::aesgcm::util::{NONCE_LEN, random_iv};

/// Direction for [`GcmContext::crypt_and_tag`] and [`GcmContext::start`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Everything derived from the key: the key itself, its round keys, and the GHASH table
/// for H = E(K, 0^128).
#[derive(Zeroize, ZeroizeOnDrop)]
struct KeyMaterial {
    key: Key,
    round_keys: RoundKeys,
    ghash_key: GhashKey,
}

impl KeyMaterial {
    fn new(key: &Key) -> Self {
        let round_keys = RoundKeys::expand(key);
        let mut h = encrypt_block(&[0u8; 16], round_keys.as_slice());
        let ghash_key = GhashKey::new(&h);
        h.zeroize();
        Self {
            key: key.clone(),
            round_keys,
            ghash_key,
        }
    }
}

/// AES-GCM context. Holds the expanded key schedule and hash subkey for one key, and provides
/// one-shot [encryption](GcmContext::encrypt_and_tag),
/// [verified decryption](GcmContext::decrypt_and_verify), a [sealed](GcmContext::seal) format
/// with a random IV, and [incremental](GcmContext::start) processing.
///
/// Every operation takes `&self`, so a context can be shared between threads. Key material
/// is zeroized when the context is [wiped](GcmContext::wipe) or dropped.
///
/// **Important**: an (IV, key) pair must never be used to encrypt two different messages.
/// Reusing an IV leaks the XOR of the plaintexts and allows tag forgery.
///
/// ## Examples
/// ```
/// # fn main() -> aesgcm::Result<()> {
/// use aesgcm::{GcmContext, Key, KeySize};
///
/// let ctx = GcmContext::new(&Key::random(KeySize::Bits256)?);
/// let iv = [0x24u8; 12];
///
/// let (ciphertext, tag) = ctx.encrypt_and_tag(b"Hello, World!", &iv, b"header", 16)?;
/// let plaintext = ctx.decrypt_and_verify(&ciphertext, &iv, b"header", tag.as_bytes())?;
/// assert_eq!(plaintext, b"Hello, World!");
///
/// // modified AAD fails authentication
/// assert!(ctx.decrypt_and_verify(&ciphertext, &iv, b"Header", tag.as_bytes()).is_err());
/// # Ok(())
/// # }
/// ```
pub struct GcmContext {
    material: Option<KeyMaterial>,
}

impl GcmContext {
    /// Expands the key schedule and computes the hash subkey.
    pub fn new(key: &Key) -> Self {
        Self {
            material: Some(KeyMaterial::new(key)),
        }
    }

    /// Initialises from raw key bytes. Returns InvalidKeyLength unless the slice is 16, 24,
    /// or 32 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Key::try_from_slice(key)?))
    }

    /// Initialises from raw key bytes plus the declared key size in bits (128, 192, or 256),
    /// which must match the slice.
    pub fn with_key_bits(key: &[u8], key_bits: usize) -> Result<Self> {
        Ok(Self::new(&Key::with_bits(key, key_bits)?))
    }

    /// Replaces the key, wiping the previous key material first. Also revives a wiped context.
    pub fn rekey(&mut self, key: &Key) {
        self.wipe();
        self.material = Some(KeyMaterial::new(key));
        trace!(key_bits = key.size().bits(), "GCM context rekeyed");
    }

    /// Zeroizes the key, round keys, and hash subkey. Every later operation returns
    /// [ContextWiped](Error::ContextWiped) until the context is [rekeyed](GcmContext::rekey).
    pub fn wipe(&mut self) {
        if let Some(material) = self.material.as_mut() {
            material.zeroize();
            trace!("GCM context wiped");
        }
        self.material = None;
    }

    pub fn is_wiped(&self) -> bool {
        self.material.is_none()
    }

    /// Size of the current key.
    pub fn key_size(&self) -> Result<KeySize> {
        Ok(self.material()?.key.size())
    }

    fn material(&self) -> Result<&KeyMaterial> {
        self.material.as_ref().ok_or(Error::ContextWiped)
    }

    /// **Galois/counter mode** encryption.
    ///
    /// Encrypts `plaintext` in counter mode starting from J0 + 1 and computes a tag of
    /// `tag_len` bytes (1 to 16) over `aad` and the ciphertext. The AAD is authenticated but
    /// **not encrypted**. Any non-empty IV is accepted; 12 bytes is the recommended size.
    ///
    /// Returns `(ciphertext, tag)`. The ciphertext has the same length as the plaintext.
    pub fn encrypt_and_tag(
        &self,
        plaintext: &[u8],
        iv: &[u8],
        aad: &[u8],
        tag_len: usize,
    ) -> Result<(Vec<u8>, Tag)> {
        self.crypt_and_tag(Direction::Encrypt, plaintext, iv, aad, tag_len)
    }

    /// All-in-one GCM call. With [Direction::Encrypt] this is
    /// [encrypt_and_tag](GcmContext::encrypt_and_tag). With [Direction::Decrypt] the input is
    /// decrypted and the tag over the input ciphertext is returned **without being checked**;
    /// use [decrypt_and_verify](GcmContext::decrypt_and_verify) unless the caller compares
    /// tags itself.
    #[instrument(
        skip_all,
        level = "debug",
        fields(direction = ?direction, len = input.len(), iv_len = iv.len(), aad_len = aad.len(), tag_len = tag_len)
    )]
    pub fn crypt_and_tag(
        &self,
        direction: Direction,
        input: &[u8],
        iv: &[u8],
        aad: &[u8],
        tag_len: usize,
    ) -> Result<(Vec<u8>, Tag)> {
        let material = self.material()?;
        check_tag_len(tag_len)?;
        check_inputs(iv, aad, input.len())?;

        let round_keys = material.round_keys.as_slice();
        let j0 = derive_j0(&material.ghash_key, iv);
        let output = apply_keystream(input, round_keys, &j0);

        // the tag always covers the ciphertext side
        let ciphertext = match direction {
            Direction::Encrypt => &output[..],
            Direction::Decrypt => input,
        };
        let full = compute_tag(ciphertext, round_keys, &material.ghash_key, &j0, aad);
        let tag = Tag::truncate(&full, tag_len)?;

        Ok((output, tag))
    }

    /// **Galois/counter mode** decryption.
    ///
    /// The tag length is taken from `tag` (1 to 16 bytes). The expected tag is computed over
    /// the ciphertext and compared in constant time **before** anything is decrypted.
    ///
    /// Returns:
    /// - the plaintext if the tag was authenticated.
    /// - [AuthFailed](crate::Error::AuthFailed) if the computed tag did not match. No
    ///   plaintext is produced.
    /// - [InvalidTagLength](crate::Error::InvalidTagLength),
    ///   [InvalidIvLength](crate::Error::InvalidIvLength), or
    ///   [MessageTooLong](crate::Error::MessageTooLong) for malformed inputs.
    #[instrument(
        skip_all,
        level = "debug",
        fields(len = ciphertext.len(), iv_len = iv.len(), aad_len = aad.len(), tag_len = tag.len())
    )]
    pub fn decrypt_and_verify(
        &self,
        ciphertext: &[u8],
        iv: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        let material = self.material()?;
        check_tag_len(tag.len())?;
        check_inputs(iv, aad, ciphertext.len())?;

        let round_keys = material.round_keys.as_slice();
        let j0 = derive_j0(&material.ghash_key, iv);
        let full = compute_tag(ciphertext, round_keys, &material.ghash_key, &j0, aad);
        let expected = Tag::truncate(&full, tag.len())?;

        if !expected.ct_eq(tag) {
            debug!("GCM tag mismatch, ciphertext rejected");
            return Err(Error::AuthFailed);
        }

        Ok(apply_keystream(ciphertext, round_keys, &j0))
    }

    /// Encrypts with a fresh random 96-bit IV and a full 16-byte tag.
    ///
    /// Output is formatted as `IV (12 bytes) || Ciphertext || Tag (16 bytes)`
    pub fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let iv = random_iv()?;
        let (ciphertext, tag) = self.encrypt_and_tag(plaintext, &iv, aad, TAG_LEN)?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len() + TAG_LEN);
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);
        out.extend_from_slice(tag.as_bytes());
        Ok(out)
    }

    /// Opens the output of [seal](GcmContext::seal). The same AAD must be supplied.
    pub fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        // minimum size is 28 bytes -> 12 (iv) + 16 (tag)
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(Error::InvalidCiphertext {
                len: sealed.len(),
                context: "insufficient bytes for IV and tag",
            });
        }

        let (iv, rest) = sealed.split_at(NONCE_LEN);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);
        self.decrypt_and_verify(ciphertext, iv, aad, tag)
    }

    /// Begins an incremental operation. See [GcmStream].
    pub fn start(&self, direction: Direction, iv: &[u8], aad: &[u8]) -> Result<GcmStream<'_>> {
        let material = self.material()?;
        GcmStream::new(
            &material.round_keys,
            &material.ghash_key,
            direction,
            iv,
            aad,
        )
    }
}

impl fmt::Debug for GcmContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.material {
            Some(material) => f
                .debug_struct("GcmContext")
                .field("key_size", &material.key.size())
                .finish_non_exhaustive(),
            None => f.write_str("GcmContext(wiped)"),
        }
    }
}
