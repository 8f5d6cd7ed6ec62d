//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be randomly generated or constructed from an existing byte slice, and are
//! zeroized when dropped.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aesgcm::error::{Error, Result};

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key length in bytes (16, 24, or 32).
    pub const fn len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Key length in bits (128, 192, or 256).
    pub const fn bits(self) -> usize {
        self.len() * 8
    }

    /// Number of AES rounds (10, 12, or 14).
    pub const fn rounds(self) -> usize {
        self.len() / 4 + 6
    }

    fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Bits128),
            24 => Ok(KeySize::Bits192),
            32 => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeyLength { len }),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to initialise a [GcmContext](crate::GcmContext).
///
/// ## Examples
/// ```
/// # fn main() -> aesgcm::Result<()> {
/// use aesgcm::{Key, KeySize};
///
/// // Instantiate a random key:
/// let rk_256 = Key::random(KeySize::Bits256)?;
/// assert_eq!(rk_256.size(), KeySize::Bits256);
///
/// // Instantiate keys from slice:
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_192 = Key::with_bits(&key_bytes[..24], 192)?;
/// assert_eq!(my_key_128.as_bytes(), &key_bytes[..16]);
/// assert_eq!(my_key_192.as_bytes(), &key_bytes[..24]);
///
/// // Invalid sizes are rejected:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// assert!(Key::with_bits(&key_bytes[..16], 256).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        let bytes = match size {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                OsRng.try_fill_bytes(&mut k)?;
                KeyBytes::K128(k)
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                OsRng.try_fill_bytes(&mut k)?;
                KeyBytes::K192(k)
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                OsRng.try_fill_bytes(&mut k)?;
                KeyBytes::K256(k)
            }
        };
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let mut key = match KeySize::from_len(bytes.len())? {
            KeySize::Bits128 => KeyBytes::K128([0u8; 16]),
            KeySize::Bits192 => KeyBytes::K192([0u8; 24]),
            KeySize::Bits256 => KeyBytes::K256([0u8; 32]),
        };
        match &mut key {
            KeyBytes::K128(k) => k.copy_from_slice(bytes),
            KeyBytes::K192(k) => k.copy_from_slice(bytes),
            KeyBytes::K256(k) => k.copy_from_slice(bytes),
        }
        Ok(Self { bytes: key })
    }

    /// Builds a key from a slice plus its declared size in bits, as in `init(key, key_bits)`
    /// style interfaces. The declared size must be 128, 192, or 256 and match the slice.
    pub fn with_bits(bytes: &[u8], bits: usize) -> Result<Self> {
        if bits != bytes.len() * 8 {
            return Err(Error::KeyBitsMismatch {
                bits,
                len: bytes.len(),
            });
        }
        Self::try_from_slice(bytes)
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Size of this key.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

// key bytes are never printed
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
