use std::fmt;

use subtle::ConstantTimeEq;

use crate::aesgcm::error::{Error, Result};

/// Largest (and default) GCM tag length in bytes.
pub const TAG_LEN: usize = 16;

/// A GCM authentication tag of 1 to 16 bytes. Truncated tags are prefixes of the full
/// 128-bit tag.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    bytes: [u8; TAG_LEN],
    len: usize,
}

impl Tag {
    /// Keeps the first `len` bytes of a full tag. `len` must be between 1 and 16.
    pub(crate) fn truncate(full: &[u8; TAG_LEN], len: usize) -> Result<Self> {
        check_tag_len(len)?;
        let mut bytes = [0u8; TAG_LEN];
        bytes[..len].copy_from_slice(&full[..len]);
        Ok(Self { bytes, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Constant-time comparison against a received tag. Tags of different lengths never match.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        bool::from(self.as_bytes().ct_eq(other))
    }
}

pub(crate) fn check_tag_len(len: usize) -> Result<()> {
    if len == 0 || len > TAG_LEN {
        return Err(Error::InvalidTagLength { len });
    }
    Ok(())
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::LowerHex for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self:x})")
    }
}
