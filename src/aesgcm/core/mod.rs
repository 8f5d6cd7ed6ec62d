//! Core AES implementation: the key schedule and encryption of a single 16 byte block.
//! GCM only ever runs the cipher forwards, so no inverse cipher is provided.

pub mod constants;
mod encryption;
mod schedule;
mod util;

pub use encryption::encrypt_block;
pub use schedule::RoundKeys;
