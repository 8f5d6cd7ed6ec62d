mod ctr;
mod gcm;
mod ghash;
mod util;

pub(crate) use ctr::{Keystream, apply_keystream};
pub(crate) use gcm::{bit_len, check_inputs, compute_tag, derive_j0, finish_tag};
pub(crate) use ghash::{Ghash, GhashKey};
pub use util::PARALLEL_THRESHOLD;
pub(crate) use util::{MAX_TEXT_LEN, check_len};

#[cfg(test)]
pub(crate) use util::test_util;
