mod context;
mod core;
mod error;
mod key;
mod modes;
mod stream;
mod tag;
mod util;

pub use context::{Direction, GcmContext};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use modes::PARALLEL_THRESHOLD;
pub use stream::GcmStream;
pub use tag::{TAG_LEN, Tag};
pub use util::{NONCE_LEN, random_iv};
