//! Tiger/192 as a tree [`Algorithm`].
//!
//! The Tiger reference implementation produces three 64-bit state words.
//! The canonical serialization used by TTH (and by THEX) writes each word
//! little-endian, word 0 first. The `tiger` crate already emits its output
//! in that order on every host, so the adapter below is the single place
//! where the canonical form is established; everything downstream treats a
//! [`TigerHash`] as opaque bytes.

use std::fmt;
use std::hash::Hasher;

use ::tiger::{Digest, Tiger};

use crate::hash::Algorithm;

/// Size of a Tiger/192 digest in bytes.
pub const TIGER_SIZE: usize = 24;

/// Tiger/192 digest in canonical byte order.
pub type TigerHash = [u8; TIGER_SIZE];

/// Streaming Tiger/192 state usable as a tree hashing [`Algorithm`].
#[derive(Clone, Default)]
pub struct TigerAlgorithm(Tiger);

impl TigerAlgorithm {
    /// Creates a fresh Tiger state.
    pub fn new() -> TigerAlgorithm {
        TigerAlgorithm(Tiger::new())
    }
}

impl fmt::Debug for TigerAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TigerAlgorithm")
    }
}

impl Hasher for TigerAlgorithm {
    #[inline]
    fn write(&mut self, msg: &[u8]) {
        Digest::update(&mut self.0, msg)
    }

    #[inline]
    fn finish(&self) -> u64 {
        let out = Digest::finalize(self.0.clone());
        let mut word = [0u8; 8];
        word.copy_from_slice(&out[..8]);
        u64::from_le_bytes(word)
    }
}

impl Algorithm<TigerHash> for TigerAlgorithm {
    #[inline]
    fn hash(&mut self) -> TigerHash {
        let out = Digest::finalize_reset(&mut self.0);
        let mut h = [0u8; TIGER_SIZE];
        h.copy_from_slice(&out);
        h
    }

    #[inline]
    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}

/// Plain (non-tree) Tiger/192 digest of `data`.
pub fn tiger(data: &[u8]) -> TigerHash {
    let mut a = TigerAlgorithm::new();
    a.write(data);
    a.hash()
}
