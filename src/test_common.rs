use crate::hash::Algorithm;
use crate::tiger::{TigerAlgorithm, TigerHash};
use crate::tree::Tth;
use std::fmt;
use std::hash::Hasher;

pub const SIZE: usize = 0x10;

pub type Item = [u8; SIZE];

/// Transparent test hash: bytes are xor-folded into 16 slots, so the
/// output shows exactly what was written.
#[derive(Debug, Copy, Clone, Default)]
pub struct XOR128 {
    data: Item,
    i: usize,
}

impl XOR128 {
    pub fn new() -> XOR128 {
        XOR128 {
            data: [0; SIZE],
            i: 0,
        }
    }
}

impl Hasher for XOR128 {
    fn write(&mut self, bytes: &[u8]) {
        for x in bytes {
            self.data[self.i & (SIZE - 1)] ^= *x;
            self.i += 1;
        }
    }

    fn finish(&self) -> u64 {
        unimplemented!()
    }
}

impl Algorithm<Item> for XOR128 {
    #[inline]
    fn hash(&mut self) -> Item {
        self.data
    }

    #[inline]
    fn reset(&mut self) {
        *self = XOR128::new();
    }
}

impl fmt::UpperHex for XOR128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.data.as_ref() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Deterministic input whose consecutive blocks all differ.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub fn leaf(block: &[u8]) -> TigerHash {
    TigerAlgorithm::new().leaf(block)
}

pub fn node(left: &TigerHash, right: &TigerHash) -> TigerHash {
    TigerAlgorithm::new().node(left, right)
}

/// Feeds `data` in pieces of `chunk` bytes.
pub fn digest_chunked(data: &[u8], chunk: usize) -> TigerHash {
    let mut ctx = Tth::new();
    for piece in data.chunks(chunk) {
        ctx.update(piece);
    }
    ctx.digest()
}
