//! Hash infrastructure for leaves and nodes of the hash tree.

use std::hash::Hasher;

/// Hashing algorithm type.
///
/// Algorithm conforms standard [`Hasher`] trait and provides methods to return
/// full length hash and reset current state. On top of that it knows how to
/// hash a tree leaf and a tree interior node, each tagged with its own
/// one-byte prefix so that a leaf can never be mistaken for a node:
///
/// ```text
/// leaf(block)       = ALG(0x00 || block)
/// node(left, right) = ALG(0x01 || left || right)
/// ```
///
/// Implementations must return the digest in a canonical, host-independent
/// byte order from [`Algorithm::hash`]. Nothing above this trait touches
/// byte order again.
pub trait Algorithm<T>: Hasher + Default + Clone
where
    T: AsRef<[u8]>,
{
    /// Tree leaf hash prefix
    const LEAF: u8 = 0x00;

    /// Tree interior node hash prefix
    const INTERIOR: u8 = 0x01;

    /// Returns the hash value for the data stream written so far.
    fn hash(&mut self) -> T;

    /// Reset Hasher state.
    fn reset(&mut self);

    /// Returns digest of the empty thing.
    fn empty(&mut self) -> T {
        self.reset();
        self.hash()
    }

    /// Returns the hash value for a tree leaf (prefix 0x00).
    fn leaf(&mut self, block: &[u8]) -> T {
        self.reset();
        self.write_u8(Self::LEAF);
        self.write(block);
        self.hash()
    }

    /// Returns the hash value for a tree interior node (prefix 0x01).
    fn node(&mut self, left: &T, right: &T) -> T {
        self.reset();
        self.write_u8(Self::INTERIOR);
        self.write(left.as_ref());
        self.write(right.as_ref());
        self.hash()
    }
}
