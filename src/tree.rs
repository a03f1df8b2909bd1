use std::fmt;
use std::io;

use log::trace;

use crate::hash::Algorithm;
use crate::tiger::{TigerAlgorithm, TigerHash};

/// Number of input bytes covered by a single leaf.
pub const BLOCK_SIZE: usize = 1024;

/// Upper bound of pending subtree digests: one per bit of the 64-bit leaf
/// counter plus the freshly hashed leaf that has not been merged yet.
pub const MAX_DEPTH: usize = 65;

/// Tiger Tree Hash context with 24-byte Tiger/192 digests.
pub type Tth = TreeHasher<TigerHash, TigerAlgorithm>;

/// Incremental hash tree over a byte stream.
///
/// Input is cut into [`BLOCK_SIZE`] leaves. Every completed leaf is hashed
/// and pushed on a stack of subtree roots, which is then collapsed the same
/// way a binary counter propagates a carry: after the `n`-th leaf, two
/// subtrees are merged for every trailing zero bit of `n`.
///
/// ```text
/// leafs  stack (bottom .. top)
///   1    [h0]
///   2    [h01]
///   3    [h01 h2]
///   4    [h0123]
///   5    [h0123 h4]
///   6    [h0123 h45]
///   7    [h0123 h45 h6]
/// ```
///
/// The stack holds at most one subtree per power of two, so memory grows
/// with the logarithm of the input length. On [`digest`](Self::digest) the
/// remaining subtrees are folded right to left, which yields the same root
/// as a left-complete tree built over all leaves at once:
///
/// ```text
/// 3 leafs:         root = h(h(h0 + h1) + h2)
///                 /                       \
///        h01 = h(h0 + h1)                 h2
///          /          \
///        h0            h1
/// ```
///
/// The root depends only on the bytes fed in, never on how they were split
/// across [`update`](Self::update) calls. Cloning a context forks it: both
/// copies continue independently from the same state.
#[derive(Clone)]
pub struct TreeHasher<T, A>
where
    T: AsRef<[u8]> + Clone,
    A: Algorithm<T>,
{
    // Bytes of the current, incomplete leaf.
    block: [u8; BLOCK_SIZE],
    index: usize,

    count: u64,
    stack: Vec<T>,

    // Total number of bytes consumed.
    len: u64,
    alg: A,
}

impl<T, A> TreeHasher<T, A>
where
    T: AsRef<[u8]> + Clone,
    A: Algorithm<T>,
{
    /// Creates an empty context.
    pub fn new() -> TreeHasher<T, A> {
        TreeHasher {
            block: [0u8; BLOCK_SIZE],
            index: 0,
            count: 0,
            stack: Vec::with_capacity(MAX_DEPTH),
            len: 0,
            alg: A::default(),
        }
    }

    /// Appends `data` to the stream.
    pub fn update(&mut self, mut data: &[u8]) {
        self.len += data.len() as u64;

        // try to fill the pending block first
        if self.index > 0 {
            let left = BLOCK_SIZE - self.index;
            if data.len() < left {
                self.block[self.index..self.index + data.len()].copy_from_slice(data);
                self.index += data.len();
                return;
            }

            let (head, rest) = data.split_at(left);
            self.block[self.index..].copy_from_slice(head);
            self.index = BLOCK_SIZE;
            self.flush_block();
            data = rest;
        }

        // whole blocks are hashed straight from the input
        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            let leaf = self.alg.leaf(block);
            self.push(leaf);
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.index = rest.len();
    }

    /// Finalizes the tree and returns its root.
    ///
    /// The context is consumed; clone it beforehand to keep accumulating
    /// after taking an intermediate digest.
    pub fn digest(mut self) -> T {
        // An empty stream still has one (empty) leaf.
        if self.index > 0 || self.count == 0 {
            self.flush_block();
        }

        while self.stack.len() > 1 {
            self.compose();
        }

        debug_assert_eq!(self.stack.len(), 1);
        self.stack.swap_remove(0)
    }

    /// Returns number of complete leafs hashed so far.
    pub fn leaf_count(&self) -> u64 {
        self.count
    }

    /// Returns number of bytes waiting in the incomplete leaf.
    pub fn buffered(&self) -> usize {
        self.index
    }

    /// Returns number of subtree digests waiting to be merged.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns total number of bytes consumed.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes were consumed yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Hashes the buffered block (possibly short or empty) as a leaf.
    fn flush_block(&mut self) {
        let leaf = self.alg.leaf(&self.block[..self.index]);
        self.index = 0;
        self.push(leaf);
    }

    fn push(&mut self, leaf: T) {
        assert!(
            self.count < u64::MAX && self.stack.len() < MAX_DEPTH,
            "tree depth exhausted after {} leafs",
            self.count
        );

        self.stack.push(leaf);
        self.count += 1;

        // while evenly divisible by 2
        let mut b = self.count;
        while b & 1 == 0 {
            self.compose();
            b >>= 1;
        }

        trace!("leaf {} hashed, {} subtrees pending", self.count, self.stack.len());
    }

    // Replaces the two topmost subtrees with their parent node.
    fn compose(&mut self) {
        let n = self.stack.len();
        debug_assert!(n >= 2);

        let node = self.alg.node(&self.stack[n - 2], &self.stack[n - 1]);
        self.stack.truncate(n - 2);
        self.stack.push(node);
    }
}

impl<T, A> Default for TreeHasher<T, A>
where
    T: AsRef<[u8]> + Clone,
    A: Algorithm<T>,
{
    fn default() -> Self {
        TreeHasher::new()
    }
}

impl<T, A> fmt::Debug for TreeHasher<T, A>
where
    T: AsRef<[u8]> + Clone,
    A: Algorithm<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TreeHasher")
            .field("len", &self.len)
            .field("leafs", &self.count)
            .field("buffered", &self.index)
            .field("depth", &self.stack.len())
            .finish()
    }
}

/// Lets a context be the sink of [`std::io::copy`].
impl<T, A> io::Write for TreeHasher<T, A>
where
    T: AsRef<[u8]> + Clone,
    A: Algorithm<T>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
