//! Incremental _Tiger Tree Hash_ (TTH) implementation.
//!
//! A Tiger Tree Hash is a Merkle tree over 1024-byte blocks of a byte
//! stream, with Tiger/192 as both the leaf and the node hash. Leaves and
//! interior nodes are kept apart by a one-byte prefix, as in THEX:
//!
//! ```text
//! LEAF(d) = TIGER(0x00 || d),            |d| <= 1024
//! NODE(l, r) = TIGER(0x01 || l || r)
//! For n > 1 leaves, let k be the largest power of two smaller than n;
//! TTH(D[n]) = NODE(TTH(D[0:k]), TTH(D[k:n])).
//! The empty stream has one empty leaf: TTH("") = LEAF("").
//! ```
//!
//! Link: <https://adc.sourceforge.io/draft-jchapweske-thex-02.html>
//!
//! # Implementation choices
//!
//! The tree is never materialized. [`TreeHasher`] consumes the stream in a
//! single forward pass and keeps only the roots of the complete subtrees
//! it has seen so far, at most one per power of two. Memory therefore grows
//! with the logarithm of the input size, and the root is identical no
//! matter how the input was split across `update` calls.
//!
//! Hashing is abstracted behind [`Algorithm`], which extends
//! `std::hash::Hasher` with full-length output, reset, and the leaf and
//! node prefixes. [`TigerAlgorithm`] is the Tiger/192 instantiation and
//! [`Tth`] the ready-to-use context built on it.
//!
//! # Interface
//!
//! ```text
//! - new -> context
//! - update (context, bytes)
//! - clone (context) -> context
//! - digest (context) -> root
//! ```
//!
//! # Quick start
//!
//! ```
//! use tigertree::output::{to_base32, truncate, BitLength};
//! use tigertree::Tth;
//!
//! let mut ctx = Tth::new();
//! ctx.update(b"hello ");
//! ctx.update(b"world");
//! let root = ctx.digest();
//!
//! assert_eq!(root, tigertree::tth(b"hello world"));
//! println!("{}", to_base32(truncate(&root, BitLength::B192)));
//! ```

#![deny(
    missing_docs, unused_qualifications,
    missing_debug_implementations, missing_copy_implementations,
    trivial_casts, trivial_numeric_casts,
    unsafe_code, unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate anyhow;

/// Hash infrastructure for leaves and nodes of the tree.
pub mod hash;

/// Tiger/192 adapter.
pub mod tiger;

/// Incremental tree construction.
pub mod tree;

/// Digest truncation and text encodings.
pub mod output;

/// Digest settings shared by the feeders and the command line.
pub mod config;

/// Feeding files, readers and memory maps into a context.
pub mod feed;

/// Named contexts.
pub mod session;

#[cfg(test)]
mod test_common;


pub use crate::hash::Algorithm;
pub use crate::tiger::{TigerAlgorithm, TigerHash, TIGER_SIZE};
pub use crate::tree::{TreeHasher, Tth, BLOCK_SIZE};

/// Tiger Tree Hash of an in-memory buffer.
pub fn tth(data: &[u8]) -> TigerHash {
    let mut ctx = Tth::new();
    ctx.update(data);
    ctx.digest()
}
