#![allow(dead_code)]

use tigertree::{Algorithm, TigerAlgorithm, TigerHash, BLOCK_SIZE};

/// Deterministic input whose consecutive blocks all differ.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Textbook construction over the whole input held in memory: for n > 1
/// leaves, split at the largest power of two below n and recurse.
pub fn reference_root(data: &[u8]) -> TigerHash {
    let mut a = TigerAlgorithm::new();
    let leaves: Vec<TigerHash> = if data.is_empty() {
        vec![a.leaf(&[])]
    } else {
        data.chunks(BLOCK_SIZE).map(|b| a.leaf(b)).collect()
    };
    subtree(&mut a, &leaves)
}

fn subtree(a: &mut TigerAlgorithm, leaves: &[TigerHash]) -> TigerHash {
    if leaves.len() == 1 {
        return leaves[0];
    }

    let mut k = 1;
    while k * 2 < leaves.len() {
        k *= 2;
    }

    let left = subtree(a, &leaves[..k]);
    let right = subtree(a, &leaves[k..]);
    a.node(&left, &right)
}
