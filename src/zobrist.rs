//! Zobrist hashing tables (spec §4.7).
//!
//! A single `Zobrist` value owns every random token table; it is built once
//! from a fixed seed and handed around by reference, the same way `Engine`
//! (§9 "global mutable state") owns the other big shared lookup tables
//! instead of stashing them behind `lazy_static`/globals. Deterministic
//! seeding (rather than `rand::rng()`) is what makes hashes reproducible
//! between the queen's generation pass and a worker's exploration pass.

use crate::config::{D, M, R, S};
use rand::rngs::SmallRng;
use rand::RngCore;
use rand::SeedableRng;

/// max multiplicity we ever hash for a single item size: at most M*S/size
/// items of a given size can appear in a feasible load, but we size the
/// table generously at `R` to keep indexing branch-free.
const MAX_MULT: usize = R + 1;

#[derive(Debug)]
pub struct Zobrist {
    /// Zi[size][multiplicity]: item-count rolling hash, size in 1..=S.
    zi: Vec<Vec<u64>>,
    /// Zl[bin][load]: per-bin load rolling hash, bin in 0..M, load in 0..=R.
    zl: Vec<Vec<u64>>,
    /// Zlow[size]: state-hash tiebreaker keyed on lowest sendable item.
    zlow: Vec<u64>,
    /// Zlast[size]: adversary-vertex hash keyed on last item sent.
    zlast: Vec<u64>,
    /// Zalg[size]: algorithm-vertex hash keyed on the item just offered.
    zalg: Vec<u64>,
    /// item-configuration hash for the minibs quantised buckets, bucket in 0..D.
    zi_quantised: Vec<Vec<u64>>,
}

impl Zobrist {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut next = || rng.next_u64();
        Self {
            zi: (0..=S).map(|_| (0..MAX_MULT).map(|_| next()).collect()).collect(),
            zl: (0..M).map(|_| (0..=R).map(|_| next()).collect()).collect(),
            zlow: (0..=S).map(|_| next()).collect(),
            zlast: (0..=S).map(|_| next()).collect(),
            zalg: (0..=S).map(|_| next()).collect(),
            zi_quantised: (0..D).map(|_| (0..MAX_MULT).map(|_| next()).collect()).collect(),
        }
    }

    pub fn fixed() -> Self {
        Self::new(crate::config::ZOBRIST_SEED)
    }

    /// load hash = XOR over bins of Zl[i, loads[i]].
    pub fn load_hash(&self, loads: &[u8]) -> u64 {
        loads
            .iter()
            .enumerate()
            .map(|(bin, &load)| self.zl[bin][load as usize])
            .fold(0, |a, b| a ^ b)
    }

    /// item hash = XOR over sizes of Zi[s, items[s]].
    pub fn item_hash(&self, items: &[u32]) -> u64 {
        items
            .iter()
            .enumerate()
            .skip(1)
            .map(|(size, &mult)| self.zi[size][mult as usize])
            .fold(0, |a, b| a ^ b)
    }

    /// recompute the token for a single (size, multiplicity) pair, for
    /// incremental XOR-out/XOR-in rehashing after one item moves.
    pub fn item_token(&self, size: usize, mult: u32) -> u64 {
        self.zi[size][mult as usize]
    }

    pub fn bin_token(&self, bin: usize, load: u8) -> u64 {
        self.zl[bin][load as usize]
    }

    pub fn zlow(&self, size: usize) -> u64 {
        self.zlow[size]
    }

    pub fn zlast(&self, size: usize) -> u64 {
        self.zlast[size]
    }

    pub fn zalg(&self, size: usize) -> u64 {
        self.zalg[size]
    }

    /// state hash = load_hash XOR item_hash XOR Zlow[lowest_sendable(last_item)].
    pub fn state_hash(&self, load_hash: u64, item_hash: u64, lowest_sendable: usize) -> u64 {
        load_hash ^ item_hash ^ self.zlow(lowest_sendable)
    }

    /// adv-vertex hash = load_hash XOR item_hash XOR Zlast[last_item].
    pub fn adv_hash(&self, load_hash: u64, item_hash: u64, last_item: usize) -> u64 {
        load_hash ^ item_hash ^ self.zlast(last_item)
    }

    /// alg-vertex hash = load_hash XOR item_hash XOR Zalg[next_item].
    pub fn alg_hash(&self, load_hash: u64, item_hash: u64, next_item: usize) -> u64 {
        load_hash ^ item_hash ^ self.zalg(next_item)
    }

    /// raw Zi table, row per item size (0..=S), for persisting/validating
    /// the binary minibs cache (spec §6).
    pub fn zi_table(&self) -> &[Vec<u64>] {
        &self.zi
    }

    /// raw Zl table, row per bin (0..M), for persisting/validating the
    /// binary minibs cache (spec §6).
    pub fn zl_table(&self) -> &[Vec<u64>] {
        &self.zl
    }

    pub fn quantised_token(&self, bucket: usize, mult: u32) -> u64 {
        self.zi_quantised[bucket][mult as usize]
    }

    /// item hash over D quantised buckets, used only by the minibs precomputation.
    pub fn quantised_hash(&self, buckets: &[u32]) -> u64 {
        buckets
            .iter()
            .enumerate()
            .map(|(bucket, &mult)| self.quantised_token(bucket, mult))
            .fold(0, |a, b| a ^ b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_instances() {
        let a = Zobrist::fixed();
        let b = Zobrist::fixed();
        assert_eq!(a.load_hash(&[3, 2, 1]), b.load_hash(&[3, 2, 1]));
        assert_eq!(a.zlow(5), b.zlow(5));
    }

    #[test]
    fn load_hash_is_order_sensitive_per_slot() {
        let z = Zobrist::fixed();
        // hashing is over (bin-index, load), so permuting which bin holds
        // which load changes the hash even though the multiset is the same.
        assert_ne!(z.load_hash(&[3, 2, 1]), z.load_hash(&[1, 2, 3]));
    }
}
