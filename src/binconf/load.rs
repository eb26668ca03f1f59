//! Load configuration (lc): the bin part of a bc, with no item information
//! (spec §3 "Load configuration"). Used throughout the minibs precomputation,
//! where we iterate every sorted m-tuple in `[0, R)^m` independent of which
//! items produced it.

use crate::binconf::binary::BinomialTable;
use crate::config::{M, R};
use crate::zobrist::Zobrist;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadConf {
    loads: Vec<u8>,
}

impl LoadConf {
    pub fn new(loads: Vec<u8>) -> Self {
        debug_assert_eq!(loads.len(), M);
        debug_assert!(loads.windows(2).all(|w| w[0] >= w[1]));
        Self { loads }
    }

    pub fn loads(&self) -> &[u8] {
        &self.loads
    }

    pub fn load_hash(&self, z: &Zobrist) -> u64 {
        z.load_hash(&self.loads)
    }

    pub fn binomial_index(&self, table: &BinomialTable) -> u32 {
        table.index_of(&self.loads)
    }

    /// every sorted non-increasing m-tuple with entries in `[0, R)`, in
    /// lexicographic order — the iteration space for the layered fixed point
    /// (spec §4.5).
    pub fn enumerate() -> impl Iterator<Item = LoadConf> {
        LoadConfIter::new()
    }

    /// volume test: all remaining capacity fits on the lightest bin, so any
    /// assignment from here on is an algorithm win (spec §4.3 step 4a).
    pub fn is_alg_trivial(&self) -> bool {
        let total: u32 = self.loads.iter().map(|&l| l as u32).sum();
        crate::config::is_alg_trivial_win(&self.loads, total)
    }
}

struct LoadConfIter {
    current: Option<Vec<u8>>,
}

impl LoadConfIter {
    fn new() -> Self {
        Self {
            current: Some(vec![0u8; M]),
        }
    }
}

impl Iterator for LoadConfIter {
    type Item = LoadConf;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let result = LoadConf::new(current.clone());
        self.current = advance(current);
        Some(result)
    }
}

/// next sorted non-increasing tuple in `[0, R)^m`, treating the tuple as a
/// mixed-radix counter with the descending-sort constraint baked in via
/// per-position caps equal to the previous position's value.
fn advance(mut loads: Vec<u8>) -> Option<Vec<u8>> {
    let m = loads.len();
    for i in (0..m).rev() {
        let cap = if i == 0 { (R - 1) as u8 } else { loads[i - 1] };
        if loads[i] < cap {
            loads[i] += 1;
            for slot in &mut loads[i + 1..] {
                *slot = 0;
            }
            return Some(loads);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_stays_sorted_and_in_range() {
        for lc in LoadConf::enumerate().take(5_000) {
            assert!(lc.loads().windows(2).all(|w| w[0] >= w[1]));
            assert!(lc.loads().iter().all(|&l| (l as usize) < R));
        }
    }

    #[test]
    fn enumeration_is_exhaustive_count() {
        // stars-and-bars count of sorted m-tuples in [0, R) is C(R + m - 1, m).
        let table = BinomialTable::new();
        let expected = table.choose(R + M - 1, M);
        let count = LoadConf::enumerate().count() as u64;
        assert_eq!(count, expected);
    }
}
