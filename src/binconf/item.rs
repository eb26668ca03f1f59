//! Item configuration (ic) over a scaled denominator D (spec §3). Used only
//! by the minibs precomputation: an array of D counters, counter `j` holding
//! the number of items whose real size falls in the half-open bucket
//! `((j·S)/D, ((j+1)·S)/D]`.

use crate::config::{D, M, S};
use crate::zobrist::Zobrist;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemConf {
    buckets: Vec<u32>,
}

impl ItemConf {
    pub fn empty() -> Self {
        Self {
            buckets: vec![0; D],
        }
    }

    pub fn new(buckets: Vec<u32>) -> Self {
        debug_assert_eq!(buckets.len(), D);
        Self { buckets }
    }

    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    pub fn hash(&self, z: &Zobrist) -> u64 {
        z.quantised_hash(&self.buckets)
    }

    /// real size `s` in `1..=S` maps to `floor(s*D/S)`, adjusted so an exact
    /// multiple of `S/D` falls into the bucket below it rather than creating
    /// a spurious empty top bucket (spec §4.5 "Quantisation").
    pub fn shrink(real_size: usize) -> usize {
        debug_assert!(real_size >= 1 && real_size <= S);
        let raw = real_size * D / S;
        if raw * S == real_size * D && raw > 0 {
            raw - 1
        } else {
            raw.min(D - 1)
        }
    }

    /// total quantised volume must respect the same per-bin ceiling as real
    /// items: at most `(D-1)*m` is ever feasible to enumerate.
    pub fn total(&self) -> u32 {
        self.buckets
            .iter()
            .enumerate()
            .map(|(bucket, &mult)| bucket as u32 * mult)
            .sum()
    }

    pub fn is_within_volume_bound(&self) -> bool {
        self.total() <= (D as u32 - 1) * M as u32
    }

    /// componentwise ≤, the inclusion order the minibs monotonicity property
    /// (spec §8 property 6) and the chain-cover construction (§4.5) rely on.
    pub fn dominates(&self, other: &ItemConf) -> bool {
        self.buckets
            .iter()
            .zip(other.buckets.iter())
            .all(|(a, b)| a >= b)
    }

    pub fn with_incremented(&self, bucket: usize) -> ItemConf {
        let mut buckets = self.buckets.clone();
        buckets[bucket] += 1;
        ItemConf::new(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_is_monotone_nondecreasing() {
        let mut prev = 0;
        for size in 1..=S {
            let bucket = ItemConf::shrink(size);
            assert!(bucket >= prev);
            prev = bucket;
        }
    }

    #[test]
    fn exact_multiple_lands_in_lower_bucket() {
        // size = S maps to the top real size; with our adjustment it still
        // lands at bucket D-1, the highest valid index.
        assert_eq!(ItemConf::shrink(S), D - 1);
    }

    #[test]
    fn dominates_is_a_partial_order_reflexive() {
        let ic = ItemConf::new(vec![1, 0, 2, 0, 0, 0]);
        assert!(ic.dominates(&ic));
    }
}
