//! DP cache: memoizes multi-knapsack feasibility verdicts keyed on the XOR
//! of a load-configuration hash and an item-configuration hash (spec §4.2,
//! §4.7). Built on the same generic probing cache as the state cache.

use crate::cache::ProbingCache;

pub struct DpCache {
    inner: ProbingCache<bool>,
}

impl DpCache {
    pub fn new(log2_capacity: u32) -> Self {
        Self {
            inner: ProbingCache::new(log2_capacity),
        }
    }

    pub fn get(&self, load_hash: u64, item_hash: u64) -> Option<bool> {
        self.inner.get(load_hash ^ item_hash)
    }

    pub fn insert(&self, load_hash: u64, item_hash: u64, feasible: bool) {
        self.inner.insert(load_hash ^ item_hash, feasible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feasibility_round_trips_by_combined_hash() {
        let cache = DpCache::new(6);
        cache.insert(1, 2, true);
        assert_eq!(cache.get(1, 2), Some(true));
        assert_eq!(cache.get(1, 3), None);
    }
}
