//! Known-sum cache: a plain hash set of load-configuration hashes for which
//! the algorithm is already known to win regardless of remaining items, once
//! total load crosses the known-sum threshold (spec §4.5 "known-sum layer").
//! Unlike `StateCache`/`DpCache` this one never evicts — entries are derived
//! once during minibs precomputation and are correct for the lifetime of the
//! process, so a plain `HashSet` (not the probing cache) is the right tool.

use std::collections::HashSet;

#[derive(Default)]
pub struct KnownSumCache {
    known: HashSet<u64>,
}

impl KnownSumCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, load_hash: u64) {
        self.known.insert(load_hash);
    }

    pub fn is_known(&self, load_hash: u64) -> bool {
        self.known.contains(&load_hash)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// every known-winning load hash, for persisting the minibs binary
    /// cache (spec §6) and for rebuilding the cache from a loaded one.
    pub fn hashes(&self) -> &HashSet<u64> {
        &self.known
    }

    /// replace the set wholesale, used when restoring from the binary
    /// cache (spec §7) instead of re-running the precomputation.
    pub fn restore(&mut self, known: HashSet<u64>) {
        self.known = known;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_hashes_are_known() {
        let mut cache = KnownSumCache::new();
        cache.mark(7);
        assert!(cache.is_known(7));
        assert!(!cache.is_known(8));
    }
}
