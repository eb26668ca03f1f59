//! State cache: memoizes a fully-decided vertex's victor by state hash
//! (spec §4.7), independent of the Game DAG — a configuration reachable by
//! two different item sequences shares one entry here even though it may
//! occupy two different DAG vertices before the updater merges them.

use crate::cache::probing::{CacheValue, ProbingCache};
use crate::dag::Victory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Adv,
    Alg,
}

impl CacheValue for Verdict {
    fn to_byte(self) -> u8 {
        match self {
            Verdict::Adv => 0,
            Verdict::Alg => 1,
        }
    }

    fn from_byte(byte: u8) -> Self {
        if byte == 0 {
            Verdict::Adv
        } else {
            Verdict::Alg
        }
    }
}

pub struct StateCache {
    inner: ProbingCache<Verdict>,
}

impl StateCache {
    pub fn new(log2_capacity: u32) -> Self {
        Self {
            inner: ProbingCache::new(log2_capacity),
        }
    }

    pub fn get(&self, state_hash: u64) -> Option<Victory> {
        self.inner.get(state_hash).map(|v| match v {
            Verdict::Adv => Victory::Adv,
            Verdict::Alg => Victory::Alg,
        })
    }

    /// only decided verdicts are cacheable; `Uncertain`/`Irrelevant` are not
    /// meaningful across different recursion contexts.
    pub fn insert(&self, state_hash: u64, verdict: Victory) {
        let v = match verdict {
            Victory::Adv => Verdict::Adv,
            Victory::Alg => Verdict::Alg,
            Victory::Uncertain | Victory::Irrelevant => return,
        };
        self.inner.insert(state_hash, v);
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.inner.hits() + self.inner.misses();
        if total == 0 {
            0.0
        } else {
            self.inner.hits() as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decided_verdicts_round_trip() {
        let cache = StateCache::new(6);
        cache.insert(99, Victory::Alg);
        assert_eq!(cache.get(99), Some(Victory::Alg));
    }

    #[test]
    fn uncertain_verdicts_are_not_stored() {
        let cache = StateCache::new(6);
        cache.insert(100, Victory::Uncertain);
        assert_eq!(cache.get(100), None);
    }
}
