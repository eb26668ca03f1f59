//! Generic open-addressed probing cache (spec §4.7 "probing discipline").
//!
//! Slots are addressed by `hash % capacity`; a lookup walks at most
//! `PROBE_WINDOW` consecutive slots looking for a matching hash before
//! giving up. On insert, ties are broken by evicting a uniformly random
//! slot within the probe window rather than implementing a recency
//! policy — cheap, and adequate for a cache whose entries degrade
//! gracefully into "just recompute it" misses.
//!
//! Slots are lock-free (spec §5 "shared mutable state ... DP and state
//! caches (lock-free, lossy)"): each one is a small atomic state machine
//! (`EMPTY` → `WRITING` → `READY`) plus an atomic hash and an atomic value
//! byte, so `get`/`insert` both take `&self` and many worker threads can
//! share one `ProbingCache` without a lock. A reader that observes a slot
//! mid-write just treats it as occupied-by-something-else and keeps
//! probing — never a torn read, at worst a spurious miss, which the cache's
//! own "miss just means recompute" contract already tolerates.

use crate::config::PROBE_WINDOW;
use rand::Rng;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

const EMPTY: u8 = 0;
const WRITING: u8 = 1;
const READY: u8 = 2;

/// a cache value small enough to round-trip through a single byte; both of
/// this crate's instantiations (`bool` for the DP cache, `Verdict` for the
/// state cache) are one bit of real information.
pub trait CacheValue: Copy {
    fn to_byte(self) -> u8;
    fn from_byte(byte: u8) -> Self;
}

impl CacheValue for bool {
    fn to_byte(self) -> u8 {
        self as u8
    }

    fn from_byte(byte: u8) -> Self {
        byte != 0
    }
}

struct Slot {
    state: AtomicU8,
    hash: AtomicU64,
    value: AtomicU8,
}

impl Slot {
    fn empty() -> Self {
        Self {
            state: AtomicU8::new(EMPTY),
            hash: AtomicU64::new(0),
            value: AtomicU8::new(0),
        }
    }
}

pub struct ProbingCache<V> {
    slots: Vec<Slot>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    _value: PhantomData<V>,
}

impl<V: CacheValue> ProbingCache<V> {
    /// `log2_capacity` slots are allocated up front (spec §4.7, `conflog`/`dplog`).
    pub fn new(log2_capacity: u32) -> Self {
        let capacity = 1usize << log2_capacity;
        let slots = (0..capacity).map(|_| Slot::empty()).collect();
        Self {
            slots,
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            _value: PhantomData,
        }
    }

    fn home(&self, hash: u64) -> usize {
        (hash as usize) & (self.capacity - 1)
    }

    pub fn get(&self, hash: u64) -> Option<V> {
        let home = self.home(hash);
        let window = PROBE_WINDOW.min(self.capacity);
        for offset in 0..window {
            let idx = (home + offset) % self.capacity;
            let slot = &self.slots[idx];
            let state = slot.state.load(Ordering::Acquire);
            if state == EMPTY {
                break;
            }
            if state == READY && slot.hash.load(Ordering::Acquire) == hash {
                let value = V::from_byte(slot.value.load(Ordering::Acquire));
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(value);
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// insert or overwrite; if every slot in the probe window is claimed by
    /// a different key, evict a uniformly random one of them.
    pub fn insert(&self, hash: u64, value: V) {
        let byte = value.to_byte();
        let home = self.home(hash);
        let window = PROBE_WINDOW.min(self.capacity);
        for offset in 0..window {
            let idx = (home + offset) % self.capacity;
            let slot = &self.slots[idx];
            match slot.state.compare_exchange(EMPTY, WRITING, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => {
                    slot.hash.store(hash, Ordering::Relaxed);
                    slot.value.store(byte, Ordering::Relaxed);
                    slot.state.store(READY, Ordering::Release);
                    return;
                }
                Err(READY) if slot.hash.load(Ordering::Acquire) == hash => {
                    slot.value.store(byte, Ordering::Release);
                    return;
                }
                Err(_) => {}
            }
        }
        let victim = home + rand::rng().random_range(0..window);
        let idx = victim % self.capacity;
        let slot = &self.slots[idx];
        slot.state.store(WRITING, Ordering::Release);
        slot.hash.store(hash, Ordering::Relaxed);
        slot.value.store(byte, Ordering::Relaxed);
        slot.state.store(READY, Ordering::Release);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::empty();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let cache: ProbingCache<bool> = ProbingCache::new(8);
        cache.insert(42, true);
        assert_eq!(cache.get(42), Some(true));
    }

    #[test]
    fn miss_on_absent_key_is_recorded() {
        let cache: ProbingCache<bool> = ProbingCache::new(8);
        assert_eq!(cache.get(1234), None);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn colliding_keys_within_window_both_fit() {
        let cache: ProbingCache<bool> = ProbingCache::new(8);
        cache.insert(1, true);
        cache.insert(257, false); // same home slot modulo 256, different hash
        assert_eq!(cache.get(1), Some(true));
        assert_eq!(cache.get(257), Some(false));
    }

    #[test]
    fn shared_across_threads_via_plain_reference() {
        let cache: ProbingCache<bool> = ProbingCache::new(8);
        std::thread::scope(|scope| {
            for i in 0..8u64 {
                let cache = &cache;
                scope.spawn(move || cache.insert(i, i % 2 == 0));
            }
        });
        for i in 0..8u64 {
            assert_eq!(cache.get(i), Some(i % 2 == 0));
        }
    }
}
