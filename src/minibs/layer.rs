//! The layered fixed point (spec §4.5): for every load configuration and
//! every feasible quantised item configuration, decide whether the
//! algorithm wins when the adversary may send the bucketed items of `ic`
//! in any order. `win` recurses directly on load/item pairs reached by
//! placing one bucketed item at a time — a configuration is strictly more
//! loaded (and has strictly fewer items left) than anything it recurses
//! into, so the recursion always terminates — and memoizes every result it
//! computes, so `compute`'s outer sweep over `LoadConf::enumerate()` can
//! visit load configurations in any order without re-deriving shared
//! sub-results.
//!
//! Memoized by `(binomial index of lc, item-config id)` rather than by
//! full hash, since the item-config universe is enumerated with dense ids
//! up front (`ItemConfUniverse`) and load configurations are already
//! indexed compactly via `BinomialTable`.

use crate::binconf::{BinomialTable, ItemConf, LoadConf};
use crate::cache::KnownSumCache;
use crate::config::{M, R};
use crate::minibs::itemconf::ItemConfUniverse;
use crate::minibs::quantize::bucket_upper_bound;
use crate::zobrist::Zobrist;
use std::collections::{HashMap, HashSet};

pub struct MinibsLayer {
    table: HashMap<(u32, u32), bool>,
    /// inverse of `LoadConf::binomial_index`, populated alongside `table` so
    /// the binary cache writer (spec §6) can recover the load hash a table
    /// entry belongs to without re-enumerating every load configuration.
    loads_by_idx: HashMap<u32, Vec<u8>>,
}

impl MinibsLayer {
    /// compute the fixed point for every load configuration with total load
    /// at least `min_total` (the engine only needs the table for
    /// configurations beyond the known-sum threshold; below it every
    /// configuration is handled by the cheaper known-sum layer instead).
    pub fn compute(
        universe: &ItemConfUniverse,
        binomial: &BinomialTable,
        z: &crate::zobrist::Zobrist,
        known_sum: &mut KnownSumCache,
        min_total: u32,
    ) -> Self {
        let mut table = HashMap::new();
        let mut loads_by_idx = HashMap::new();
        for lc in LoadConf::enumerate() {
            let total: u32 = lc.loads().iter().map(|&l| l as u32).sum();
            if total < min_total {
                continue;
            }
            if is_volume_trivial(&lc) {
                known_sum.mark(lc.load_hash(z));
                continue;
            }
            let idx = lc.binomial_index(binomial);
            loads_by_idx.insert(idx, lc.loads().to_vec());
            for ic in universe.iter() {
                let id = universe.id_of(ic).expect("enumerated configuration has an id");
                let win = Self::win(&lc, ic, universe, binomial, &mut table, idx);
                table.insert((idx, id), win);
            }
        }
        Self { table, loads_by_idx }
    }

    /// per-item-configuration sets of winning load hashes, indexed by item-
    /// configuration id (spec §6 "per-layer winning sets"). Only load
    /// configurations this layer actually holds entries for (i.e. not
    /// short-circuited into the known-sum cache) are represented.
    pub fn winning_sets(&self, universe: &ItemConfUniverse, z: &Zobrist) -> Vec<HashSet<u64>> {
        let mut sets = vec![HashSet::new(); universe.len()];
        for (&(load_idx, item_id), &win) in &self.table {
            if !win {
                continue;
            }
            if let Some(loads) = self.loads_by_idx.get(&load_idx) {
                sets[item_id as usize].insert(z.load_hash(loads));
            }
        }
        sets
    }

    pub fn get(&self, load_idx: u32, item_id: u32) -> Option<bool> {
        self.table.get(&(load_idx, item_id)).copied()
    }

    /// `load_idx` must always be `lc.binomial_index(binomial)` — threaded
    /// through explicitly rather than recomputed on every call so the
    /// common (no-recursion) path avoids the table lookup's hashing cost.
    fn win(
        lc: &LoadConf,
        ic: &ItemConf,
        universe: &ItemConfUniverse,
        binomial: &BinomialTable,
        memo: &mut HashMap<(u32, u32), bool>,
        load_idx: u32,
    ) -> bool {
        if ic.buckets().iter().all(|&c| c == 0) {
            return true;
        }
        let id = universe.id_of(ic).expect("ic must be in the universe");
        if let Some(&cached) = memo.get(&(load_idx, id)) {
            return cached;
        }

        // adversary picks any nonzero bucket; the algorithm must survive
        // every choice (AND over buckets, OR over bin placements).
        let mut all_buckets_win = true;
        for bucket in 0..ic.buckets().len() {
            if ic.buckets()[bucket] == 0 {
                continue;
            }
            let real_size = bucket_upper_bound(bucket);
            let mut some_bin_wins = false;
            let mut tried = Vec::with_capacity(M);
            for &load in lc.loads() {
                if tried.contains(&load) {
                    continue;
                }
                tried.push(load);
                if load as usize + real_size > R - 1 {
                    continue;
                }
                let mut new_loads: Vec<u8> = lc.loads().to_vec();
                let pos = new_loads.iter().position(|&l| l == load).unwrap();
                new_loads[pos] = load + real_size as u8;
                new_loads.sort_unstable_by(|a, b| b.cmp(a));
                let child_lc = LoadConf::new(new_loads);
                let child_idx = child_lc.binomial_index(binomial);

                let mut buckets = ic.buckets().to_vec();
                buckets[bucket] -= 1;
                let child_ic = ItemConf::new(buckets);

                if Self::win(&child_lc, &child_ic, universe, binomial, memo, child_idx) {
                    some_bin_wins = true;
                    break;
                }
            }
            if !some_bin_wins {
                all_buckets_win = false;
                break;
            }
        }

        memo.insert((load_idx, id), all_buckets_win);
        all_buckets_win
    }
}

/// volume test identical in spirit to `LoadConf::is_alg_trivial`, used to
/// seed the known-sum cache while the layer is being built.
fn is_volume_trivial(lc: &LoadConf) -> bool {
    let total: u32 = lc.loads().iter().map(|&l| l as u32).sum();
    crate::config::is_alg_trivial_win(lc.loads(), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_configuration_always_wins() {
        let universe = ItemConfUniverse::build();
        let binomial = BinomialTable::new();
        let lc = LoadConf::new(vec![0, 0, 0]);
        let idx = lc.binomial_index(&binomial);
        assert!(MinibsLayer::win(&lc, &ItemConf::empty(), &universe, &binomial, &mut HashMap::new(), idx));
    }

    #[test]
    fn single_small_bucket_on_empty_bins_wins() {
        let universe = ItemConfUniverse::build();
        let binomial = BinomialTable::new();
        let lc = LoadConf::new(vec![0, 0, 0]);
        let idx = lc.binomial_index(&binomial);
        let mut buckets = vec![0u32; crate::config::D];
        buckets[0] = 1;
        let ic = ItemConf::new(buckets);
        assert!(MinibsLayer::win(&lc, &ic, &universe, &binomial, &mut HashMap::new(), idx));
    }
}
