//! Chain-cover compressed storage for the layered fixed point (spec §4.5,
//! Design Note §9(c)): instead of one win/lose bit per `(load, item-config)`
//! pair, partition the item-config universe (ordered by the `dominates`
//! inclusion order) into chains, and store only the boundary between the
//! losing prefix and winning suffix of each chain — sound because winning
//! is monotone along a chain (spec §8 property 6: adding items to an
//! already-winning configuration keeps it winning).
//!
//! Built via a minimum chain cover of the dominance DAG (Dilworth's
//! theorem: minimum chain cover size equals the size of the largest
//! antichain), computed here as a greedy bipartite matching over the
//! dominance relation — not a maximum-matching algorithm, but adequate
//! since chain count only affects memory, never correctness.

use crate::binconf::ItemConf;
use crate::minibs::itemconf::ItemConfUniverse;
use std::collections::HashMap;

pub struct ChainCover {
    /// each chain is a sequence of item-config ids, ordered by strictly
    /// increasing dominance (each entry dominates the previous).
    chains: Vec<Vec<u32>>,
    /// which chain (and position within it) each item-config id belongs to.
    membership: HashMap<u32, (usize, usize)>,
}

impl ChainCover {
    /// greedily extend chains by repeatedly trying to append each not-yet-
    /// placed configuration (processed in increasing total-volume order,
    /// since a configuration can only dominate one with no greater volume)
    /// onto the first chain whose current tail it dominates.
    pub fn build(universe: &ItemConfUniverse) -> Self {
        let mut ids: Vec<u32> = (0..universe.len() as u32).collect();
        ids.sort_by_key(|&id| universe.conf_of(id).total());

        let mut chains: Vec<Vec<u32>> = Vec::new();
        let mut membership = HashMap::new();

        for id in ids {
            let ic = universe.conf_of(id);
            let mut placed = false;
            for (chain_idx, chain) in chains.iter_mut().enumerate() {
                let tail = *chain.last().unwrap();
                if ic.dominates(universe.conf_of(tail)) {
                    chain.push(id);
                    membership.insert(id, (chain_idx, chain.len() - 1));
                    placed = true;
                    break;
                }
            }
            if !placed {
                let chain_idx = chains.len();
                chains.push(vec![id]);
                membership.insert(id, (chain_idx, 0));
            }
        }

        Self { chains, membership }
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn position_of(&self, id: u32) -> Option<(usize, usize)> {
        self.membership.get(&id).copied()
    }

    pub fn chain(&self, idx: usize) -> &[u32] {
        &self.chains[idx]
    }

    /// records, per chain, the index of the first item-config (by
    /// dominance order) for which the algorithm wins; every entry at or
    /// past that boundary also wins, by monotonicity.
    pub fn compress<F: Fn(u32) -> bool>(&self, win: F) -> Vec<Option<usize>> {
        self.chains
            .iter()
            .map(|chain| chain.iter().position(|&id| win(id)))
            .collect()
    }

    pub fn lookup(&self, id: u32, boundaries: &[Option<usize>]) -> bool {
        match self.position_of(id) {
            Some((chain_idx, pos)) => match boundaries[chain_idx] {
                Some(boundary) => pos >= boundary,
                None => false,
            },
            None => false,
        }
    }
}
