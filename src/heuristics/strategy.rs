//! `HeuristicStrategy`: the single object the minimax evaluator consults to
//! decide whether a vertex can be closed as a heuristic leaf, and which
//! `Heuristic` tag to stamp on it (spec §4.4, §4.1 "heuristic leaf").
//!
//! The two kinds of heuristic decide different players' victories and fire
//! at different steps, so they are exposed as two separate methods rather
//! than one `classify`:
//!
//! - large-item and five-nine (spec.md:93, `heur_adv.hpp`'s
//!   `adversary_heuristics`) are checked at the *adversary* step, before any
//!   item is even chosen, and are themselves **adversary wins**: they prove
//!   the adversary can force the stretched capacity regardless of how the
//!   algorithm responds from here.
//! - the good-situation predicates GS1-GS6 (spec.md:99, `gs.hpp`'s
//!   `gsheuristic(b, k, ...)`) are checked at the *algorithm* step, once per
//!   candidate item `k` against the configuration that results from
//!   placing `k`, and are **algorithm wins**.

use crate::binconf::BinConf;
use crate::dag::Heuristic;
use crate::dp::DpCache;
use crate::heuristics::{five_nine, good_situation, large_item};
use crate::zobrist::Zobrist;

pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }

    /// adversary-step check (spec §4.3 step 1): a hit here is an immediate
    /// adversary win, proving the lower bound without any further recursion.
    /// Both heuristics materialise the item sequence they'd play before
    /// reporting success; only the tag is kept on the vertex, the sequence
    /// itself is discardable proof that a winning continuation exists.
    pub fn classify_adversary(&self, bc: &BinConf, z: &Zobrist, dp_cache: &DpCache) -> Option<Heuristic> {
        if large_item::large_item_heuristic(bc, z, dp_cache).is_some() {
            return Some(Heuristic::LargeItem);
        }
        if five_nine::five_nine_heuristic(bc, z, dp_cache).is_some() {
            return Some(Heuristic::FiveNine);
        }
        None
    }

    /// algorithm-step check (spec §4.3 step 2, §4.4): `bc` is the
    /// configuration already reached by placing the candidate item in one
    /// particular bin. True means the algorithm can close this placement as
    /// a win without recursing into the adversary step.
    pub fn is_good_situation(&self, bc: &BinConf) -> bool {
        good_situation::any_good_situation(bc)
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zobrist::Zobrist;

    #[test]
    fn empty_configuration_has_no_adversary_heuristic() {
        use crate::dp::DpCache;
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let bc = BinConf::empty(&z);
        assert_eq!(HeuristicStrategy::new().classify_adversary(&bc, &z, &cache), None);
    }

    #[test]
    fn empty_configuration_is_not_a_good_situation() {
        let z = Zobrist::new(1);
        let bc = BinConf::empty(&z);
        assert!(!HeuristicStrategy::new().is_good_situation(&bc));
    }
}
