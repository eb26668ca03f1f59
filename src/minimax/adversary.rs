//! Adversary step (spec §4.3, 5 sub-steps): given a bin configuration,
//! decide which item (if any) the adversary should send next.
//!
//! 1. leaf check — trivial volume wins, heuristic closure, known-sum
//!    closure, and a state-cache hit all short-circuit the recursion.
//! 2. generate candidate item sizes, respecting monotonicity against the
//!    last item sent (spec §3 "Monotonicity").
//! 3. for each candidate, recurse into the algorithm step.
//! 4. AND-combine: the adversary wins if *every* algorithm response loses,
//!    and wins outright the moment *one* candidate already forces an
//!    algorithm loss.
//! 5. cache the decided verdict in the state cache.

use crate::binconf::BinConf;
use crate::config::{MONOTONICITY, S};
use crate::dag::Victory;
use crate::minimax::algorithm::evaluate_algorithm;
use crate::minimax::state::SearchState;

pub fn evaluate_adversary(state: &mut SearchState, bc: &mut BinConf) -> Victory {
    if state.is_cancelled() {
        return Victory::Irrelevant;
    }

    let lowest_sendable = (bc.lowest_load() as usize).min(S);
    let state_hash = state.z.state_hash(bc.load_hash(), bc.item_hash(), lowest_sendable);

    if let Some(cached) = state.state_cache.get(state_hash) {
        return cached;
    }

    if is_alg_trivial_win(bc) {
        state.state_cache.insert(state_hash, Victory::Alg);
        return Victory::Alg;
    }

    if state.known_sum.is_known(bc.load_hash()) {
        state.state_cache.insert(state_hash, Victory::Alg);
        return Victory::Alg;
    }

    if state.heuristics.classify_adversary(bc, state.z, state.dp_cache).is_some() {
        state.state_cache.insert(state_hash, Victory::Adv);
        return Victory::Adv;
    }

    let last = bc.last_item().max(1);
    let floor = last.saturating_sub(MONOTONICITY as u8).max(1);

    // cap the ceiling by the DP oracle's maximum feasible item (spec §4.3
    // step 3): an item the offline packer couldn't place alongside the
    // current multiset is never worth the adversary's time to send.
    let ceiling = crate::dp::max_feasible_item(bc.loads(), bc.items(), state.z, state.dp_cache)
        .unwrap_or(0)
        .min(S as u8);

    // an advice hint for this bc is tried first; it never changes the
    // verdict (every candidate is still tried on a miss), only how quickly
    // a winning branch is found.
    let mut candidates: Vec<u8> = (floor..=ceiling).rev().collect();
    if let Some(suggested) = state.hints.suggestion(bc.load_hash() ^ bc.item_hash()) {
        if let Some(pos) = candidates.iter().position(|&i| i == suggested) {
            candidates.swap(0, pos);
        }
    }

    let mut all_alg = true;
    for item in candidates {
        let verdict = evaluate_algorithm(state, bc, item);
        match verdict {
            Victory::Adv => {
                state.state_cache.insert(state_hash, Victory::Adv);
                return Victory::Adv;
            }
            Victory::Alg => {}
            Victory::Irrelevant => return Victory::Irrelevant,
            Victory::Uncertain => all_alg = false,
        }
    }

    let verdict = if all_alg { Victory::Alg } else { Victory::Uncertain };
    if verdict.is_decided() {
        state.state_cache.insert(state_hash, verdict);
    }
    verdict
}

/// volume test (spec §4.3 step 1, mirrors `LoadConf::is_alg_trivial`).
fn is_alg_trivial_win(bc: &BinConf) -> bool {
    let total: u32 = bc.loads().iter().map(|&l| l as u32).sum();
    crate::config::is_alg_trivial_win(bc.loads(), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{KnownSumCache, StateCache};
    use crate::dag::MinimaxMode;
    use crate::dp::DpCache;
    use crate::heuristics::HeuristicStrategy;
    use crate::io::Hints;
    use crate::zobrist::Zobrist;

    #[test]
    fn saturated_configuration_is_a_trivial_algorithm_win() {
        let z = Zobrist::new(1);
        let mut dp_cache = DpCache::new(6);
        let mut state_cache = StateCache::new(6);
        let known_sum = KnownSumCache::new();
        let heuristics = HeuristicStrategy::new();
        let hints = Hints::empty();
        let mut st = SearchState::new(&z, &mut dp_cache, &mut state_cache, &known_sum, &heuristics, &hints, MinimaxMode::Exploring);
        let mut bc = BinConf::empty(&z);
        // fill every bin to capacity S so the volume test short-circuits
        // before any full recursive expansion is attempted; each assign
        // targets the currently-lightest (last, sorted-ascending-from-the-
        // back) bin so the three items land on three distinct bins.
        let last = bc.loads().len() - 1;
        let u0 = bc.assign(last, S as u8, &z);
        let u1 = bc.assign(last, S as u8, &z);
        let u2 = bc.assign(last, S as u8, &z);
        let verdict = evaluate_adversary(&mut st, &mut bc);
        assert_eq!(verdict, Victory::Alg);
        bc.unassign(u2);
        bc.unassign(u1);
        bc.unassign(u0);
    }

    #[test]
    fn cancellation_flag_short_circuits_before_any_cache_lookup() {
        use std::sync::atomic::AtomicBool;

        let z = Zobrist::new(1);
        let mut dp_cache = DpCache::new(6);
        let mut state_cache = StateCache::new(6);
        let known_sum = KnownSumCache::new();
        let heuristics = HeuristicStrategy::new();
        let hints = Hints::empty();
        let flag = AtomicBool::new(true);
        let st = SearchState::new(&z, &mut dp_cache, &mut state_cache, &known_sum, &heuristics, &hints, MinimaxMode::Exploring);
        let mut st = st.with_cancellation(&flag);
        let mut bc = BinConf::empty(&z);
        assert_eq!(evaluate_adversary(&mut st, &mut bc), Victory::Irrelevant);
    }
}
