//! Algorithm step (spec §4.3, 3 sub-steps): given a bin configuration and
//! the item the adversary just offered, decide where to place it.
//!
//! 1. leaf check — does placing the item anywhere already decide the game?
//! 2. generate one child per distinct bin choice (placing into two bins
//!    holding equal load is symmetric, so only the first is tried).
//! 3. recurse into the adversary step on each child, OR-combining verdicts:
//!    the algorithm wins if *some* placement leads to an algorithm win.

use crate::binconf::BinConf;
use crate::config::{M, R};
use crate::dag::Victory;
use crate::minimax::adversary::evaluate_adversary;
use crate::minimax::state::SearchState;

pub fn evaluate_algorithm(state: &mut SearchState, bc: &mut BinConf, item: u8) -> Victory {
    if state.is_cancelled() {
        return Victory::Irrelevant;
    }

    let mut tried_loads = Vec::with_capacity(M);
    let mut all_adv = true;

    for bin in 0..bc.loads().len() {
        let load = bc.loads()[bin];
        if tried_loads.contains(&load) {
            continue;
        }
        tried_loads.push(load);

        if load as usize + item as usize > R - 1 {
            // this placement alone overflows the stretched capacity: an
            // immediate adversary win for this branch, skip recursing.
            continue;
        }

        let undo = bc.assign(bin, item, state.z);

        if state.heuristics.is_good_situation(bc) {
            bc.unassign(undo);
            return Victory::Alg;
        }

        state.descend();
        let verdict = evaluate_adversary(state, bc);
        bc.unassign(undo);
        state.ascend();

        match verdict {
            Victory::Alg => return Victory::Alg,
            Victory::Adv => {}
            Victory::Irrelevant => return Victory::Irrelevant,
            Victory::Uncertain => all_adv = false,
        }
    }

    if all_adv {
        Victory::Adv
    } else {
        Victory::Uncertain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{KnownSumCache, StateCache};
    use crate::dp::DpCache;
    use crate::heuristics::HeuristicStrategy;
    use crate::io::Hints;
    use crate::dag::MinimaxMode;
    use crate::zobrist::Zobrist;

    #[test]
    fn oversized_item_on_every_bin_is_an_adversary_win() {
        let z = Zobrist::new(1);
        let mut dp_cache = DpCache::new(6);
        let mut state_cache = StateCache::new(6);
        let known_sum = KnownSumCache::new();
        let heuristics = HeuristicStrategy::new();
        let hints = Hints::empty();
        let mut st = SearchState::new(&z, &mut dp_cache, &mut state_cache, &known_sum, &heuristics, &hints, MinimaxMode::Exploring);
        let mut bc = BinConf::empty(&z);
        let verdict = evaluate_algorithm(&mut st, &mut bc, (R + 1) as u8);
        assert_eq!(verdict, Victory::Adv);
    }
}
