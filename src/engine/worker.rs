//! Worker: exploration-mode minimax over a single task (spec §4.3 mode
//! specialisation — exploring). Each worker thread keeps its own DP and
//! state caches rather than sharing the queen's — a miss just means
//! recomputing, never a correctness issue (spec §4.7), and thread-local
//! caches avoid a contended global lock on the search's hottest path.

use crate::binconf::BinConf;
use crate::config::{conflog, dplog};
use crate::dag::{MinimaxMode, Victory};
use crate::engine::Engine;
use crate::minimax::{evaluate_adversary, SearchState};
use crate::task::Task;
use std::cell::RefCell;

use crate::cache::StateCache;
use crate::dp::DpCache;

thread_local! {
    static DP_CACHE: RefCell<DpCache> = RefCell::new(DpCache::new(dplog()));
    static STATE_CACHE: RefCell<StateCache> = RefCell::new(StateCache::new(conflog()));
}

/// run exploration-mode minimax on one task, returning its verdict. A
/// task never resolves to `Uncertain`: exploration recurses to completion
/// or is abandoned early by `root_solved` (in which case `Irrelevant` is
/// returned so the queen's updater skips it instead of treating it as a
/// real result).
pub fn explore_task(engine: &Engine, task: Task) -> Victory {
    let mut bc = {
        let dag = engine.dag.read().expect("dag lock poisoned");
        dag.adv(task.vertex).bc.clone()
    };

    if engine.is_root_solved() {
        return Victory::Irrelevant;
    }

    DP_CACHE.with(|dp| {
        STATE_CACHE.with(|sc| {
            let mut dp_cache = dp.borrow_mut();
            let mut state_cache = sc.borrow_mut();
            let st = SearchState::new(
                &engine.z,
                &mut dp_cache,
                &mut state_cache,
                &engine.known_sum,
                &engine.heuristics,
                &engine.hints,
                MinimaxMode::Exploring,
            );
            let mut st = st.with_cancellation(&engine.root_solved);
            evaluate_adversary(&mut st, &mut bc)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::KnownSumCache;
    use crate::config::S;
    use crate::zobrist::Zobrist;

    #[test]
    fn explores_a_saturated_task_to_an_algorithm_win() {
        let z = Zobrist::fixed();
        let known_sum = KnownSumCache::new();
        let engine = Engine::new(z, known_sum, 1);

        let mut bc = BinConf::empty(&engine.z);
        let last = bc.loads().len() - 1;
        bc.assign(last, S as u8, &engine.z);
        bc.assign(last, S as u8, &engine.z);
        bc.assign(last, S as u8, &engine.z);
        let hash = engine.z.adv_hash(bc.load_hash(), bc.item_hash(), bc.last_item() as usize);

        let vertex = {
            let mut dag = engine.dag.write().unwrap();
            dag.add_root(bc, hash)
        };
        let task = Task { vertex, state_hash: hash };

        assert_eq!(explore_task(&engine, task), Victory::Alg);
    }
}
