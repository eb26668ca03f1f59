//! Generating-mode minimax (spec §4.3 "mode specialisation — generating"):
//! the queen's growth pass. Same adversary/algorithm recursion as
//! exploring mode, but it builds DAG vertices and edges as it goes and
//! stops recursing at the **task boundary** — depth or total load past a
//! threshold — leaving a boundary vertex registered in the `TaskTable`
//! instead of expanding further.

use crate::binconf::BinConf;
use crate::config::{MONOTONICITY, S};
use crate::dag::{Dag, LeafKind, MinimaxMode, VertexId, VertexState, Victory};
use crate::io::Assumption;
use crate::minimax::state::SearchState;
use crate::task::TaskTable;

/// depth/load threshold past which a fresh adversary vertex becomes a task
/// rather than being expanded further this round.
#[derive(Debug, Clone, Copy)]
pub struct TaskBoundary {
    pub depth: usize,
    pub load: u32,
}

/// grow the DAG from `root` (already inserted) until every reachable leaf
/// is either decided or registered as a task. Returns the root's verdict,
/// `Uncertain` if any task remains unresolved.
pub fn generate(
    state: &mut SearchState,
    dag: &mut Dag,
    tasks: &mut TaskTable,
    bc: &mut BinConf,
    root: VertexId,
    boundary: TaskBoundary,
) -> Victory {
    debug_assert_eq!(state.mode, MinimaxMode::Generating);
    generate_adversary(state, dag, tasks, bc, root, boundary)
}

fn generate_adversary(
    state: &mut SearchState,
    dag: &mut Dag,
    tasks: &mut TaskTable,
    bc: &mut BinConf,
    vertex: VertexId,
    boundary: TaskBoundary,
) -> Victory {
    if dag.adv(vertex).win.is_decided() {
        return dag.adv(vertex).win;
    }

    if state.depth >= boundary.depth || bc.total_load() >= boundary.load {
        mark_as_task(dag, tasks, bc, vertex);
        return Victory::Uncertain;
    }

    if is_alg_trivial_win(bc) {
        dag.adv_mut(vertex).win = Victory::Alg;
        dag.adv_mut(vertex).leaf = LeafKind::TrueLeaf;
        dag.adv_mut(vertex).state = VertexState::Finished;
        return Victory::Alg;
    }

    if state.known_sum.is_known(bc.load_hash()) {
        dag.adv_mut(vertex).win = Victory::Alg;
        dag.adv_mut(vertex).leaf = LeafKind::TrueLeaf;
        dag.adv_mut(vertex).state = VertexState::Finished;
        return Victory::Alg;
    }

    if let Some(heur) = state.heuristics.classify_adversary(bc, state.z, state.dp_cache) {
        dag.adv_mut(vertex).win = Victory::Adv;
        dag.adv_mut(vertex).leaf = LeafKind::Heuristical;
        dag.adv_mut(vertex).heuristic = Some(heur);
        dag.adv_mut(vertex).state = VertexState::Finished;
        return Victory::Adv;
    }

    if let Some(player) = state.hints.assumption(bc.load_hash() ^ bc.item_hash()) {
        let win = match player {
            Assumption::Adv => Victory::Adv,
            Assumption::Alg => Victory::Alg,
        };
        dag.adv_mut(vertex).win = win;
        dag.adv_mut(vertex).leaf = LeafKind::Assumption;
        dag.adv_mut(vertex).state = VertexState::Finished;
        return win;
    }

    let last = bc.last_item().max(1);
    let floor = last.saturating_sub(MONOTONICITY as u8).max(1);
    let ceiling = crate::dp::max_feasible_item(bc.loads(), bc.items(), state.z, state.dp_cache)
        .unwrap_or(0)
        .min(S as u8);

    let mut candidates: Vec<u8> = (floor..=ceiling).rev().collect();
    if let Some(suggested) = state.hints.suggestion(bc.load_hash() ^ bc.item_hash()) {
        if let Some(pos) = candidates.iter().position(|&i| i == suggested) {
            candidates.swap(0, pos);
        }
    }

    let mut winning_edge = None;
    let mut all_alg = true;
    for item in candidates {
        let alg_hash = state.z.alg_hash(bc.load_hash(), bc.item_hash(), item as usize);
        let child = dag.add_alg(bc.clone(), item, alg_hash, false);
        let edge = dag.add_adv_outedge(vertex, child, item);

        state.descend();
        let verdict = generate_algorithm(state, dag, tasks, bc, child, item, boundary);
        state.ascend();

        match verdict {
            Victory::Adv => {
                winning_edge = Some(edge);
                break;
            }
            Victory::Alg => {}
            Victory::Uncertain | Victory::Irrelevant => all_alg = false,
        }
    }

    if let Some(edge) = winning_edge {
        dag.keep_only_adv_edge(vertex, edge, MinimaxMode::Generating);
        dag.adv_mut(vertex).win = Victory::Adv;
        dag.adv_mut(vertex).state = VertexState::Finished;
        Victory::Adv
    } else if all_alg {
        dag.adv_mut(vertex).win = Victory::Alg;
        dag.adv_mut(vertex).state = VertexState::Finished;
        Victory::Alg
    } else {
        dag.adv_mut(vertex).state = VertexState::Expandable;
        Victory::Uncertain
    }
}

fn generate_algorithm(
    state: &mut SearchState,
    dag: &mut Dag,
    tasks: &mut TaskTable,
    bc: &mut BinConf,
    vertex: VertexId,
    item: u8,
    boundary: TaskBoundary,
) -> Victory {
    if dag.alg(vertex).win.is_decided() {
        return dag.alg(vertex).win;
    }

    let mut tried_loads = Vec::new();
    let mut winning_edge = None;
    let mut all_adv = true;

    for bin in 0..bc.loads().len() {
        let load = bc.loads()[bin];
        if tried_loads.contains(&load) {
            continue;
        }
        tried_loads.push(load);

        if load as usize + item as usize > crate::config::R - 1 {
            continue;
        }

        let undo = bc.assign(bin, item, state.z);

        if state.heuristics.is_good_situation(bc) {
            bc.unassign(undo);
            dag.alg_mut(vertex).win = Victory::Alg;
            return Victory::Alg;
        }

        let hash_with_last = state.z.adv_hash(bc.load_hash(), bc.item_hash(), bc.last_item() as usize);
        let child = dag.add_adv(bc.clone(), hash_with_last, false);
        let edge = dag.add_alg_outedge(vertex, child, bin);

        let verdict = generate_adversary(state, dag, tasks, bc, child, boundary);
        bc.unassign(undo);

        match verdict {
            Victory::Alg => {
                winning_edge = Some(edge);
                break;
            }
            Victory::Adv => {}
            Victory::Uncertain | Victory::Irrelevant => all_adv = false,
        }
    }

    if let Some(edge) = winning_edge {
        dag.keep_only_alg_edge(vertex, edge, MinimaxMode::Generating);
        dag.alg_mut(vertex).win = Victory::Alg;
        Victory::Alg
    } else if all_adv {
        dag.alg_mut(vertex).win = Victory::Adv;
        Victory::Adv
    } else {
        Victory::Uncertain
    }
}

fn mark_as_task(dag: &mut Dag, tasks: &mut TaskTable, bc: &BinConf, vertex: crate::dag::VertexId) {
    let vx = dag.adv_mut(vertex);
    vx.task = true;
    vx.leaf = LeafKind::Boundary;
    vx.state = VertexState::Expandable;
    let state_hash = bc.load_hash() ^ bc.item_hash();
    tasks.push(vertex, state_hash);
}

fn is_alg_trivial_win(bc: &BinConf) -> bool {
    let total: u32 = bc.loads().iter().map(|&l| l as u32).sum();
    crate::config::is_alg_trivial_win(bc.loads(), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{KnownSumCache, StateCache};
    use crate::dp::DpCache;
    use crate::heuristics::HeuristicStrategy;
    use crate::io::Hints;
    use crate::zobrist::Zobrist;

    #[test]
    fn immediate_boundary_marks_root_as_a_task() {
        let z = Zobrist::new(1);
        let mut dp_cache = DpCache::new(6);
        let mut state_cache = StateCache::new(6);
        let known_sum = KnownSumCache::new();
        let heuristics = HeuristicStrategy::new();
        let hints = Hints::empty();
        let mut st = SearchState::new(&z, &mut dp_cache, &mut state_cache, &known_sum, &heuristics, &hints, MinimaxMode::Generating);
        let mut dag = Dag::new();
        let mut tasks = TaskTable::new();
        let mut bc = BinConf::empty(&z);
        let root_hash = z.adv_hash(bc.load_hash(), bc.item_hash(), 0);
        let root = dag.add_root(bc.clone(), root_hash);

        let boundary = TaskBoundary { depth: 0, load: u32::MAX };
        let verdict = generate(&mut st, &mut dag, &mut tasks, &mut bc, root, boundary);

        assert_eq!(verdict, Victory::Uncertain);
        assert!(dag.adv(root).task);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn saturated_root_resolves_without_any_task() {
        let z = Zobrist::new(1);
        let mut dp_cache = DpCache::new(6);
        let mut state_cache = StateCache::new(6);
        let known_sum = KnownSumCache::new();
        let heuristics = HeuristicStrategy::new();
        let hints = Hints::empty();
        let mut st = SearchState::new(&z, &mut dp_cache, &mut state_cache, &known_sum, &heuristics, &hints, MinimaxMode::Generating);
        let mut dag = Dag::new();
        let mut tasks = TaskTable::new();
        let mut bc = BinConf::empty(&z);
        let last = bc.loads().len() - 1;
        bc.assign(last, S as u8, &z);
        bc.assign(last, S as u8, &z);
        bc.assign(last, S as u8, &z);
        let root_hash = z.adv_hash(bc.load_hash(), bc.item_hash(), bc.last_item() as usize);
        let root = dag.add_root(bc.clone(), root_hash);

        let boundary = TaskBoundary { depth: 100, load: u32::MAX };
        let verdict = generate(&mut st, &mut dag, &mut tasks, &mut bc, root, boundary);

        assert_eq!(verdict, Victory::Alg);
        assert!(tasks.is_empty());
    }
}
