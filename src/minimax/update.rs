//! Updating-mode minimax (spec §4.3 "mode specialisation — updating"): run
//! by the queen's updater thread to fold resolved task verdicts back into
//! the DAG, propagating the AND/OR combination upward until either the
//! propagation runs dry or the root becomes decided.

use crate::dag::{AnyVertexId, Dag, MinimaxMode, VertexId, VertexState, Victory};
use crate::task::TaskTable;
use std::collections::VecDeque;

/// fold one task's resolved verdict into its adversary vertex and
/// propagate the consequence upward through the DAG, cancelling any other
/// outstanding task whose vertex gets pruned away as a result (spec §4.1
/// "this signals the task queue to cancel it"). Call once per
/// newly-resolved task after the updater drains the verdict channel.
pub fn fold_verdict(dag: &mut Dag, tasks: &TaskTable, vertex: VertexId, verdict: Victory) {
    debug_assert!(verdict.is_decided());
    {
        let vx = dag.adv_mut(vertex);
        vx.win = verdict;
        vx.task = false;
        vx.state = VertexState::Finished;
    }
    propagate(dag, tasks, AnyVertexId::Adv(vertex));
}

fn cancel_tasks(tasks: &TaskTable, cancelled: &[VertexId]) {
    for &vertex in cancelled {
        if let Some(idx) = tasks.index_of_vertex(vertex) {
            tasks.set_status(idx, crate::dag::TaskStatus::Irrelevant);
        }
    }
}

/// breadth-first worklist over ancestors: every time a vertex's win field
/// changes, its parents (via in-edges) are re-examined, since the change
/// may now let them conclude too.
fn propagate(dag: &mut Dag, tasks: &TaskTable, from: AnyVertexId) {
    let mut queue = VecDeque::from([from]);
    let mut seen = std::collections::HashSet::new();
    while let Some(v) = queue.pop_front() {
        let in_edges = match v {
            AnyVertexId::Adv(id) => dag.adv(id).in_edges.clone(),
            AnyVertexId::Alg(id) => dag.alg(id).in_edges.clone(),
        };
        for e in in_edges {
            let Some(edge) = dag.edge(e) else { continue };
            let parent = edge.source;
            if recompute(dag, tasks, parent) && seen.insert(parent) {
                queue.push_back(parent);
            }
        }
    }
}

/// recompute `parent`'s win field from its children's current verdicts.
/// Returns whether the field changed (from `Uncertain` to something
/// decided): that is the only transition that can ever happen, since a
/// decided vertex is never reopened.
fn recompute(dag: &mut Dag, tasks: &TaskTable, parent: AnyVertexId) -> bool {
    match parent {
        AnyVertexId::Adv(id) => recompute_adv(dag, tasks, id),
        AnyVertexId::Alg(id) => recompute_alg(dag, tasks, id),
    }
}

fn recompute_adv(dag: &mut Dag, tasks: &TaskTable, id: VertexId) -> bool {
    if dag.adv(id).win.is_decided() {
        return false;
    }
    let out_edges = dag.adv(id).out_edges.clone();
    let mut all_alg = !out_edges.is_empty();
    let mut winning_edge = None;
    for e in out_edges {
        let Some(edge) = dag.edge(e) else { continue };
        match child_win(dag, edge.sink) {
            Victory::Adv => {
                winning_edge = Some(e);
                break;
            }
            Victory::Alg => {}
            Victory::Uncertain | Victory::Irrelevant => all_alg = false,
        }
    }
    if let Some(e) = winning_edge {
        let cancelled = dag.keep_only_adv_edge(id, e, MinimaxMode::Updating);
        cancel_tasks(tasks, &cancelled);
        dag.adv_mut(id).win = Victory::Adv;
        dag.adv_mut(id).state = VertexState::Finished;
        true
    } else if all_alg {
        dag.adv_mut(id).win = Victory::Alg;
        dag.adv_mut(id).state = VertexState::Finished;
        true
    } else {
        false
    }
}

fn recompute_alg(dag: &mut Dag, tasks: &TaskTable, id: VertexId) -> bool {
    if dag.alg(id).win.is_decided() {
        return false;
    }
    let out_edges = dag.alg(id).out_edges.clone();
    let mut all_adv = !out_edges.is_empty();
    let mut winning_edge = None;
    for e in out_edges {
        let Some(edge) = dag.edge(e) else { continue };
        match child_win(dag, edge.sink) {
            Victory::Alg => {
                winning_edge = Some(e);
                break;
            }
            Victory::Adv => {}
            Victory::Uncertain | Victory::Irrelevant => all_adv = false,
        }
    }
    if let Some(e) = winning_edge {
        let cancelled = dag.keep_only_alg_edge(id, e, MinimaxMode::Updating);
        cancel_tasks(tasks, &cancelled);
        dag.alg_mut(id).win = Victory::Alg;
        true
    } else if all_adv {
        dag.alg_mut(id).win = Victory::Adv;
        true
    } else {
        false
    }
}

fn child_win(dag: &Dag, v: AnyVertexId) -> Victory {
    match v {
        AnyVertexId::Adv(id) => dag.adv(id).win,
        AnyVertexId::Alg(id) => dag.alg(id).win,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    #[test]
    fn alg_win_on_the_only_child_propagates_to_the_parent() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let tasks = TaskTable::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        dag.add_adv_outedge(root, a1, 5);
        let child = dag.add_adv(BinConf::empty(&z), 3, false);
        dag.add_alg_outedge(a1, child, 0);

        fold_verdict(&mut dag, &tasks, child, Victory::Alg);

        assert_eq!(dag.alg(a1).win, Victory::Alg);
        assert_eq!(dag.adv(root).win, Victory::Alg);
    }

    #[test]
    fn adv_win_on_one_child_is_enough_to_decide_the_algorithm_parent() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let tasks = TaskTable::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        dag.add_adv_outedge(root, a1, 5);
        let child = dag.add_adv(BinConf::empty(&z), 3, false);
        dag.add_alg_outedge(a1, child, 0);

        fold_verdict(&mut dag, &tasks, child, Victory::Adv);

        assert_eq!(dag.alg(a1).win, Victory::Adv);
    }
}
