//! Queen: owns the round lifecycle (spec §4.6). A generation pass grows
//! the DAG until every open leaf is a task or a decision; the verdict
//! channel is then drained, folding each resolved task back into the DAG
//! (spec §4.3 updating mode) until the root decides or every task is
//! accounted for, at which point — absent a decision — the boundary steps
//! out and another round begins.

use crate::binconf::BinConf;
use crate::config::{REGROW_LIMIT, TASK_DEPTH_STEP, TASK_LOAD_STEP};
use crate::dag::{MinimaxMode, TaskStatus, Victory};
use crate::dp::DpCache;
use crate::engine::{overseer, Engine, ToOverseer, ToQueen};
use crate::minimax::{fold_verdict, generate, SearchState};
use std::sync::atomic::Ordering;

/// drive the whole search to completion, spawning one overseer thread and
/// running the queen's round loop in the caller's thread. Returns the
/// root's final verdict.
pub fn run(engine: &Engine, root_bc: BinConf) -> Victory {
    let (to_overseer_tx, to_overseer_rx) = crossbeam_channel::unbounded();
    let (to_queen_tx, to_queen_rx) = crossbeam_channel::unbounded();

    std::thread::scope(|scope| {
        scope.spawn(|| overseer::run(engine, &to_overseer_rx, &to_queen_tx));

        let mut round = 0u64;
        let mut regrowths = 0;
        let mut bc = root_bc;

        let verdict = loop {
            let root_verdict = generate_round(engine, &mut bc);
            if root_verdict.is_decided() {
                break root_verdict;
            }

            round += 1;
            to_overseer_tx.send(ToOverseer::RoundStart { round }).ok();
            let verdict = drain_round(engine, &to_queen_rx);
            if verdict.is_decided() {
                break verdict;
            }

            if regrowths >= REGROW_LIMIT {
                break Victory::Uncertain;
            }
            regrowths += 1;
            expand_boundary(engine);
        };

        to_overseer_tx.send(ToOverseer::Shutdown).ok();
        verdict
    })
}

/// run one generating-mode pass from the root, growing the DAG and
/// populating `engine.tasks` with every fresh boundary vertex.
fn generate_round(engine: &Engine, bc: &mut BinConf) -> Victory {
    let mut dag = engine.dag.write().expect("dag lock poisoned");
    let mut tasks = engine.tasks.write().expect("task table lock poisoned");
    let boundary = *engine.boundary.read().unwrap();

    let root_hash = engine.z.adv_hash(bc.load_hash(), bc.item_hash(), bc.last_item() as usize);
    let root = dag.root.unwrap_or_else(|| dag.add_root(bc.clone(), root_hash));

    let mut dp_cache = DpCache::new(crate::config::dplog());
    let mut state_cache = crate::cache::StateCache::new(crate::config::conflog());
    let mut st = SearchState::new(
        &engine.z,
        &mut dp_cache,
        &mut state_cache,
        &engine.known_sum,
        &engine.heuristics,
        &engine.hints,
        MinimaxMode::Generating,
    );

    engine.queue.reset();
    generate(&mut st, &mut dag, &mut tasks, bc, root, boundary)
}

/// drain `ToQueen` messages until the round ends: either the root is
/// decided, or every task has been claimed and the overseer reports
/// starvation with nothing left in the queue.
fn drain_round(engine: &Engine, from_overseer: &crossbeam_channel::Receiver<ToQueen>) -> Victory {
    loop {
        let Ok(msg) = from_overseer.recv() else {
            return Victory::Uncertain;
        };
        match msg {
            ToQueen::Verdicts { results } => {
                let mut dag = engine.dag.write().expect("dag lock poisoned");
                let tasks = engine.tasks.read().expect("task table lock poisoned");
                for (task, verdict) in results {
                    if verdict == Victory::Irrelevant {
                        continue;
                    }
                    if let Some(idx) = tasks.index_of_vertex(task.vertex) {
                        tasks.set_status(
                            idx,
                            match verdict {
                                Victory::Alg => TaskStatus::AlgWin,
                                Victory::Adv => TaskStatus::AdvWin,
                                _ => continue,
                            },
                        );
                    }
                    fold_verdict(&mut dag, &tasks, task.vertex, verdict);
                    if let Some(root) = dag.root {
                        if dag.adv(root).win.is_decided() {
                            engine.root_solved.store(true, Ordering::Release);
                            return dag.adv(root).win;
                        }
                    }
                }
            }
            ToQueen::Starved => {
                let tasks = engine.tasks.read().unwrap();
                if engine.queue.is_nearly_drained(&tasks) {
                    return Victory::Uncertain;
                }
            }
            ToQueen::Measurement { .. } => {}
        }
    }
}

fn expand_boundary(engine: &Engine) {
    let mut boundary = engine.boundary.write().unwrap();
    boundary.depth += TASK_DEPTH_STEP;
    boundary.load += TASK_LOAD_STEP as u32;
}
