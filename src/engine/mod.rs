//! Queen / overseer / worker orchestration (spec §4.6, §9 "global mutable
//! state"). `Engine` owns every piece of state a round touches; `queen`,
//! `overseer`, and `worker` are free functions over a `&Engine` rather than
//! methods, the same split the teacher keeps between `Trainer` (owns state)
//! and the free solving functions in `mccfr::solver` that operate on it.
//!
//! The Game DAG is the one piece of state genuinely single-writer
//! (generating/updating mode are queen-only); it sits behind an `RwLock` so
//! overseers can take a brief read lock to copy out a task vertex's bc
//! before handing exploration off to workers, without blocking the queen's
//! own passes for longer than that copy takes.

mod messages;
mod overseer;
mod queen;
mod worker;

pub use messages::{ToOverseer, ToQueen};
pub use queen::run;

use crate::cache::KnownSumCache;
use crate::config::{TASK_DEPTH_INIT, TASK_LOAD_INIT};
use crate::dag::Dag;
use crate::heuristics::HeuristicStrategy;
use crate::io::Hints;
use crate::minimax::TaskBoundary;
use crate::task::{TaskQueue, TaskTable};
use crate::zobrist::Zobrist;
use std::sync::atomic::AtomicBool;
use std::sync::RwLock;

pub struct Engine {
    pub dag: RwLock<Dag>,
    pub tasks: RwLock<TaskTable>,
    pub queue: TaskQueue,
    pub z: Zobrist,
    pub known_sum: KnownSumCache,
    pub heuristics: HeuristicStrategy,
    pub hints: Hints,
    pub boundary: RwLock<TaskBoundary>,
    /// flipped the instant the root is decided; workers poll it to abandon
    /// in-flight exploration early (spec §4.3 "honour external cancellation
    /// flags").
    pub root_solved: AtomicBool,
    pub workers: usize,
}

impl Engine {
    pub fn new(z: Zobrist, known_sum: KnownSumCache, workers: usize) -> Self {
        Self::with_hints(z, known_sum, workers, Hints::empty())
    }

    pub fn with_hints(z: Zobrist, known_sum: KnownSumCache, workers: usize, hints: Hints) -> Self {
        Self {
            dag: RwLock::new(Dag::new()),
            tasks: RwLock::new(TaskTable::new()),
            queue: TaskQueue::new(),
            z,
            known_sum,
            heuristics: HeuristicStrategy::new(),
            hints,
            boundary: RwLock::new(TaskBoundary {
                depth: TASK_DEPTH_INIT,
                load: TASK_LOAD_INIT as u32,
            }),
            root_solved: AtomicBool::new(false),
            workers,
        }
    }

    pub fn is_root_solved(&self) -> bool {
        self.root_solved.load(std::sync::atomic::Ordering::Acquire)
    }
}
