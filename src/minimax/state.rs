//! Shared computation state threaded through one minimax recursion (spec
//! §4.3 "shared computation state"). Holds everything a descend/ascend
//! step touches — caches, Zobrist tables, the heuristic strategy, and the
//! DP oracle's cache — so `adversary`/`algorithm` take one `&mut` argument
//! instead of a long parameter list, mirroring the teacher's pattern of
//! threading a single mutable context record through a recursive solver
//! (`mccfr::Trainer`'s `&mut self` recursion).

use crate::cache::{KnownSumCache, StateCache};
use crate::dag::MinimaxMode;
use crate::dp::DpCache;
use crate::heuristics::HeuristicStrategy;
use crate::io::Hints;
use crate::zobrist::Zobrist;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct SearchState<'a> {
    pub z: &'a Zobrist,
    pub dp_cache: &'a mut DpCache,
    pub state_cache: &'a mut StateCache,
    pub known_sum: &'a KnownSumCache,
    pub heuristics: &'a HeuristicStrategy,
    pub hints: &'a Hints,
    pub mode: MinimaxMode,
    /// recursion depth, used only for the stack-size-aware spawn the
    /// engine performs before the very first call (Design Note §9).
    pub depth: usize,
    /// the engine's root-solved flag, polled at every recursion entry in
    /// exploring mode so a worker abandons in-flight work within one poll
    /// interval once another worker (or the queen) has already settled the
    /// root (spec §5, property 9). `None` in generating/updating mode,
    /// which run single-threaded on the queen and have nothing to cancel
    /// against.
    cancelled: Option<&'a AtomicBool>,
}

impl<'a> SearchState<'a> {
    pub fn new(
        z: &'a Zobrist,
        dp_cache: &'a mut DpCache,
        state_cache: &'a mut StateCache,
        known_sum: &'a KnownSumCache,
        heuristics: &'a HeuristicStrategy,
        hints: &'a Hints,
        mode: MinimaxMode,
    ) -> Self {
        Self {
            z,
            dp_cache,
            state_cache,
            known_sum,
            heuristics,
            hints,
            mode,
            depth: 0,
            cancelled: None,
        }
    }

    /// attach a cancellation flag; every subsequent `evaluate_adversary`/
    /// `evaluate_algorithm` entry will poll it.
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancelled = Some(flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    pub fn descend(&mut self) {
        self.depth += 1;
    }

    pub fn ascend(&mut self) {
        self.depth -= 1;
    }
}
