//! Overseer: owns a pool of worker threads (via `rayon`) and drives the
//! batch request/dispatch loop (spec §4.6). One overseer per process in
//! this implementation; the message protocol is written so a future
//! multi-overseer deployment only needs more instances of this loop, each
//! with its own `crossbeam_channel` pair to the queen.

use crate::engine::{worker, Engine, ToOverseer, ToQueen};
use crate::task::take_batch;
use crossbeam_channel::{Receiver, Sender};
use rayon::prelude::*;

/// block on `from_queen` until told to start a round, process batches
/// until the queen says the round is over or to shut down entirely.
/// Returns when `ToOverseer::Shutdown` is received.
pub fn run(engine: &Engine, from_queen: &Receiver<ToOverseer>, to_queen: &Sender<ToQueen>) {
    loop {
        match from_queen.recv() {
            Ok(ToOverseer::RoundStart { .. }) => run_round(engine, from_queen, to_queen),
            Ok(ToOverseer::RoundEnd) => continue,
            Ok(ToOverseer::Shutdown) | Err(_) => return,
        }
    }
}

fn run_round(engine: &Engine, from_queen: &Receiver<ToOverseer>, to_queen: &Sender<ToQueen>) {
    loop {
        if let Ok(ToOverseer::Shutdown) = from_queen.try_recv() {
            return;
        }
        if engine.is_root_solved() {
            return;
        }

        let batch = {
            let tasks = engine.tasks.read().expect("task table lock poisoned");
            take_batch(&engine.queue, &tasks)
        };

        if batch.is_empty() {
            let _ = to_queen.send(ToQueen::Starved);
            if engine.queue.is_nearly_drained(&engine.tasks.read().unwrap()) {
                return;
            }
            continue;
        }

        let results: Vec<_> = batch
            .par_iter()
            .map(|&task| (task, worker::explore_task(engine, task)))
            .collect();

        let _ = to_queen.send(ToQueen::Verdicts { results });
    }
}
