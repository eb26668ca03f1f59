//! Queen <-> overseer message types (spec §4.6, Design Note §9 "queen-
//! overseer messages as a small enum over a single channel per
//! direction"). One unbounded `crossbeam_channel` pair carries each
//! direction, mirroring the teacher's typed-channel pattern for
//! `hosting::Casino` control messages, generalized from a single message
//! type to the two directions this protocol actually needs.

use crate::dag::Victory;
use crate::task::Task;

#[derive(Debug, Clone)]
pub enum ToOverseer {
    /// a new round has begun; overseers should reset local batch state
    /// and start requesting work.
    RoundStart { round: u64 },
    /// the queen has no more tasks to hand out this round.
    RoundEnd,
    /// an explicit shutdown, sent once the root vertex is decided.
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum ToQueen {
    /// a batch of verdicts a worker pool finished computing.
    Verdicts { results: Vec<(Task, Victory)> },
    /// an overseer ran out of claimable tasks and is idling.
    Starved,
    /// periodic counters for `--measure` (spec §10 "measurement summary").
    Measurement { explored: u64, cache_hits: u64 },
}
