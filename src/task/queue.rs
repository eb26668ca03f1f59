//! Batching (spec §4.6): an overseer requests work by walking the task
//! array forward from a shared cursor, skipping tasks that are no longer
//! `Available` (claimed by someone else, or pruned by the updater since
//! the cursor last passed them), and stopping once it has `BATCH_SIZE`
//! claimed tasks or has walked past every remaining task.

use crate::config::{BATCH_SIZE, BATCH_THRESHOLD};
use crate::task::{Task, TaskTable};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct TaskQueue {
    cursor: AtomicUsize,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Release);
    }

    /// number of tasks remaining to be considered from the current cursor
    /// position, used by the queen to decide whether a round is close
    /// enough to done to start an expansion pass (spec §4.6 "expansion
    /// mode" triggers once remaining work falls under `BATCH_THRESHOLD`).
    pub fn remaining_hint(&self, table: &TaskTable) -> usize {
        table.len().saturating_sub(self.cursor.load(Ordering::Acquire))
    }

    pub fn is_nearly_drained(&self, table: &TaskTable) -> bool {
        self.remaining_hint(table) < BATCH_THRESHOLD
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// claim up to `BATCH_SIZE` available tasks, advancing the shared cursor
/// past everything considered (whether claimed or skipped) so no two
/// overseers ever walk the same prefix twice.
pub fn take_batch(queue: &TaskQueue, table: &TaskTable) -> Vec<Task> {
    let mut batch = Vec::with_capacity(BATCH_SIZE);
    loop {
        if batch.len() >= BATCH_SIZE {
            break;
        }
        let idx = queue.cursor.fetch_add(1, Ordering::AcqRel);
        if idx >= table.len() {
            queue.cursor.store(table.len(), Ordering::Release);
            break;
        }
        if table.try_claim(idx) {
            batch.push(table.task(idx));
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::VertexId;

    #[test]
    fn batch_never_exceeds_batch_size() {
        let mut table = TaskTable::new();
        for i in 0..(BATCH_SIZE * 2) {
            table.push(VertexId(i as u32), i as u64);
        }
        let queue = TaskQueue::new();
        let batch = take_batch(&queue, &table);
        assert_eq!(batch.len(), BATCH_SIZE);
    }

    #[test]
    fn two_batches_never_overlap() {
        let mut table = TaskTable::new();
        for i in 0..(BATCH_SIZE * 2) {
            table.push(VertexId(i as u32), i as u64);
        }
        let queue = TaskQueue::new();
        let first = take_batch(&queue, &table);
        let second = take_batch(&queue, &table);
        let first_hashes: std::collections::HashSet<u64> = first.iter().map(|t| t.state_hash).collect();
        for t in &second {
            assert!(!first_hashes.contains(&t.state_hash));
        }
    }
}
