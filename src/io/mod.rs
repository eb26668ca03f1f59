//! External file formats (spec §6): advice, assumption, and the minibs
//! binary cache (`minibs::persistence`). Missing optional files are not
//! errors (spec §7 "Missing optional file"); a malformed one present on
//! disk is.

pub mod advice;
pub mod assume;

pub use advice::{load_advice, Advice};
pub use assume::{load_assumptions, Assumed, Assumption};

use std::collections::HashMap;

/// advice and assumption entries indexed by `load_hash ^ item_hash`, the
/// same combined key `engine::generate::mark_as_task` uses to identify a bc
/// independent of which item led to it.
#[derive(Default)]
pub struct Hints {
    advice: HashMap<u64, u8>,
    assumed: HashMap<u64, Assumption>,
}

impl Hints {
    pub fn new(advice: Vec<Advice>, assumed: Vec<Assumed>) -> Self {
        let advice = advice
            .into_iter()
            .map(|a| (a.bc.load_hash() ^ a.bc.item_hash(), a.suggested_item))
            .collect();
        let assumed = assumed
            .into_iter()
            .map(|a| (a.bc.load_hash() ^ a.bc.item_hash(), a.player))
            .collect();
        Self { advice, assumed }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// suggested item for this bc, if the advice file named one.
    pub fn suggestion(&self, key: u64) -> Option<u8> {
        self.advice.get(&key).copied()
    }

    /// the assumed winner for this bc, if the assumption file named one.
    pub fn assumption(&self, key: u64) -> Option<Assumption> {
        self.assumed.get(&key).copied()
    }
}
