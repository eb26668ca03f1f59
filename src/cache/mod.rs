//! Caches (spec §4.7): a generic probing cache backing both the state cache
//! and the DP cache, plus a plain hash-set known-sum cache.

mod known_sum;
mod probing;
mod state;

pub use known_sum::KnownSumCache;
pub use probing::{CacheValue, ProbingCache};
pub use state::StateCache;
