//! The minimax evaluator (spec §4.3): adversary/algorithm steps sharing one
//! `SearchState`, specialized by `MinimaxMode` (generating / exploring /
//! updating) via the mode field on that state rather than three separate
//! code paths.

mod adversary;
mod algorithm;
mod generate;
mod state;
mod update;

pub use adversary::evaluate_adversary;
pub use algorithm::evaluate_algorithm;
pub use generate::{generate, TaskBoundary};
pub use state::SearchState;
pub use update::fold_verdict;
