//! Heuristic predicates that let the search close a vertex as an
//! algorithm win without expanding it (spec §4.4).

mod five_nine;
mod good_situation;
mod large_item;
mod strategy;

pub use five_nine::five_nine_heuristic;
pub use good_situation::any_good_situation;
pub use large_item::large_item_heuristic;
pub use strategy::HeuristicStrategy;
