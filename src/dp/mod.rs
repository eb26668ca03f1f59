//! Multi-knapsack feasibility oracle (spec §4.2): cheap bounds, exact DP,
//! and a memoizing cache shared across both.

mod bounds;
mod cache;
mod feasibility;

pub use bounds::{best_fit_decreasing, improve_bounds, online_fit_lower_bound};
pub use cache::DpCache;
pub use feasibility::{is_feasible, max_feasible_item};
