//! Parallel minimax search for lower bounds on online bin stretching.
//!
//! The engine grows a two-ply adversary/algorithm game DAG (`dag`), closes
//! its frontier with a dynamic-programming feasibility oracle (`dp`) and a
//! handful of closed-form heuristics (`heuristics`), discharges the
//! remainder as parallel tasks (`task`, `engine`), and folds verdicts back
//! into the DAG until the root is decided. `minibs` precomputes a
//! coarse-grained winning-set table offline so the live search can close
//! many vertices without recursing at all.

pub mod binconf;
pub mod cache;
pub mod config;
pub mod dag;
pub mod dp;
pub mod error;
#[cfg(feature = "server")]
pub mod engine;
pub mod heuristics;
pub mod io;
pub mod minibs;
pub mod minimax;
#[cfg(feature = "server")]
pub mod logging;
pub mod task;
pub mod zobrist;

pub use error::Result;
