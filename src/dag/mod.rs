//! The Game DAG: vertices, edges, arena storage, traversal, consistency
//! checking and cloning (spec §3, §4.1).

mod arena;
mod clone;
mod consistency;
mod dot;
mod edge;
mod enums;
mod traverse;
mod vertex;

pub use arena::Dag;
pub use clone::{clone_dag, clone_tree};
pub use consistency::{check, ConsistencyReport};
pub use dot::write_dot;
pub use edge::{Edge, EdgeId, EdgeLabel};
pub use enums::{Heuristic, LeafKind, MinimaxMode, TaskStatus, VertexState, Victory};
pub use traverse::{bfs_layers, clear_visited, clear_visited2, dfs};
pub use vertex::{AdvVertex, AlgVertex, AnyVertexId, VertexId};
