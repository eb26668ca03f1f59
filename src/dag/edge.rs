//! Edges of the Game DAG: source, sink, and a label that is either the item
//! the adversary is offering (adversary out-edges) or the bin the algorithm
//! chose (algorithm out-edges) (spec §3).

use crate::dag::vertex::AnyVertexId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// adversary out-edge: the next item offered.
    Item(u8),
    /// algorithm out-edge: the bin (sorted position) the item went into.
    Bin(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub source: AnyVertexId,
    pub sink: AnyVertexId,
    pub label: EdgeLabel,
}
