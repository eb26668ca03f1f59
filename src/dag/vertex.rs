//! Adversary and algorithm vertices (spec §3 "Game DAG").

use crate::binconf::BinConf;
use crate::dag::enums::{Heuristic, LeafKind, VertexState, Victory};
use crate::dag::EdgeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyVertexId {
    Adv(VertexId),
    Alg(VertexId),
}

#[derive(Debug, Clone)]
pub struct AdvVertex {
    pub bc: BinConf,
    pub out_edges: Vec<EdgeId>,
    pub in_edges: Vec<EdgeId>,
    pub win: Victory,
    pub state: VertexState,
    pub leaf: LeafKind,
    pub heuristic: Option<Heuristic>,
    pub task: bool,
    pub sapling: bool,
    pub expansion_level: u32,
    pub visited: bool,
    pub visited2: bool,
}

impl AdvVertex {
    pub fn new(bc: BinConf) -> Self {
        Self {
            bc,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            win: Victory::Uncertain,
            state: VertexState::Fresh,
            leaf: LeafKind::NonLeaf,
            heuristic: None,
            task: false,
            sapling: false,
            expansion_level: 0,
            visited: false,
            visited2: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlgVertex {
    pub bc: BinConf,
    pub next_item: u8,
    pub out_edges: Vec<EdgeId>,
    pub in_edges: Vec<EdgeId>,
    pub win: Victory,
    pub visited: bool,
    pub visited2: bool,
}

impl AlgVertex {
    pub fn new(bc: BinConf, next_item: u8) -> Self {
        Self {
            bc,
            next_item,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            win: Victory::Uncertain,
            visited: false,
            visited2: false,
        }
    }
}
