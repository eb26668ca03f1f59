//! The Game DAG arena (spec §4.1).
//!
//! Vertices and edges live in flat, append-only `Vec`s with monotonically
//! assigned ids — the Rust analogue of the intrusive-iterator adjacency
//! lists the spec's design notes (§9) warn against reimplementing literally.
//! Edge removal tombstones the slot (`edges[id] = None`) rather than
//! reusing it, so an `EdgeId` handed out once is never silently aliased to
//! a different edge later; adjacency lists are small (bounded by `S` or
//! `m`) so removing one entry by linear scan is cheap and simple, in place
//! of a doubly-linked intrusive list.

use crate::dag::edge::{Edge, EdgeId, EdgeLabel};
use crate::dag::enums::MinimaxMode;
use crate::dag::vertex::{AdvVertex, AlgVertex, AnyVertexId, VertexId};
use crate::binconf::BinConf;
use std::collections::HashMap;

#[derive(Default)]
pub struct Dag {
    adv: Vec<AdvVertex>,
    alg: Vec<AlgVertex>,
    edges: Vec<Option<Edge>>,
    adv_index: HashMap<u64, VertexId>,
    alg_index: HashMap<u64, VertexId>,
    pub root: Option<VertexId>,
}

impl Dag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adv(&self, id: VertexId) -> &AdvVertex {
        &self.adv[id.0 as usize]
    }

    pub fn adv_mut(&mut self, id: VertexId) -> &mut AdvVertex {
        &mut self.adv[id.0 as usize]
    }

    pub fn alg(&self, id: VertexId) -> &AlgVertex {
        &self.alg[id.0 as usize]
    }

    pub fn alg_mut(&mut self, id: VertexId) -> &mut AlgVertex {
        &mut self.alg[id.0 as usize]
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0 as usize).and_then(|e| e.as_ref())
    }

    pub fn adv_count(&self) -> usize {
        self.adv.len()
    }

    pub fn alg_count(&self) -> usize {
        self.alg.len()
    }

    pub fn find_adv(&self, hash_with_last: u64) -> Option<VertexId> {
        self.adv_index.get(&hash_with_last).copied()
    }

    pub fn find_alg(&self, alg_hash: u64) -> Option<VertexId> {
        self.alg_index.get(&alg_hash).copied()
    }

    /// add an adversary vertex unless one with the same hash already exists
    /// (unless `allow_duplicates`). Returns the existing or newly-created id.
    pub fn add_adv(&mut self, bc: BinConf, hash_with_last: u64, allow_duplicates: bool) -> VertexId {
        if !allow_duplicates {
            if let Some(&id) = self.adv_index.get(&hash_with_last) {
                return id;
            }
        }
        let id = VertexId(self.adv.len() as u32);
        self.adv.push(AdvVertex::new(bc));
        self.adv_index.insert(hash_with_last, id);
        id
    }

    pub fn add_root(&mut self, bc: BinConf, hash_with_last: u64) -> VertexId {
        let id = self.add_adv(bc, hash_with_last, false);
        self.root = Some(id);
        id
    }

    pub fn add_alg(&mut self, bc: BinConf, next_item: u8, alg_hash: u64, allow_duplicates: bool) -> VertexId {
        if !allow_duplicates {
            if let Some(&id) = self.alg_index.get(&alg_hash) {
                return id;
            }
        }
        let id = VertexId(self.alg.len() as u32);
        self.alg.push(AlgVertex::new(bc, next_item));
        self.alg_index.insert(alg_hash, id);
        id
    }

    fn next_edge_id(&self) -> EdgeId {
        EdgeId(self.edges.len() as u32)
    }

    pub fn add_adv_outedge(&mut self, from: VertexId, to: VertexId, item: u8) -> EdgeId {
        let id = self.next_edge_id();
        self.edges.push(Some(Edge {
            source: AnyVertexId::Adv(from),
            sink: AnyVertexId::Alg(to),
            label: EdgeLabel::Item(item),
        }));
        self.adv_mut(from).out_edges.push(id);
        self.alg_mut(to).in_edges.push(id);
        id
    }

    pub fn add_alg_outedge(&mut self, from: VertexId, to: VertexId, bin: usize) -> EdgeId {
        let id = self.next_edge_id();
        self.edges.push(Some(Edge {
            source: AnyVertexId::Alg(from),
            sink: AnyVertexId::Adv(to),
            label: EdgeLabel::Bin(bin),
        }));
        self.alg_mut(from).out_edges.push(id);
        self.adv_mut(to).in_edges.push(id);
        id
    }

    /// remove a single edge from both endpoints' adjacency lists and
    /// tombstone its arena slot. If the mode is `Updating` and the edge's
    /// sink carried an outstanding task, `task_cancelled` is set so the
    /// caller (the updater) can mark that task `Pruned`.
    pub fn remove_edge(&mut self, id: EdgeId, mode: MinimaxMode) -> Vec<VertexId> {
        let Some(edge) = self.edges[id.0 as usize].take() else {
            return Vec::new();
        };
        match edge.source {
            AnyVertexId::Adv(v) => retain_edge(&mut self.adv_mut(v).out_edges, id),
            AnyVertexId::Alg(v) => retain_edge(&mut self.alg_mut(v).out_edges, id),
        }
        match edge.sink {
            AnyVertexId::Adv(v) => retain_edge(&mut self.adv_mut(v).in_edges, id),
            AnyVertexId::Alg(v) => retain_edge(&mut self.alg_mut(v).in_edges, id),
        }
        self.maybe_cascade(edge.sink, mode)
    }

    /// remove one in-edge of `target`; if that leaves `target` unreachable
    /// (and it is not the root), cascade-delete it and its now-unreachable
    /// subtree. Returns every vertex id removed as a result.
    pub fn remove_in_edge(&mut self, target: AnyVertexId, id: EdgeId, mode: MinimaxMode) -> Vec<VertexId> {
        if let Some(edge) = self.edges[id.0 as usize].take() {
            match edge.source {
                AnyVertexId::Adv(v) => retain_edge(&mut self.adv_mut(v).out_edges, id),
                AnyVertexId::Alg(v) => retain_edge(&mut self.alg_mut(v).out_edges, id),
            }
            match target {
                AnyVertexId::Adv(v) => retain_edge(&mut self.adv_mut(v).in_edges, id),
                AnyVertexId::Alg(v) => retain_edge(&mut self.alg_mut(v).in_edges, id),
            }
        }
        self.maybe_cascade(target, mode)
    }

    /// collapse an adversary vertex to its single winning child: remove
    /// every out-edge except the one labelled `keep`.
    pub fn keep_only_adv_edge(&mut self, from: VertexId, keep: EdgeId, mode: MinimaxMode) -> Vec<VertexId> {
        let victims: Vec<EdgeId> = self
            .adv(from)
            .out_edges
            .iter()
            .copied()
            .filter(|&e| e != keep)
            .collect();
        let mut removed = Vec::new();
        for e in victims {
            removed.extend(self.remove_edge(e, mode));
        }
        removed
    }

    pub fn keep_only_alg_edge(&mut self, from: VertexId, keep: EdgeId, mode: MinimaxMode) -> Vec<VertexId> {
        let victims: Vec<EdgeId> = self
            .alg(from)
            .out_edges
            .iter()
            .copied()
            .filter(|&e| e != keep)
            .collect();
        let mut removed = Vec::new();
        for e in victims {
            removed.extend(self.remove_edge(e, mode));
        }
        removed
    }

    fn is_root(&self, v: AnyVertexId) -> bool {
        matches!((self.root, v), (Some(r), AnyVertexId::Adv(id)) if r == id)
    }

    fn in_degree(&self, v: AnyVertexId) -> usize {
        match v {
            AnyVertexId::Adv(id) => self.adv(id).in_edges.len(),
            AnyVertexId::Alg(id) => self.alg(id).in_edges.len(),
        }
    }

    fn maybe_cascade(&mut self, v: AnyVertexId, mode: MinimaxMode) -> Vec<VertexId> {
        if self.is_root(v) || self.in_degree(v) > 0 {
            return Vec::new();
        }
        self.delete_subtree(v, mode)
    }

    /// delete a now-unreachable vertex and cascade through its out-edges.
    /// When `mode == Updating`, deleting an adversary vertex that still
    /// carried an outstanding task returns its id so the caller can cancel
    /// that task (spec §4.1 "this signals the task queue to cancel it").
    fn delete_subtree(&mut self, v: AnyVertexId, mode: MinimaxMode) -> Vec<VertexId> {
        let mut cancelled = Vec::new();
        let out_edges = match v {
            AnyVertexId::Adv(id) => {
                if mode == MinimaxMode::Updating && self.adv(id).task {
                    cancelled.push(id);
                }
                std::mem::take(&mut self.adv_mut(id).out_edges)
            }
            AnyVertexId::Alg(id) => std::mem::take(&mut self.alg_mut(id).out_edges),
        };
        for e in out_edges {
            if let Some(edge) = self.edges[e.0 as usize].take() {
                match edge.sink {
                    AnyVertexId::Adv(v2) => retain_edge(&mut self.adv_mut(v2).in_edges, e),
                    AnyVertexId::Alg(v2) => retain_edge(&mut self.alg_mut(v2).in_edges, e),
                }
                cancelled.extend(self.maybe_cascade(edge.sink, mode));
            }
        }
        cancelled
    }
}

fn retain_edge(list: &mut Vec<EdgeId>, id: EdgeId) {
    if let Some(pos) = list.iter().position(|&e| e == id) {
        list.swap_remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    #[test]
    fn add_adv_deduplicates_by_hash() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let a = dag.add_adv(BinConf::empty(&z), 7, false);
        let b = dag.add_adv(BinConf::empty(&z), 7, false);
        assert_eq!(a, b);
        assert_eq!(dag.adv_count(), 1);
    }

    #[test]
    fn removing_only_in_edge_cascades_deletion() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        let e1 = dag.add_adv_outedge(root, a1, 5);
        let child = dag.add_adv(BinConf::empty(&z), 3, false);
        dag.add_alg_outedge(a1, child, 0);

        let removed = dag.remove_in_edge(AnyVertexId::Alg(a1), e1, MinimaxMode::Exploring);
        assert!(removed.is_empty(), "cascading removal reports adv vertices only");
        assert!(dag.alg(a1).in_edges.is_empty());
        assert!(dag.adv(root).out_edges.is_empty());
    }

    #[test]
    fn root_is_never_cascaded_away() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        let e1 = dag.add_adv_outedge(root, a1, 5);
        dag.remove_edge(e1, MinimaxMode::Exploring);
        assert!(dag.edge(e1).is_none());
        assert_eq!(dag.root, Some(root));
    }

    #[test]
    fn keep_only_adv_edge_prunes_siblings() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        let a2 = dag.add_alg(BinConf::empty(&z), 6, 3, false);
        let e1 = dag.add_adv_outedge(root, a1, 5);
        dag.add_adv_outedge(root, a2, 6);

        dag.keep_only_adv_edge(root, e1, MinimaxMode::Exploring);
        assert_eq!(dag.adv(root).out_edges, vec![e1]);
        assert!(dag.alg(a2).in_edges.is_empty());
    }
}
