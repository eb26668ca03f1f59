//! Two cloning strategies for the Game DAG (spec §4.1 "Cloning"):
//! `clone_dag` preserves sharing (a vertex reached by two different paths
//! stays a single vertex in the copy, found again by hash lookup), while
//! `clone_tree` duplicates every vertex along every path, unfolding shared
//! sub-DAGs into a tree. The queen uses the former to snapshot state for a
//! `--dot` dump without disturbing the live search; the latter exists for
//! tooling that wants an acyclic, parent-pointer-friendly tree view.

use crate::dag::arena::Dag;
use crate::dag::vertex::{AnyVertexId, VertexId};
use std::collections::HashMap;

/// structure-preserving clone: vertices are copied once, edges are
/// rebuilt, sharing is preserved via a source-id -> dest-id map.
pub fn clone_dag(src: &Dag) -> Dag {
    let mut dst = Dag::new();
    let mut adv_map: HashMap<VertexId, VertexId> = HashMap::new();
    let mut alg_map: HashMap<VertexId, VertexId> = HashMap::new();

    for i in 0..src.adv_count() {
        let id = VertexId(i as u32);
        let v = src.adv(id);
        let new_id = dst.add_adv(v.bc.clone(), u64::from(id.0) | (1 << 40), true);
        adv_map.insert(id, new_id);
    }
    for i in 0..src.alg_count() {
        let id = VertexId(i as u32);
        let v = src.alg(id);
        let new_id = dst.add_alg(v.bc.clone(), v.next_item, u64::from(id.0) | (2 << 40), true);
        alg_map.insert(id, new_id);
    }

    if let Some(root) = src.root {
        dst.root = Some(adv_map[&root]);
    }

    for i in 0..src.adv_count() {
        let id = VertexId(i as u32);
        for &e in &src.adv(id).out_edges {
            let Some(edge) = src.edge(e) else { continue };
            if let AnyVertexId::Alg(sink) = edge.sink {
                let item = match edge.label {
                    crate::dag::edge::EdgeLabel::Item(it) => it,
                    _ => continue,
                };
                dst.add_adv_outedge(adv_map[&id], alg_map[&sink], item);
            }
        }
    }
    for i in 0..src.alg_count() {
        let id = VertexId(i as u32);
        for &e in &src.alg(id).out_edges {
            let Some(edge) = src.edge(e) else { continue };
            if let AnyVertexId::Adv(sink) = edge.sink {
                let bin = match edge.label {
                    crate::dag::edge::EdgeLabel::Bin(b) => b,
                    _ => continue,
                };
                dst.add_alg_outedge(alg_map[&id], adv_map[&sink], bin);
            }
        }
    }

    for (old, new) in &adv_map {
        let src_v = src.adv(*old);
        let dst_v = dst.adv_mut(*new);
        dst_v.win = src_v.win;
        dst_v.state = src_v.state;
        dst_v.leaf = src_v.leaf;
        dst_v.heuristic = src_v.heuristic;
        dst_v.task = src_v.task;
        dst_v.sapling = src_v.sapling;
        dst_v.expansion_level = src_v.expansion_level;
    }
    for (old, new) in &alg_map {
        dst.alg_mut(*new).win = src.alg(*old).win;
    }

    dst
}

/// tree-duplicating clone: a DFS from `root` that creates a fresh vertex
/// at every visit, so a vertex shared by two parents appears twice in the
/// output with no edges crossing between the two copies.
pub fn clone_tree(src: &Dag, root: AnyVertexId) -> Dag {
    let mut dst = Dag::new();
    let mut counter: u64 = 0;
    let new_root = copy_subtree(src, root, &mut dst, &mut counter);
    if let AnyVertexId::Adv(id) = new_root {
        dst.root = Some(id);
    }
    dst
}

fn copy_subtree(src: &Dag, v: AnyVertexId, dst: &mut Dag, counter: &mut u64) -> AnyVertexId {
    *counter += 1;
    let tag = *counter;
    match v {
        AnyVertexId::Adv(id) => {
            let sv = src.adv(id);
            let new_id = dst.add_adv(sv.bc.clone(), tag, true);
            {
                let dv = dst.adv_mut(new_id);
                dv.win = sv.win;
                dv.state = sv.state;
                dv.leaf = sv.leaf;
                dv.heuristic = sv.heuristic;
            }
            for &e in &sv.out_edges {
                let Some(edge) = src.edge(e) else { continue };
                if let crate::dag::edge::EdgeLabel::Item(item) = edge.label {
                    let child = copy_subtree(src, edge.sink, dst, counter);
                    if let AnyVertexId::Alg(child_id) = child {
                        dst.add_adv_outedge(new_id, child_id, item);
                    }
                }
            }
            AnyVertexId::Adv(new_id)
        }
        AnyVertexId::Alg(id) => {
            let sv = src.alg(id);
            let new_id = dst.add_alg(sv.bc.clone(), sv.next_item, tag, true);
            dst.alg_mut(new_id).win = sv.win;
            for &e in &sv.out_edges {
                let Some(edge) = src.edge(e) else { continue };
                if let crate::dag::edge::EdgeLabel::Bin(bin) = edge.label {
                    let child = copy_subtree(src, edge.sink, dst, counter);
                    if let AnyVertexId::Adv(child_id) = child {
                        dst.add_alg_outedge(new_id, child_id, bin);
                    }
                }
            }
            AnyVertexId::Alg(new_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    fn build_diamond() -> Dag {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        let a2 = dag.add_alg(BinConf::empty(&z), 6, 3, false);
        dag.add_adv_outedge(root, a1, 5);
        dag.add_adv_outedge(root, a2, 6);
        let shared = dag.add_adv(BinConf::empty(&z), 4, false);
        dag.add_alg_outedge(a1, shared, 0);
        dag.add_alg_outedge(a2, shared, 1);
        dag
    }

    #[test]
    fn clone_dag_preserves_vertex_count() {
        let dag = build_diamond();
        let cloned = clone_dag(&dag);
        assert_eq!(cloned.adv_count(), dag.adv_count());
        assert_eq!(cloned.alg_count(), dag.alg_count());
    }

    #[test]
    fn clone_tree_unfolds_shared_vertex() {
        let dag = build_diamond();
        let root = AnyVertexId::Adv(dag.root.unwrap());
        let tree = clone_tree(&dag, root);
        // the shared adversary vertex is reached via two alg parents, so
        // the tree clone must contain two copies of it plus the root.
        assert_eq!(tree.adv_count(), 3);
        assert_eq!(tree.alg_count(), 2);
    }
}
