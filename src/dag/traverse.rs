//! Depth-first and breadth-first traversal of the Game DAG (spec §4.1
//! "Traversal"). Visited flags live on the vertices themselves rather than
//! in an auxiliary `HashSet`, since every traversal touches a large
//! fraction of the DAG anyway; `visited2` lets one DFS nest inside another
//! (e.g. consistency checking while an outer traversal is in progress)
//! without the two passes clobbering each other's marks.

use crate::dag::arena::Dag;
use crate::dag::vertex::AnyVertexId;
use std::collections::VecDeque;

/// clears every vertex's primary `visited` flag.
pub fn clear_visited(dag: &mut Dag) {
    for i in 0..dag.adv_count() {
        dag.adv_mut(crate::dag::vertex::VertexId(i as u32)).visited = false;
    }
    for i in 0..dag.alg_count() {
        dag.alg_mut(crate::dag::vertex::VertexId(i as u32)).visited = false;
    }
}

pub fn clear_visited2(dag: &mut Dag) {
    for i in 0..dag.adv_count() {
        dag.adv_mut(crate::dag::vertex::VertexId(i as u32)).visited2 = false;
    }
    for i in 0..dag.alg_count() {
        dag.alg_mut(crate::dag::vertex::VertexId(i as u32)).visited2 = false;
    }
}

/// depth-first walk from `root`, calling `on_adv`/`on_alg` once per vertex
/// the first time it is reached. Uses an explicit stack to avoid blowing
/// the call stack on deep DAGs (the search can run dozens of plies deep).
pub fn dfs(
    dag: &mut Dag,
    root: AnyVertexId,
    mut on_adv: impl FnMut(&mut Dag, crate::dag::vertex::VertexId),
    mut on_alg: impl FnMut(&mut Dag, crate::dag::vertex::VertexId),
) {
    let mut stack = vec![root];
    while let Some(v) = stack.pop() {
        let (already, out_edges) = match v {
            AnyVertexId::Adv(id) => {
                let vx = dag.adv_mut(id);
                if vx.visited {
                    (true, Vec::new())
                } else {
                    vx.visited = true;
                    (false, vx.out_edges.clone())
                }
            }
            AnyVertexId::Alg(id) => {
                let vx = dag.alg_mut(id);
                if vx.visited {
                    (true, Vec::new())
                } else {
                    vx.visited = true;
                    (false, vx.out_edges.clone())
                }
            }
        };
        if already {
            continue;
        }
        match v {
            AnyVertexId::Adv(id) => on_adv(dag, id),
            AnyVertexId::Alg(id) => on_alg(dag, id),
        }
        for e in out_edges {
            if let Some(edge) = dag.edge(e) {
                stack.push(edge.sink);
            }
        }
    }
}

/// breadth-first layers from `root`, used by the DOT exporter to draw the
/// DAG ply by ply.
pub fn bfs_layers(dag: &mut Dag, root: AnyVertexId) -> Vec<Vec<AnyVertexId>> {
    clear_visited(dag);
    let mut layers = Vec::new();
    let mut frontier = VecDeque::from([root]);
    mark_visited(dag, root);
    while !frontier.is_empty() {
        let mut layer = Vec::new();
        let mut next = VecDeque::new();
        while let Some(v) = frontier.pop_front() {
            layer.push(v);
            let out_edges = match v {
                AnyVertexId::Adv(id) => dag.adv(id).out_edges.clone(),
                AnyVertexId::Alg(id) => dag.alg(id).out_edges.clone(),
            };
            for e in out_edges {
                if let Some(edge) = dag.edge(e) {
                    if !is_visited(dag, edge.sink) {
                        mark_visited(dag, edge.sink);
                        next.push_back(edge.sink);
                    }
                }
            }
        }
        layers.push(layer);
        frontier = next;
    }
    layers
}

fn mark_visited(dag: &mut Dag, v: AnyVertexId) {
    match v {
        AnyVertexId::Adv(id) => dag.adv_mut(id).visited = true,
        AnyVertexId::Alg(id) => dag.alg_mut(id).visited = true,
    }
}

fn is_visited(dag: &Dag, v: AnyVertexId) -> bool {
    match v {
        AnyVertexId::Adv(id) => dag.adv(id).visited,
        AnyVertexId::Alg(id) => dag.alg(id).visited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    fn build_chain() -> (Dag, AnyVertexId) {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        dag.add_adv_outedge(root, a1, 5);
        let root2 = dag.add_adv(BinConf::empty(&z), 3, false);
        dag.add_alg_outedge(a1, root2, 0);
        (dag, AnyVertexId::Adv(root))
    }

    #[test]
    fn dfs_visits_every_vertex_once() {
        let (mut dag, root) = build_chain();
        let mut adv_seen = 0;
        let mut alg_seen = 0;
        dfs(&mut dag, root, |_, _| adv_seen += 1, |_, _| alg_seen += 1);
        assert_eq!(adv_seen, 2);
        assert_eq!(alg_seen, 1);
    }

    #[test]
    fn bfs_layers_are_in_distance_order() {
        let (mut dag, root) = build_chain();
        let layers = bfs_layers(&mut dag, root);
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0], vec![root]);
    }
}
