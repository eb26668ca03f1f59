//! Sanity checks over the Game DAG (spec §4.1 "Consistency"): every edge is
//! registered on both endpoints, every non-root vertex has at least one
//! in-edge, and leaf/heuristic bookkeeping agrees with each other. Intended
//! for use in tests and behind `--measure`, not on the search hot path.

use crate::dag::arena::Dag;
use crate::dag::enums::LeafKind;
use crate::dag::vertex::{AnyVertexId, VertexId};

#[derive(Debug)]
pub struct ConsistencyReport {
    pub violations: Vec<String>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn check(dag: &Dag) -> ConsistencyReport {
    let mut violations = Vec::new();

    for i in 0..dag.adv_count() {
        let id = VertexId(i as u32);
        let v = dag.adv(id);
        if Some(id) != dag.root && v.in_edges.is_empty() {
            violations.push(format!("adv vertex {i} has no in-edges and is not root"));
        }
        for &e in &v.out_edges {
            match dag.edge(e) {
                None => violations.push(format!("adv vertex {i} out-edge {} is tombstoned", e.0)),
                Some(edge) if edge.source != AnyVertexId::Adv(id) => {
                    violations.push(format!("edge {} source mismatch for adv vertex {i}", e.0))
                }
                _ => {}
            }
        }
        for &e in &v.in_edges {
            match dag.edge(e) {
                None => violations.push(format!("adv vertex {i} in-edge {} is tombstoned", e.0)),
                Some(edge) if edge.sink != AnyVertexId::Adv(id) => {
                    violations.push(format!("edge {} sink mismatch for adv vertex {i}", e.0))
                }
                _ => {}
            }
        }
        if v.leaf != LeafKind::Heuristical && v.heuristic.is_some() {
            violations.push(format!("adv vertex {i} has heuristic set but leaf kind {:?}", v.leaf));
        }
        if v.leaf == LeafKind::Heuristical && v.heuristic.is_none() {
            violations.push(format!("adv vertex {i} is heuristical but carries no heuristic"));
        }
    }

    for i in 0..dag.alg_count() {
        let id = VertexId(i as u32);
        let v = dag.alg(id);
        if v.in_edges.is_empty() {
            violations.push(format!("alg vertex {i} has no in-edges"));
        }
        for &e in &v.out_edges {
            match dag.edge(e) {
                None => violations.push(format!("alg vertex {i} out-edge {} is tombstoned", e.0)),
                Some(edge) if edge.source != AnyVertexId::Alg(id) => {
                    violations.push(format!("edge {} source mismatch for alg vertex {i}", e.0))
                }
                _ => {}
            }
        }
        for &e in &v.in_edges {
            match dag.edge(e) {
                None => violations.push(format!("alg vertex {i} in-edge {} is tombstoned", e.0)),
                Some(edge) if edge.sink != AnyVertexId::Alg(id) => {
                    violations.push(format!("edge {} sink mismatch for alg vertex {i}", e.0))
                }
                _ => {}
            }
        }
    }

    ConsistencyReport { violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    #[test]
    fn fresh_chain_is_consistent() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        dag.add_adv_outedge(root, a1, 5);
        assert!(check(&dag).is_clean());
    }

    #[test]
    fn non_root_without_in_edges_is_flagged() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        dag.add_root(BinConf::empty(&z), 1);
        dag.add_adv(BinConf::empty(&z), 99, false);
        let report = check(&dag);
        assert!(!report.is_clean());
    }
}
