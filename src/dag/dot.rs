//! DOT output (spec §6 "DOT output"): one graph, vertices emitted ply by
//! ply via `bfs_layers` so a renderer naturally lays the tree out top to
//! bottom.

use crate::binconf::format_bc;
use crate::dag::edge::EdgeLabel;
use crate::dag::traverse::bfs_layers;
use crate::dag::vertex::AnyVertexId;
use crate::dag::Dag;
use std::fmt::Write as _;

/// render the subtree reachable from `root` as a DOT digraph.
pub fn write_dot(dag: &mut Dag, root: AnyVertexId) -> String {
    let mut out = String::new();
    writeln!(out, "digraph binstretch {{").unwrap();
    for layer in bfs_layers(dag, root) {
        for v in layer {
            write_vertex(&mut out, dag, v);
        }
    }
    for id in 0..dag.adv_count() {
        for &e in &dag.adv(crate::dag::vertex::VertexId(id as u32)).out_edges {
            write_edge(&mut out, dag, e);
        }
    }
    for id in 0..dag.alg_count() {
        for &e in &dag.alg(crate::dag::vertex::VertexId(id as u32)).out_edges {
            write_edge(&mut out, dag, e);
        }
    }
    writeln!(out, "}}").unwrap();
    out
}

fn node_name(v: AnyVertexId) -> String {
    match v {
        AnyVertexId::Adv(id) => format!("adv{}", id.0),
        AnyVertexId::Alg(id) => format!("alg{}", id.0),
    }
}

fn write_vertex(out: &mut String, dag: &Dag, v: AnyVertexId) {
    let name = node_name(v);
    let mut attrs = Vec::new();
    match v {
        AnyVertexId::Adv(id) => {
            let vx = dag.adv(id);
            attrs.push(format!("loads=\"{}\"", loads_str(vx.bc.loads())));
            attrs.push("player=adv".to_string());
            attrs.push(format!("binconf=\"{}\"", format_bc(&vx.bc)));
            if vx.task {
                attrs.push("task=true".to_string());
            }
            if vx.sapling {
                attrs.push("sapling=true".to_string());
            }
            if let Some(h) = vx.heuristic {
                attrs.push(format!("heur=\"{h:?}\""));
            }
        }
        AnyVertexId::Alg(id) => {
            let vx = dag.alg(id);
            attrs.push(format!("loads=\"{}\"", loads_str(vx.bc.loads())));
            attrs.push("player=alg".to_string());
            attrs.push(format!("next_item={}", vx.next_item));
            attrs.push(format!("binconf=\"{}\"", format_bc(&vx.bc)));
        }
    }
    writeln!(out, "  {name} [{}];", attrs.join(", ")).unwrap();
}

fn write_edge(out: &mut String, dag: &Dag, id: crate::dag::edge::EdgeId) {
    let Some(edge) = dag.edge(id) else { return };
    let from = node_name(edge.source);
    let to = node_name(edge.sink);
    let attr = match edge.label {
        EdgeLabel::Item(i) => format!("next={i}"),
        EdgeLabel::Bin(b) => format!("bin={b}"),
    };
    writeln!(out, "  {from} -> {to} [{attr}];").unwrap();
}

fn loads_str(loads: &[u8]) -> String {
    loads
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinConf;
    use crate::zobrist::Zobrist;

    #[test]
    fn emits_one_line_per_vertex_and_edge() {
        let z = Zobrist::new(1);
        let mut dag = Dag::new();
        let root = dag.add_root(BinConf::empty(&z), 1);
        let a1 = dag.add_alg(BinConf::empty(&z), 5, 2, false);
        dag.add_adv_outedge(root, a1, 5);

        let text = write_dot(&mut dag, AnyVertexId::Adv(root));
        assert!(text.starts_with("digraph binstretch {"));
        assert!(text.contains("player=adv"));
        assert!(text.contains("player=alg"));
        assert!(text.contains("next=5"));
    }
}
