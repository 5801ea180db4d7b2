//! `trellis show` — print the whole graph.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use super::{NeighborEntry, load_graph};
use crate::output::{OutputMode, pretty_kv, render_mode};

/// Arguments for `trellis show`.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {}

#[derive(Debug, Serialize)]
struct VertexEntry {
    vertex: String,
    neighbors: Vec<NeighborEntry>,
}

#[derive(Debug, Serialize)]
struct ShowOutput {
    directed: bool,
    vertex_count: usize,
    edge_count: usize,
    vertices: Vec<VertexEntry>,
    #[serde(skip)]
    display: String,
}

/// Execute `trellis show`.
pub fn run_show(_args: &ShowArgs, output: OutputMode, graph_path: &Path) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;

    let vertices = graph
        .vertices()
        .map(|v| VertexEntry {
            vertex: v.clone(),
            neighbors: NeighborEntry::collect(&graph, v),
        })
        .collect();

    let payload = ShowOutput {
        directed: graph.is_directed(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices,
        display: graph.to_string(),
    };

    render_mode(output, &payload, render_show_text, render_show_pretty)
}

fn render_show_text(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for entry in &payload.vertices {
        if entry.neighbors.is_empty() {
            writeln!(w, "{}", entry.vertex)?;
        }
        for n in &entry.neighbors {
            writeln!(w, "{}\t{}\t{}", entry.vertex, n.vertex, n.weight)?;
        }
    }
    Ok(())
}

fn render_show_pretty(payload: &ShowOutput, w: &mut dyn Write) -> std::io::Result<()> {
    write!(w, "{}", payload.display)?;
    writeln!(w)?;
    pretty_kv(w, "vertices", payload.vertex_count.to_string())?;
    pretty_kv(w, "edges", payload.edge_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_edges_and_isolated_vertices() {
        let payload = ShowOutput {
            directed: true,
            vertex_count: 3,
            edge_count: 1,
            vertices: vec![
                VertexEntry {
                    vertex: "A".into(),
                    neighbors: vec![NeighborEntry {
                        vertex: "B".into(),
                        weight: 4,
                    }],
                },
                VertexEntry {
                    vertex: "B".into(),
                    neighbors: Vec::new(),
                },
            ],
            display: String::new(),
        };

        let mut buf = Vec::new();
        render_show_text(&payload, &mut buf).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "A\tB\t4\nB\n");
    }
}
