//! `trellis neighbors` — outgoing edges of one vertex.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use super::{NeighborEntry, load_graph, require_vertices};
use crate::output::{OutputMode, render};

/// Arguments for `trellis neighbors`.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Vertex whose neighbors to list.
    pub vertex: String,
}

#[derive(Debug, Serialize)]
struct NeighborsOutput {
    vertex: String,
    neighbors: Vec<NeighborEntry>,
}

/// Execute `trellis neighbors`.
pub fn run_neighbors(
    args: &NeighborsArgs,
    output: OutputMode,
    graph_path: &Path,
) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;
    require_vertices(&graph, &[args.vertex.as_str()], output)?;

    let payload = NeighborsOutput {
        vertex: args.vertex.clone(),
        neighbors: NeighborEntry::collect(&graph, &args.vertex),
    };

    render(output, &payload, render_neighbors_human)
}

fn render_neighbors_human(payload: &NeighborsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.neighbors.is_empty() {
        writeln!(w, "{} has no neighbors.", payload.vertex)?;
        return Ok(());
    }
    for n in &payload.neighbors {
        writeln!(w, "{}\t{}", n.vertex, n.weight)?;
    }
    Ok(())
}
