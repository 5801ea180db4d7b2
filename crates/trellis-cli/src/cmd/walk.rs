//! `trellis walk` — BFS or DFS visiting order from a start vertex.

use std::io::Write;
use std::path::Path;

use clap::{Args, ValueEnum};
use serde::Serialize;

use super::{load_graph, require_vertices};
use crate::output::{OutputMode, render_mode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkOrder {
    /// Breadth-first (level by level).
    #[default]
    Bfs,
    /// Depth-first (pre-order).
    Dfs,
}

/// Arguments for `trellis walk`.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Vertex to start from.
    pub start: String,

    /// Traversal order.
    #[arg(long, value_enum, default_value_t = WalkOrder::Bfs)]
    pub order: WalkOrder,
}

#[derive(Debug, Serialize)]
struct WalkOutput {
    start: String,
    order: WalkOrder,
    visited: Vec<String>,
}

/// Execute `trellis walk`.
pub fn run_walk(args: &WalkArgs, output: OutputMode, graph_path: &Path) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;
    require_vertices(&graph, &[args.start.as_str()], output)?;

    let visited = match args.order {
        WalkOrder::Bfs => graph.bfs(args.start.as_str()),
        WalkOrder::Dfs => graph.dfs(args.start.as_str()),
    };

    let payload = WalkOutput {
        start: args.start.clone(),
        order: args.order,
        visited,
    };

    render_mode(output, &payload, render_walk_text, render_walk_pretty)
}

fn render_walk_text(payload: &WalkOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for vertex in &payload.visited {
        writeln!(w, "{vertex}")?;
    }
    Ok(())
}

fn render_walk_pretty(payload: &WalkOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let label = match payload.order {
        WalkOrder::Bfs => "BFS",
        WalkOrder::Dfs => "DFS",
    };
    writeln!(
        w,
        "{label} from {}: {}",
        payload.start,
        payload.visited.join(" -> ")
    )
}
