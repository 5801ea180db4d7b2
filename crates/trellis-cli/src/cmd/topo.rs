//! `trellis topo` — topological order of a directed acyclic graph.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;
use trellis_core::error::ErrorCode;

use super::load_graph;
use crate::output::{CliError, OutputMode, render_error, render_mode};

/// Arguments for `trellis topo`.
#[derive(Args, Debug, Default)]
pub struct TopoArgs {}

#[derive(Debug, Serialize)]
struct TopoOutput {
    order: Vec<String>,
}

/// Execute `trellis topo`.
///
/// Fails with `CycleDetected` (naming one cycle) when the graph is not a DAG.
pub fn run_topo(_args: &TopoArgs, output: OutputMode, graph_path: &Path) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;

    let Some(order) = graph.topological_order() else {
        let witness = graph.find_cycle().unwrap_or_default().join(" -> ");
        render_error(
            output,
            &CliError::from_code(
                ErrorCode::CycleDetected,
                format!("graph has a cycle: {witness}"),
            ),
        )?;
        anyhow::bail!(ErrorCode::CycleDetected.message());
    };

    render_mode(
        output,
        &TopoOutput { order },
        |p, w| {
            for vertex in &p.order {
                writeln!(w, "{vertex}")?;
            }
            Ok(())
        },
        |p, w| writeln!(w, "{}", p.order.join(" -> ")),
    )
}
