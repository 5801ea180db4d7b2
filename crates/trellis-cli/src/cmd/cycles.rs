//! `trellis cycles` — report whether the graph has a cycle.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use super::load_graph;
use crate::output::{OutputMode, render};

/// Arguments for `trellis cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    has_cycle: bool,
    cycle: Option<Vec<String>>,
}

/// Execute `trellis cycles`.
pub fn run_cycles(_args: &CyclesArgs, output: OutputMode, graph_path: &Path) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;
    let cycle = graph.find_cycle();
    let payload = CyclesOutput {
        has_cycle: cycle.is_some(),
        cycle,
    };

    render(output, &payload, render_cycles_human)
}

fn render_cycles_human(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    match &payload.cycle {
        None => writeln!(w, "No cycles found."),
        Some(cycle) => writeln!(w, "Cycle: {}", cycle.join(" -> ")),
    }
}
