//! Subcommand handlers.
//!
//! Every handler loads the graph file named by `--graph`, runs one query and
//! hands the result to the shared output layer.

pub mod completions;
pub mod cycles;
pub mod neighbors;
pub mod path;
pub mod show;
pub mod topo;
pub mod walk;

use std::path::Path;

use serde::Serialize;
use trellis_core::config::load_graph_file;
use trellis_core::error::ErrorCode;
use trellis_core::graph::Graph;

use crate::output::{CliError, OutputMode, render_error};

/// One outgoing edge as shown by `show` and `neighbors`.
#[derive(Debug, Serialize)]
pub struct NeighborEntry {
    pub vertex: String,
    pub weight: i64,
}

impl NeighborEntry {
    pub fn collect(graph: &Graph<String>, vertex: &str) -> Vec<Self> {
        graph
            .neighbors(vertex)
            .into_iter()
            .map(|(v, weight)| Self {
                vertex: v.clone(),
                weight,
            })
            .collect()
    }
}

/// Load and build the graph at `path`, rendering a coded error on failure.
pub fn load_graph(path: &Path, output: OutputMode) -> anyhow::Result<Graph<String>> {
    if !path.exists() {
        render_error(
            output,
            &CliError::from_code(
                ErrorCode::GraphFileMissing,
                format!("graph file not found: {}", path.display()),
            ),
        )?;
        anyhow::bail!(ErrorCode::GraphFileMissing.message());
    }

    let file = match load_graph_file(path) {
        Ok(file) => file,
        Err(err) => {
            render_error(
                output,
                &CliError::from_code(ErrorCode::GraphFileParse, format!("{err:#}")),
            )?;
            anyhow::bail!(ErrorCode::GraphFileParse.message());
        }
    };

    match file.build() {
        Ok(graph) => Ok(graph),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            Err(err.into())
        }
    }
}

/// Fail with `VertexNotFound` unless every name in `vertices` is in `graph`.
pub fn require_vertices(
    graph: &Graph<String>,
    vertices: &[&str],
    output: OutputMode,
) -> anyhow::Result<()> {
    for vertex in vertices {
        if !graph.contains_vertex(*vertex) {
            render_error(
                output,
                &CliError::from_code(
                    ErrorCode::VertexNotFound,
                    format!("vertex '{vertex}' not found"),
                ),
            )?;
            anyhow::bail!("vertex '{vertex}' not found");
        }
    }
    Ok(())
}
