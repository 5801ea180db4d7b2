//! `trellis path` and `trellis reachable` — point-to-point queries.
//!
//! An unreachable target is a normal answer, not an error: the command
//! succeeds and reports `reachable: false` (JSON `"route": null`).

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use super::{load_graph, require_vertices};
use crate::output::{OutputMode, pretty_kv, pretty_section, render, render_mode};

/// Arguments for `trellis path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Source vertex.
    pub from: String,

    /// Target vertex.
    pub to: String,

    /// Minimize the number of edges instead of total weight.
    #[arg(long)]
    pub unweighted: bool,
}

/// Arguments for `trellis reachable`.
#[derive(Args, Debug)]
pub struct ReachableArgs {
    /// Source vertex.
    pub from: String,

    /// Target vertex.
    pub to: String,
}

#[derive(Debug, Serialize)]
struct RouteOutput {
    /// Total weight; absent for fewest-hop paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<i64>,
    hops: usize,
    path: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    from: String,
    to: String,
    weighted: bool,
    route: Option<RouteOutput>,
}

#[derive(Debug, Serialize)]
struct ReachableOutput {
    from: String,
    to: String,
    reachable: bool,
}

/// Execute `trellis path`.
pub fn run_path(args: &PathArgs, output: OutputMode, graph_path: &Path) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;
    require_vertices(&graph, &[args.from.as_str(), args.to.as_str()], output)?;

    let route = if args.unweighted {
        graph
            .shortest_unweighted_path(args.from.as_str(), args.to.as_str())
            .map(|path| RouteOutput {
                distance: None,
                hops: path.len().saturating_sub(1),
                path,
            })
    } else {
        graph
            .shortest_path(args.from.as_str(), args.to.as_str())
            .map(|route| RouteOutput {
                distance: Some(route.distance),
                hops: route.hops(),
                path: route.path,
            })
    };

    let payload = PathOutput {
        from: args.from.clone(),
        to: args.to.clone(),
        weighted: !args.unweighted,
        route,
    };

    render_mode(output, &payload, render_path_text, render_path_pretty)
}

/// Execute `trellis reachable`.
pub fn run_reachable(
    args: &ReachableArgs,
    output: OutputMode,
    graph_path: &Path,
) -> anyhow::Result<()> {
    let graph = load_graph(graph_path, output)?;
    require_vertices(&graph, &[args.from.as_str(), args.to.as_str()], output)?;

    let payload = ReachableOutput {
        from: args.from.clone(),
        to: args.to.clone(),
        reachable: graph.has_path(args.from.as_str(), args.to.as_str()),
    };

    render(output, &payload, |p, w| {
        writeln!(w, "reachable: {}", p.reachable)
    })
}

fn render_path_text(payload: &PathOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let Some(route) = &payload.route else {
        return writeln!(w, "reachable: false");
    };
    writeln!(w, "reachable: true")?;
    if let Some(distance) = route.distance {
        writeln!(w, "distance: {distance}")?;
    }
    writeln!(w, "hops: {}", route.hops)?;
    writeln!(w, "path: {}", route.path.join(" "))
}

fn render_path_pretty(payload: &PathOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let heading = if payload.weighted {
        "Shortest path"
    } else {
        "Fewest-hop path"
    };
    pretty_section(w, &format!("{heading}: {} -> {}", payload.from, payload.to))?;

    let Some(route) = &payload.route else {
        return writeln!(w, "No path from {} to {}.", payload.from, payload.to);
    };
    if let Some(distance) = route.distance {
        pretty_kv(w, "distance", distance.to_string())?;
    }
    pretty_kv(w, "hops", route.hops.to_string())?;
    pretty_kv(w, "path", route.path.join(" -> "))
}
