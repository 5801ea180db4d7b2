#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    author,
    version,
    about = "trellis: weighted graph queries",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging (debug level unless `TRELLIS_LOG` is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Graph file to load (TOML, or JSON by extension).
    #[arg(short, long, global = true, default_value = "graph.toml")]
    graph: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and environment.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Inspect",
        about = "Print the graph",
        long_about = "Print every vertex with its outgoing edges and weights.",
        after_help = "EXAMPLES:\n    # Show the graph in ./graph.toml\n    trellis show\n\n    # Show another file as JSON\n    trellis -g cities.toml show --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Inspect",
        about = "List a vertex's neighbors",
        after_help = "EXAMPLES:\n    trellis neighbors NYC"
    )]
    Neighbors(cmd::neighbors::NeighborsArgs),

    #[command(
        next_help_heading = "Traverse",
        about = "Walk the graph from a vertex",
        long_about = "Print vertices in breadth-first or depth-first visiting order.",
        after_help = "EXAMPLES:\n    # Breadth-first (default)\n    trellis walk A\n\n    # Depth-first\n    trellis walk A --order dfs"
    )]
    Walk(cmd::walk::WalkArgs),

    #[command(
        next_help_heading = "Traverse",
        about = "Check whether one vertex reaches another",
        after_help = "EXAMPLES:\n    trellis reachable A C"
    )]
    Reachable(cmd::path::ReachableArgs),

    #[command(
        next_help_heading = "Traverse",
        about = "Find the shortest path between two vertices",
        long_about = "Find the cheapest path by total weight (Dijkstra), or the path with the fewest edges with --unweighted.",
        after_help = "EXAMPLES:\n    # Cheapest route\n    trellis -g cities.toml path NYC DC\n\n    # Fewest hops\n    trellis path A D --unweighted"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Detect cycles",
        long_about = "Report whether the directed graph contains a cycle, and show one if it does."
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Print a topological order",
        long_about = "Print the vertices so that every edge points forward. Fails if the graph has a cycle."
    )]
    Topo(cmd::topo::TopoArgs),

    #[command(
        next_help_heading = "Setup",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    trellis completions bash > /etc/bash_completion.d/trellis"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

/// Filter used when `TRELLIS_LOG` is unset.
const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "trellis=debug,trellis_core=debug,info"
    } else {
        "trellis=info,trellis_core=info,warn"
    }
}

fn init_tracing(verbose: bool) {
    let verbose = verbose || env::var("DEBUG").is_ok();
    let filter = EnvFilter::try_from_env("TRELLIS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let format = env::var("TRELLIS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    let graph = cli.graph.as_path();
    debug!(graph = %graph.display(), ?output, "dispatching command");

    match &cli.command {
        Commands::Show(args) => cmd::show::run_show(args, output, graph),
        Commands::Neighbors(args) => cmd::neighbors::run_neighbors(args, output, graph),
        Commands::Walk(args) => cmd::walk::run_walk(args, output, graph),
        Commands::Reachable(args) => cmd::path::run_reachable(args, output, graph),
        Commands::Path(args) => cmd::path::run_path(args, output, graph),
        Commands::Cycles(args) => cmd::cycles::run_cycles(args, output, graph),
        Commands::Topo(args) => cmd::topo::run_topo(args, output, graph),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args, &mut command)
        }
    }
}
