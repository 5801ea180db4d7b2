#![forbid(unsafe_code)]
//! trellis-core library.
//!
//! An in-memory weighted graph with shortest-path, cycle and
//! topological-order queries.
//!
//! # Conventions
//!
//! - **Errors**: library operations return [`error::GraphError`]; file
//!   loading in [`config`] uses `anyhow::Result` with path context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! ```
//! use trellis_core::graph::Graph;
//!
//! let mut g: Graph<String> = Graph::undirected();
//! g.add_edge("NYC".into(), "Philly".into(), 100)?;
//! g.add_edge("Philly".into(), "DC".into(), 140)?;
//!
//! let route = g.shortest_path("NYC", "DC").expect("DC is reachable");
//! assert_eq!(route.distance, 240);
//! # Ok::<(), trellis_core::error::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;

pub use error::{ErrorCode, GraphError};
pub use graph::{Graph, Route, Weight};
