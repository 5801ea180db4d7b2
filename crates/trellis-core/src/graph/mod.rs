//! Weighted graph store and the queries that run over it.
//!
//! ## Submodules
//!
//! - [`store`] — [`Graph`] itself: vertex interning, edge insertion, the
//!   dense adjacency snapshot every algorithm works from.
//! - [`traverse`] — BFS, DFS, reachability and fewest-hop paths.
//! - [`dijkstra`] — cheapest weighted path ([`Route`]).
//! - [`cycles`] — three-color cycle detection with a cycle witness.
//! - [`topo`] — topological order, refused on cyclic graphs.
//!
//! All queries take `&self` and build their own per-call state, so repeated
//! queries on an unchanged graph return identical results.

pub mod cycles;
pub mod dijkstra;
pub mod store;
pub mod topo;
pub mod traverse;

pub use dijkstra::Route;
pub use store::{DEFAULT_WEIGHT, Graph, Weight};
