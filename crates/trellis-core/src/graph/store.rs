//! Adjacency store for weighted graphs.
//!
//! # Representation
//!
//! Vertices are interned into a petgraph [`DiGraph`] on first sight, so every
//! vertex gets a dense [`NodeIndex`] and algorithms can keep their per-call
//! state (distances, parents, colors) in plain `Vec`s indexed by
//! `NodeIndex::index()`. The `index` map goes the other way, from caller key
//! to node.
//!
//! Undirected graphs are stored as two directed entries per edge. Edge
//! insertion order is preserved per vertex: petgraph hands out edge indices
//! sequentially, and both [`Graph::neighbors`] and the adjacency snapshot
//! read edges back in index order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::GraphError;

/// Edge weight. Always non-negative once inside a [`Graph`].
pub type Weight = i64;

/// Weight used by [`Graph::add_unit_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;

/// Dense adjacency snapshot: `lists[u]` holds `(v, weight)` in insertion order.
pub(crate) type Adjacency = Vec<Vec<(usize, Weight)>>;

/// A weighted graph keyed by caller-chosen vertex identifiers.
///
/// The directed flag is fixed at construction. Queries never fail on unknown
/// vertices; they behave as if the vertex had no edges.
#[derive(Debug, Clone)]
pub struct Graph<V = String> {
    inner: DiGraph<V, Weight>,
    index: HashMap<V, NodeIndex>,
    directed: bool,
    edge_count: usize,
}

impl<V> Graph<V> {
    /// Create an empty graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            inner: DiGraph::new(),
            index: HashMap::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges added through [`Graph::add_edge`].
    ///
    /// An undirected edge counts once even though it is stored twice.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.node_indices().map(move |idx| &self.inner[idx])
    }

    pub(crate) fn vertex(&self, idx: usize) -> &V {
        &self.inner[NodeIndex::new(idx)]
    }

    /// Snapshot the adjacency lists into dense vectors.
    ///
    /// `raw_edges` is ordered by edge index, which is insertion order, so each
    /// list comes out in the order its edges were added.
    pub(crate) fn adjacency(&self) -> Adjacency {
        let mut lists: Adjacency = vec![Vec::new(); self.inner.node_count()];
        for edge in self.inner.raw_edges() {
            lists[edge.source().index()].push((edge.target().index(), edge.weight));
        }
        lists
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] on the first negative weight.
    pub fn from_edges<I>(directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V, Weight)>,
        V: fmt::Debug,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a vertex. Returns `false` (and changes nothing) if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.intern(vertex);
        true
    }

    /// Add a weighted edge, creating missing endpoints.
    ///
    /// In an undirected graph the mirror entry `to -> from` is added as well.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] if `weight < 0`. The graph is
    /// left untouched in that case, endpoints included.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) -> Result<(), GraphError>
    where
        V: fmt::Debug,
    {
        if weight < 0 {
            return Err(GraphError::NegativeWeight {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                weight,
            });
        }
        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Add an edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, from: V, to: V) {
        self.insert_edge(from, to, DEFAULT_WEIGHT);
    }

    #[must_use]
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(vertex)
    }

    /// Neighbors of `vertex` with edge weights, in insertion order.
    ///
    /// Unknown vertices have no neighbors.
    #[must_use]
    pub fn neighbors<Q>(&self, vertex: &Q) -> Vec<(&V, Weight)>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&idx) = self.index.get(vertex) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.inner.edges(idx).collect();
        edges.sort_unstable_by_key(EdgeRef::id);
        edges
            .into_iter()
            .map(|edge| (&self.inner[edge.target()], *edge.weight()))
            .collect()
    }

    pub(crate) fn index_of<Q>(&self, vertex: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(vertex).map(|idx| idx.index())
    }

    /// Map dense indices back to vertex keys.
    pub(crate) fn resolve(&self, indices: impl IntoIterator<Item = usize>) -> Vec<V> {
        indices
            .into_iter()
            .map(|idx| self.vertex(idx).clone())
            .collect()
    }

    fn intern(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.inner.add_node(vertex.clone());
        self.index.insert(vertex, idx);
        idx
    }

    fn insert_edge(&mut self, from: V, to: V, weight: Weight) {
        let a = self.intern(from);
        let b = self.intern(to);
        self.inner.add_edge(a, b, weight);
        if !self.directed {
            self.inner.add_edge(b, a, weight);
        }
        self.edge_count += 1;
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty graph");
        }

        let (kind, arrow) = if self.directed {
            ("directed", "->")
        } else {
            ("undirected", "<->")
        };
        writeln!(f, "Graph ({kind})")?;
        writeln!(f, "{:-<40}", "")?;

        for (idx, neighbors) in self.adjacency().iter().enumerate() {
            let vertex = self.vertex(idx);
            if neighbors.is_empty() {
                writeln!(f, "{vertex} (isolated)")?;
                continue;
            }
            write!(f, "{vertex} {arrow} ")?;
            for (i, (target, weight)) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}({weight})", self.vertex(*target))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
