//! Shortest weighted paths (Dijkstra).
//!
//! # Lazy deletion
//!
//! The priority queue is a plain [`BinaryHeap`] with no decrease-key. When a
//! vertex's tentative distance improves, a *new* entry is pushed and the old
//! one stays in the heap. Entries popped for a vertex that is already
//! settled are stale and are skipped. The heap can therefore hold up to
//! O(E) entries, which keeps the bound at O((V + E) log V).
//!
//! Ties on distance are broken by vertex index (the second tuple field), so
//! results are reproducible for a given construction order.
//!
//! Weights are non-negative by construction (see [`Graph::add_edge`]), which
//! is what makes settling a vertex on first pop correct.
//!
//! Path sums are computed with `checked_add`. A relaxation whose sum would
//! overflow [`Weight`] is dropped, so a target reachable only through such a
//! sum is reported unreachable and `Route::distance` is always exact.

use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, trace};

use super::store::{Graph, Weight};

/// A shortest weighted path and its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<V> {
    /// Sum of edge weights along `path`.
    pub distance: Weight,
    /// Vertices from source to target, both inclusive.
    pub path: Vec<V>,
}

impl<V> Route<V> {
    /// First vertex of the route.
    #[must_use]
    pub fn source(&self) -> Option<&V> {
        self.path.first()
    }

    /// Last vertex of the route.
    #[must_use]
    pub fn target(&self) -> Option<&V> {
        self.path.last()
    }

    /// Number of edges traversed.
    #[must_use]
    pub const fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Cheapest path from `start` to `end` by total edge weight.
    ///
    /// Returns `None` when `end` is unreachable or either vertex is unknown.
    /// `start == end` yields a zero-distance route of one vertex.
    #[must_use]
    pub fn shortest_path<Q>(&self, start: &Q, end: &Q) -> Option<Route<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.index_of(start)?;
        let end = self.index_of(end)?;
        let adjacency = self.adjacency();
        let n = adjacency.len();

        // `None` stands for infinity.
        let mut distance: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::from([Reverse((0, start))]);
        distance[start] = Some(0);

        let mut pops = 0_usize;
        while let Some(Reverse((dist, current))) = heap.pop() {
            pops += 1;
            if settled[current] {
                trace!(vertex = current, dist, "skipping stale heap entry");
                continue;
            }
            settled[current] = true;

            if current == end {
                debug!(pops, distance = dist, "dijkstra reached target");
                return Some(Route {
                    distance: dist,
                    path: self.walk_parents(&parent, start, end),
                });
            }

            for &(next, weight) in &adjacency[current] {
                let Some(candidate) = dist.checked_add(weight) else {
                    trace!(vertex = next, "path weight overflows");
                    continue;
                };
                if distance[next].is_none_or(|known| candidate < known) {
                    distance[next] = Some(candidate);
                    parent[next] = Some(current);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(pops, "dijkstra exhausted queue without reaching target");
        None
    }

    /// Follow parent links from `end` back to `start` and return the path in
    /// forward order.
    fn walk_parents(&self, parent: &[Option<usize>], start: usize, end: usize) -> Vec<V> {
        let mut path = vec![end];
        let mut cursor = end;
        while cursor != start {
            let Some(prev) = parent[cursor] else { break };
            cursor = prev;
            path.push(cursor);
        }
        path.reverse();
        self.resolve(path)
    }
}
