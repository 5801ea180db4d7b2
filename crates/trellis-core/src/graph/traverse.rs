//! Unweighted traversal: BFS, DFS, reachability and fewest-hop paths.
//!
//! Neighbors are always visited in insertion order, so traversal output is
//! deterministic for a given construction sequence.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use tracing::trace;

use super::store::{Adjacency, Graph};

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Breadth-first order starting at `start`.
    ///
    /// Returns an empty vec if `start` is not a vertex.
    #[must_use]
    pub fn bfs<Q>(&self, start: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(start) = self.index_of(start) else {
            return Vec::new();
        };
        let adjacency = self.adjacency();
        let mut visited = vec![false; adjacency.len()];
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            order.push(self.vertex(current).clone());
            for &(next, _) in &adjacency[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        trace!(visited = order.len(), "bfs finished");
        order
    }

    /// Depth-first pre-order starting at `start`.
    ///
    /// Matches the recursive formulation (descend into the first unvisited
    /// neighbor before looking at the next one) but runs on an explicit
    /// stack. Returns an empty vec if `start` is not a vertex.
    #[must_use]
    pub fn dfs<Q>(&self, start: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(start) = self.index_of(start) else {
            return Vec::new();
        };
        let adjacency = self.adjacency();
        let mut visited = vec![false; adjacency.len()];
        let mut order = Vec::new();

        // Each frame: (vertex, index of the next neighbor to look at).
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        visited[start] = true;
        order.push(self.vertex(start).clone());

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let Some(&(next, _)) = adjacency[current].get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;
            if !visited[next] {
                visited[next] = true;
                order.push(self.vertex(next).clone());
                stack.push((next, 0));
            }
        }

        trace!(visited = order.len(), "dfs finished");
        order
    }

    /// Whether `end` can be reached from `start`.
    ///
    /// A known vertex always reaches itself. Unknown vertices reach nothing.
    #[must_use]
    pub fn has_path<Q>(&self, start: &Q, end: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return false;
        };
        bfs_parents(&self.adjacency(), start, end).is_some()
    }

    /// Path with the fewest edges from `start` to `end`, ignoring weights.
    ///
    /// Returns `[start]` when `start == end`, and `None` when `end` is
    /// unreachable or either vertex is unknown.
    #[must_use]
    pub fn shortest_unweighted_path<Q>(&self, start: &Q, end: &Q) -> Option<Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.index_of(start)?;
        let end = self.index_of(end)?;
        let parent = bfs_parents(&self.adjacency(), start, end)?;

        let mut path = vec![end];
        let mut cursor = end;
        while cursor != start {
            cursor = parent[cursor]?;
            path.push(cursor);
        }
        path.reverse();

        Some(self.resolve(path))
    }
}

/// BFS from `start` until `end` is discovered.
///
/// Returns the parent table (indexed by vertex) once `end` is found, or
/// `None` if the search exhausts without reaching it.
fn bfs_parents(adjacency: &Adjacency, start: usize, end: usize) -> Option<Vec<Option<usize>>> {
    let mut parent: Vec<Option<usize>> = vec![None; adjacency.len()];
    if start == end {
        return Some(parent);
    }

    let mut visited = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        for &(next, _) in &adjacency[current] {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);
            if next == end {
                return Some(parent);
            }
            queue.push_back(next);
        }
    }

    None
}
