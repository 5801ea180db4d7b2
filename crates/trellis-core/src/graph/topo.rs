//! Topological ordering by DFS finish time.

use std::hash::Hash;

use tracing::debug;

use super::cycles::find_cycle_indices;
use super::store::{Adjacency, Graph};

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Vertices ordered so that every edge `u -> v` has `u` before `v`.
    ///
    /// Returns `None` if the graph has a cycle. When several orders are
    /// valid, the one returned follows DFS from roots in insertion order,
    /// listed by descending finish time.
    #[must_use]
    pub fn topological_order(&self) -> Option<Vec<V>> {
        let adjacency = self.adjacency();
        if find_cycle_indices(&adjacency).is_some() {
            debug!("topological order requested on a cyclic graph");
            return None;
        }

        Some(self.resolve(finish_order(&adjacency).into_iter().rev()))
    }
}

/// Post-order of a full DFS forest: each vertex appears after all of its
/// descendants.
fn finish_order(adjacency: &Adjacency) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut finished = Vec::with_capacity(adjacency.len());
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..adjacency.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let Some(&(next, _)) = adjacency[current].get(cursor) else {
                finished.push(current);
                stack.pop();
                continue;
            };
            frame.1 += 1;
            if !visited[next] {
                visited[next] = true;
                stack.push((next, 0));
            }
        }
    }

    finished
}
