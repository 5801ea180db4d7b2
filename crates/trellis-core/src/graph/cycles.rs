//! Cycle detection for directed graphs (three-color DFS).
//!
//! # Colors
//!
//! Every vertex moves through `Unvisited -> InProgress -> Done` exactly once
//! per call. `InProgress` vertices are the ones on the current DFS path, so
//! meeting one again along an edge means the path loops back on itself.
//!
//! # Direction
//!
//! The adjacency is always read as directed. On an undirected graph every
//! edge is stored in both directions, so any edge at all shows up as a
//! two-vertex cycle `[a, b, a]`.
//!
//! The walk uses an explicit stack of `(vertex, next neighbor)` frames, so
//! deep graphs cannot overflow the call stack. The frames double as the
//! current path, which is where the cycle witness comes from.

use std::hash::Hash;

use tracing::{debug, warn};

use super::store::{Adjacency, Graph};

/// Per-vertex DFS state, scoped to a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Whether some vertex can reach itself through one or more edges.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// The first cycle the DFS runs into, as a closed walk `[v0, ..., v0]`.
    ///
    /// Roots are tried in vertex insertion order. A self-loop on `a` is
    /// reported as `[a, a]`.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<V>> {
        if !self.is_directed() && self.edge_count() > 0 {
            warn!("cycle detection on an undirected graph reports every edge as a cycle");
        }

        let cycle = find_cycle_indices(&self.adjacency())?;
        debug!(len = cycle.len() - 1, "cycle found");
        Some(self.resolve(cycle))
    }
}

/// Three-color DFS over `adjacency`, returning the closed walk of the first
/// back edge found.
pub(crate) fn find_cycle_indices(adjacency: &Adjacency) -> Option<Vec<usize>> {
    let mut state = vec![VisitState::Unvisited; adjacency.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..adjacency.len() {
        if state[root] != VisitState::Unvisited {
            continue;
        }
        state[root] = VisitState::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, cursor) = *frame;
            let Some(&(next, _)) = adjacency[current].get(cursor) else {
                state[current] = VisitState::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match state[next] {
                VisitState::InProgress => {
                    // `next` is on the current path; the frames from it to
                    // the top of the stack form the loop.
                    let start = stack
                        .iter()
                        .position(|&(vertex, _)| vertex == next)
                        .unwrap_or(0);
                    let mut cycle: Vec<usize> =
                        stack[start..].iter().map(|&(vertex, _)| vertex).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
                VisitState::Unvisited => {
                    state[next] = VisitState::InProgress;
                    stack.push((next, 0));
                }
                VisitState::Done => {}
            }
        }
    }

    None
}
