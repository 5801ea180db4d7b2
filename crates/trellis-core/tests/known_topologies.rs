//! Known-topology regression tests for the graph queries.
//!
//! Each test uses a hand-built graph whose answers are worked out by hand
//! and hardcoded, so any change in traversal order or path choice shows up.

use std::collections::HashMap;

use trellis_core::graph::{Graph, Route};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn directed(edges: &[(&str, &str)]) -> Graph<String> {
    let mut g = Graph::directed();
    for (a, b) in edges {
        g.add_unit_edge((*a).to_string(), (*b).to_string());
    }
    g
}

fn weighted(directed: bool, edges: &[(&str, &str, i64)]) -> Graph<String> {
    Graph::from_edges(
        directed,
        edges
            .iter()
            .map(|(a, b, w)| ((*a).to_string(), (*b).to_string(), *w)),
    )
    .expect("test weights are non-negative")
}

fn path_cost(g: &Graph<String>, path: &[String]) -> i64 {
    path.windows(2)
        .map(|pair| {
            g.neighbors(pair[0].as_str())
                .into_iter()
                .filter(|(v, _)| **v == pair[1])
                .map(|(_, w)| w)
                .min()
                .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]))
        })
        .sum()
}

fn positions(order: &[String]) -> HashMap<&str, usize> {
    order
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect()
}

// ---------------------------------------------------------------------------
// Shortest weighted path
// ---------------------------------------------------------------------------

#[test]
fn east_coast_cities() {
    let g = weighted(
        false,
        &[
            ("NYC", "Boston", 215),
            ("NYC", "Philly", 100),
            ("Boston", "DC", 300),
            ("Philly", "DC", 140),
        ],
    );

    let Route { distance, path } = g.shortest_path("NYC", "DC").expect("DC reachable");
    assert_eq!(distance, 240);
    assert_eq!(path, vec!["NYC", "Philly", "DC"]);
    assert_eq!(path_cost(&g, &path), distance);
}

#[test]
fn textbook_six_vertex_network() {
    // Classic CLRS-style network with distances from s:
    // t=8, x=9, y=5, z=7
    let g = weighted(
        true,
        &[
            ("s", "t", 10),
            ("s", "y", 5),
            ("t", "x", 1),
            ("t", "y", 2),
            ("y", "t", 3),
            ("y", "x", 9),
            ("y", "z", 2),
            ("x", "z", 4),
            ("z", "x", 6),
            ("z", "s", 7),
        ],
    );

    let expected = [("s", 0), ("t", 8), ("x", 9), ("y", 5), ("z", 7)];
    for (target, dist) in expected {
        let route = g.shortest_path("s", target).expect("all reachable from s");
        assert_eq!(route.distance, dist, "distance to {target}");
        assert_eq!(route.path.first().map(String::as_str), Some("s"));
        assert_eq!(route.path.last().map(String::as_str), Some(target));
        assert_eq!(path_cost(&g, &route.path), route.distance);
    }

    let to_x = g.shortest_path("s", "x").expect("reachable");
    assert_eq!(to_x.path, vec!["s", "y", "t", "x"]);
}

#[test]
fn parallel_edges_use_the_cheapest() {
    let g = weighted(true, &[("A", "B", 9), ("A", "B", 2), ("B", "C", 1)]);
    let route = g.shortest_path("A", "C").expect("reachable");
    assert_eq!(route.distance, 3);
    assert_eq!(route.path, vec!["A", "B", "C"]);
}

#[test]
fn disconnected_components_have_no_route() {
    let g = weighted(false, &[("A", "B", 1), ("C", "D", 1)]);
    assert!(g.shortest_path("A", "D").is_none());
    assert!(!g.has_path("A", "D"));
    assert!(g.shortest_unweighted_path("A", "D").is_none());
}

// ---------------------------------------------------------------------------
// Cycles and topological order
// ---------------------------------------------------------------------------

#[test]
fn triangle_cycle_blocks_topological_order() {
    let g = directed(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(g.has_cycle());
    assert!(g.topological_order().is_none());
}

#[test]
fn diamond_orders_every_edge() {
    let edges = [("A", "B"), ("A", "D"), ("B", "C"), ("D", "C")];
    let g = directed(&edges);
    assert!(!g.has_cycle());

    let order = g.topological_order().expect("diamond is a DAG");
    let pos = positions(&order);
    for (a, b) in edges {
        assert!(pos[a] < pos[b], "{a} must come before {b}");
    }
}

#[test]
fn course_prerequisites() {
    let edges = [
        ("intro", "data-structures"),
        ("intro", "discrete-math"),
        ("data-structures", "algorithms"),
        ("discrete-math", "algorithms"),
        ("algorithms", "compilers"),
        ("data-structures", "databases"),
        ("algorithms", "databases"),
    ];
    let g = directed(&edges);

    let order = g.topological_order().expect("prerequisites are acyclic");
    assert_eq!(order.len(), 6);
    let pos = positions(&order);
    for (a, b) in edges {
        assert!(pos[a] < pos[b], "{a} must come before {b}");
    }
    assert_eq!(order[0], "intro");
}

#[test]
fn adding_a_back_edge_introduces_a_cycle() {
    let mut g = directed(&[("A", "B"), ("B", "C")]);
    assert!(g.topological_order().is_some());

    g.add_unit_edge("C".to_string(), "A".to_string());
    let cycle = g.find_cycle().expect("back edge closes a cycle");
    assert_eq!(cycle, ["A", "B", "C", "A"]);
    assert!(g.topological_order().is_none());
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

#[test]
fn social_graph_traversals() {
    let mut g: Graph<String> = Graph::undirected();
    for (a, b) in [
        ("Alice", "Bob"),
        ("Alice", "Carol"),
        ("Bob", "Dave"),
        ("Carol", "Dave"),
        ("Dave", "Eve"),
    ] {
        g.add_unit_edge(a.to_string(), b.to_string());
    }

    assert_eq!(g.bfs("Alice"), vec!["Alice", "Bob", "Carol", "Dave", "Eve"]);
    assert_eq!(g.dfs("Alice"), vec!["Alice", "Bob", "Dave", "Carol", "Eve"]);
    assert_eq!(
        g.shortest_unweighted_path("Alice", "Eve"),
        Some(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Dave".to_string(),
            "Eve".to_string()
        ])
    );
    assert!(g.has_path("Eve", "Alice"));
}

#[test]
fn queries_are_idempotent() {
    let g = weighted(
        true,
        &[("A", "B", 2), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)],
    );

    assert_eq!(g.shortest_path("A", "D"), g.shortest_path("A", "D"));
    assert_eq!(g.topological_order(), g.topological_order());
    assert_eq!(g.bfs("A"), g.bfs("A"));
    assert_eq!(g.dfs("A"), g.dfs("A"));
    assert_eq!(g.has_cycle(), g.has_cycle());
}
