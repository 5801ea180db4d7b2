//! Graph description files.
//!
//! A graph file lists edges (and optionally isolated vertices) in TOML, or
//! JSON when the file name ends in `.json`:
//!
//! ```toml
//! directed = true
//! vertices = ["E"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 3
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{DEFAULT_WEIGHT, Graph, Weight};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    /// Vertices inserted before any edge, typically isolated ones.
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

const fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// On-disk encodings a graph file can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
}

impl GraphFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl GraphFile {
    /// Parse a graph description from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid for `format`.
    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        match format {
            GraphFormat::Toml => toml::from_str(content).context("invalid TOML graph description"),
            GraphFormat::Json => {
                serde_json::from_str(content).context("invalid JSON graph description")
            }
        }
    }

    /// Build the in-memory graph: declared vertices first, then edges in
    /// file order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeWeight`] for the first edge with a
    /// negative weight.
    pub fn build(&self) -> Result<Graph<String>, GraphError> {
        let mut graph = Graph::new(self.directed);
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight)?;
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed = graph.is_directed(),
            "graph built"
        );
        Ok(graph)
    }
}

/// Read and parse the graph file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_graph_file(path: &Path) -> Result<GraphFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    GraphFile::parse(&content, GraphFormat::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CITIES: &str = r#"
[[edges]]
from = "NYC"
to = "Boston"
weight = 215

[[edges]]
from = "NYC"
to = "Philly"
weight = 100

[[edges]]
from = "Boston"
to = "DC"
weight = 300

[[edges]]
from = "Philly"
to = "DC"
weight = 140
"#;

    #[test]
    fn toml_defaults_to_undirected() {
        let file = GraphFile::parse(CITIES, GraphFormat::Toml).expect("valid TOML");
        assert!(!file.directed);
        assert_eq!(file.edges.len(), 4);

        let graph = file.build().expect("weights are non-negative");
        let route = graph.shortest_path("NYC", "DC").expect("reachable");
        assert_eq!(route.distance, 240);
    }

    #[test]
    fn missing_weight_defaults_to_one() {
        let file = GraphFile::parse(
            "directed = true\n[[edges]]\nfrom = \"A\"\nto = \"B\"\n",
            GraphFormat::Toml,
        )
        .expect("valid TOML");
        assert_eq!(file.edges[0].weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn declared_vertices_come_first() {
        let file = GraphFile::parse(
            "vertices = [\"E\"]\n[[edges]]\nfrom = \"A\"\nto = \"B\"\n",
            GraphFormat::Toml,
        )
        .expect("valid TOML");
        let graph = file.build().expect("weights are non-negative");
        let order: Vec<&String> = graph.vertices().collect();
        assert_eq!(order, vec!["E", "A", "B"]);
    }

    #[test]
    fn json_is_accepted() {
        let file = GraphFile::parse(
            r#"{"directed": true, "edges": [{"from": "A", "to": "B", "weight": 2}]}"#,
            GraphFormat::Json,
        )
        .expect("valid JSON");
        assert!(file.directed);
        assert_eq!(file.edges[0].weight, 2);
    }

    #[test]
    fn negative_weight_fails_build() {
        let file = GraphFile::parse(
            "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -3\n",
            GraphFormat::Toml,
        )
        .expect("syntax is valid");
        let err = file.build().expect_err("negative weight must be rejected");
        assert!(matches!(err, GraphError::NegativeWeight { weight: -3, .. }));
    }

    #[test]
    fn format_from_extension() {
        for (name, format) in [
            ("g.json", GraphFormat::Json),
            ("g.JSON", GraphFormat::Json),
            ("g.toml", GraphFormat::Toml),
            ("graph", GraphFormat::Toml),
        ] {
            assert_eq!(GraphFormat::from_path(Path::new(name)), format, "{name}");
        }
    }

    #[test]
    fn load_reports_path_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let err = load_graph_file(&path).expect_err("file does not exist");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        file.write_all(CITIES.as_bytes()).expect("write");

        let parsed = load_graph_file(file.path()).expect("loads");
        assert_eq!(parsed.edges[0].from, "NYC");
    }

    #[test]
    fn parse_error_mentions_path() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        file.write_all(b"edges = 5").expect("write");

        let err = load_graph_file(file.path()).expect_err("wrong shape");
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
