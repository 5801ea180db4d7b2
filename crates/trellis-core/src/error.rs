use std::fmt;

use crate::graph::Weight;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge was given a weight below zero. Shortest-path search only
    /// holds for non-negative weights, so the edge is refused.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: Weight,
    },
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NegativeWeight { .. } => ErrorCode::NegativeWeight,
        }
    }
}

/// Machine-readable error codes for scripted callers of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    GraphFileMissing,
    GraphFileParse,
    NegativeWeight,
    VertexNotFound,
    CycleDetected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GraphFileMissing => "E1001",
            Self::GraphFileParse => "E1002",
            Self::NegativeWeight => "E2001",
            Self::VertexNotFound => "E2002",
            Self::CycleDetected => "E2003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::GraphFileMissing => "Graph file not found",
            Self::GraphFileParse => "Graph file parse error",
            Self::NegativeWeight => "Negative edge weight",
            Self::VertexNotFound => "Vertex not found",
            Self::CycleDetected => "Graph contains a cycle",
        }
    }

    /// Optional remediation hint for operators and scripts.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::GraphFileMissing => {
                Some("Pass an existing file with --graph, or create graph.toml here.")
            }
            Self::GraphFileParse => Some("Fix the syntax of the graph file and retry."),
            Self::NegativeWeight => Some("Use weights >= 0; shortest paths require them."),
            Self::VertexNotFound => Some("Run `trellis show` to list the known vertices."),
            Self::CycleDetected => Some("Remove one edge of the reported cycle to get a DAG."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
