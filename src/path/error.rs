use crate::graph::GraphError;
use thiserror::Error;

// Error type for path enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The graph holds more simple source-to-sink paths than the configured ceiling.
    #[error("Path limit of {limit} exceeded; the graph holds more simple paths than allowed")]
    PathLimitExceeded { limit: usize },

    /// A caller-supplied endpoint is not a vertex of the graph.
    #[error("Invalid search endpoint: {0}")]
    Graph(#[from] GraphError),
}
