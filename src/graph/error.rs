use super::VertexId;
use thiserror::Error;

// Error type for adjacency-matrix construction and checked queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index outside `0..vertex_count` was used.
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// The number of matrix cells does not match `vertex_count * vertex_count`.
    #[error("Adjacency matrix for {vertex_count} vertices needs {expected} cells, got {actual}")]
    DimensionMismatch {
        vertex_count: usize,
        expected: usize,
        actual: usize,
    },

    /// A matrix row does not have one cell per vertex.
    #[error("Row {row} of the adjacency matrix has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
