// error module
mod error;
// adjacency module
mod adjacency;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use adjacency::AdjacencyGraph;
pub use error::GraphError;

/// Identifies a vertex by its row/column index in the adjacency matrix.
pub type VertexId = usize;
