use thiserror::Error;

use crate::graph::GraphError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph loading operations.
/// Every variant names the file (or other source) the text came from.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// The source holds no tokens at all.
    #[error("'{0}' is empty; expected a vertex count followed by the adjacency matrix")]
    MissingDimension(String),

    /// The first token is not a usable vertex count.
    #[error("'{source_name}': invalid vertex count '{token}'")]
    InvalidDimension { source_name: String, token: String },

    /// A matrix token is not boolean-parseable.
    #[error("'{source_name}': invalid matrix entry '{token}' at row {row}, column {column}")]
    InvalidEntry {
        source_name: String,
        row: usize,
        column: usize,
        token: String,
    },

    /// The matrix ends before `n * n` entries were read.
    #[error("'{source_name}': expected {expected} matrix entries, found only {found}")]
    TooFewEntries {
        source_name: String,
        expected: usize,
        found: usize,
    },

    /// Tokens remain after the `n * n` matrix entries.
    #[error("'{source_name}': expected {expected} matrix entries, found {found}")]
    TooManyEntries {
        source_name: String,
        expected: usize,
        found: usize,
    },

    /// The parsed cells were rejected by the graph.
    #[error("'{0}': {1}")]
    Graph(String, GraphError),
}
