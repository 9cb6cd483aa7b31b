//! Enumerates every simple path from each source vertex (in-degree zero) to
//! each sink vertex (out-degree zero) of a directed graph given as a dense
//! adjacency matrix.
//!
//! ```
//! use path_enumeration::{enumerate_all_paths, AdjacencyGraph};
//!
//! // 0 -> 1 -> 3, 0 -> 2 -> 3
//! let graph = AdjacencyGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let paths = enumerate_all_paths(&graph);
//! assert_eq!(paths[0].vertices(), &[0, 1, 3]);
//! assert_eq!(paths[1].vertices(), &[0, 2, 3]);
//! ```

pub mod app;
pub mod graph;
pub mod graph_loader;
pub mod path;

pub use graph::{AdjacencyGraph, GraphError, VertexId};
pub use graph_loader::{load_graph_from_file, parse_graph, LoadError};
pub use path::{enumerate_all_paths, EnumerationConfig, Path, PathEnumerator, PathError};
