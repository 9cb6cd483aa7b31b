use std::ops::ControlFlow;

use super::error::PathError;
use super::types::{EnumerationConfig, Path};
use crate::graph::{AdjacencyGraph, VertexId};

/// Search state for a single (start, end) pair.
///
/// `visited` enforces simple paths; `buffer` holds the partial path in
/// visitation order. Both are restored on every return from `search`.
struct Traversal {
    visited: Vec<bool>,
    buffer: Vec<VertexId>,
}

impl Traversal {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            buffer: Vec::with_capacity(vertex_count),
        }
    }
}

/// `PathEnumerator` finds every simple path from each source vertex to each
/// sink vertex of an `AdjacencyGraph`.
///
/// Output order is deterministic: sources outer, sinks inner (both ascending),
/// then depth-first discovery order with successors taken in ascending order.
///
/// The visited set also guarantees termination on cyclic input, since a
/// vertex already on the current path is never re-entered.
#[derive(Clone, Copy, Debug)]
pub struct PathEnumerator<'g> {
    graph: &'g AdjacencyGraph,
    config: EnumerationConfig,
}

impl<'g> PathEnumerator<'g> {
    pub fn new(graph: &'g AdjacencyGraph) -> Self {
        Self::with_config(graph, EnumerationConfig::default())
    }

    pub fn with_config(graph: &'g AdjacencyGraph, config: EnumerationConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g AdjacencyGraph {
        self.graph
    }

    pub fn config(&self) -> EnumerationConfig {
        self.config
    }

    /// Returns every simple path between every (source, sink) pair.
    ///
    /// # Errors
    /// Returns `PathError::PathLimitExceeded` if more than `max_paths` paths exist.
    pub fn enumerate_all_paths(&self) -> Result<Vec<Path>, PathError> {
        let sources = self.graph.source_vertices();
        let sinks = self.graph.sink_vertices();

        let mut all_paths = Vec::new();
        for &start in &sources {
            for &end in &sinks {
                self.collect_pair(start, end, &mut all_paths)?;
            }
        }
        Ok(all_paths)
    }

    /// Same result as [`enumerate_all_paths`](Self::enumerate_all_paths), with
    /// the (source, sink) pairs searched on the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn enumerate_all_paths_parallel(&self) -> Result<Vec<Path>, PathError> {
        use rayon::prelude::*;

        let sources = self.graph.source_vertices();
        let sinks = self.graph.sink_vertices();
        let pairs: Vec<(VertexId, VertexId)> = sources
            .iter()
            .flat_map(|&start| sinks.iter().map(move |&end| (start, end)))
            .collect();

        // Indexed collect keeps pair order, so output matches the sequential search.
        let per_pair: Vec<Vec<Path>> = pairs
            .par_iter()
            .map(|&(start, end)| {
                let mut paths = Vec::new();
                self.collect_pair(start, end, &mut paths).map(|()| paths)
            })
            .collect::<Result<_, _>>()?;

        let total: usize = per_pair.iter().map(Vec::len).sum();
        if let Some(limit) = self.config.max_paths {
            if total > limit {
                return Err(PathError::PathLimitExceeded { limit });
            }
        }
        Ok(per_pair.into_iter().flatten().collect())
    }

    /// Returns every simple path from `start` to `end`, whether or not they are
    /// a source and a sink.
    ///
    /// # Errors
    /// Returns `PathError::Graph` if either endpoint is out of range.
    pub fn paths_between(&self, start: VertexId, end: VertexId) -> Result<Vec<Path>, PathError> {
        self.graph.checked_edge(start, end)?;
        let mut paths = Vec::new();
        self.collect_pair(start, end, &mut paths)?;
        Ok(paths)
    }

    /// Runs one pair's search with fresh traversal state, appending to `out`.
    fn collect_pair(
        &self,
        start: VertexId,
        end: VertexId,
        out: &mut Vec<Path>,
    ) -> Result<(), PathError> {
        let mut traversal = Traversal::new(self.graph.vertex_count());
        match self.search(start, end, &mut traversal, out) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(limit) => Err(PathError::PathLimitExceeded { limit }),
        }
    }

    /// Depth-first search with explicit backtracking.
    ///
    /// Precondition: `current` is not visited. A branch ends at the first
    /// visit to `end`, even if `end` has outgoing edges.
    fn search(
        &self,
        current: VertexId,
        end: VertexId,
        traversal: &mut Traversal,
        out: &mut Vec<Path>,
    ) -> ControlFlow<usize> {
        traversal.visited[current] = true;
        traversal.buffer.push(current);

        let flow = if current == end {
            self.emit(&traversal.buffer, out)
        } else {
            let mut flow = ControlFlow::Continue(());
            for next in self.graph.successors_iter(current) {
                if traversal.visited[next] {
                    continue;
                }
                flow = self.search(next, end, traversal, out);
                if flow.is_break() {
                    break;
                }
            }
            flow
        };

        // Backtrack so sibling branches see the path as it was before descending.
        traversal.buffer.pop();
        traversal.visited[current] = false;
        flow
    }

    fn emit(&self, buffer: &[VertexId], out: &mut Vec<Path>) -> ControlFlow<usize> {
        if let Some(limit) = self.config.max_paths {
            if out.len() >= limit {
                return ControlFlow::Break(limit);
            }
        }
        out.push(Path::from_buffer(buffer));
        ControlFlow::Continue(())
    }
}

/// Enumerates every simple source-to-sink path of `graph` with no path ceiling.
pub fn enumerate_all_paths(graph: &AdjacencyGraph) -> Vec<Path> {
    match PathEnumerator::new(graph).enumerate_all_paths() {
        Ok(paths) => paths,
        Err(e) => unreachable!("unbounded enumeration cannot fail: {e}"),
    }
}
