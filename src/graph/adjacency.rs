// ──────────────────────────────────────────────────────────────────────────────
// AdjacencyGraph – a dense, immutable directed graph.
// Vertices are the indices 0..n-1. Connectivity is stored row-major in a
// single contiguous buffer of n * n cells, cell (a, b) meaning "edge a -> b".
// The graph is populated once at construction and is read-only afterwards.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::VecDeque;

use super::error::GraphError;
use super::VertexId;

/// A directed graph backed by a dense boolean adjacency matrix.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `edge` | O(1) |
/// | `successors` | O(n) |
/// | `source_vertices` / `sink_vertices` | O(n²) |
/// | `has_cycle` | O(n²) |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    vertex_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![false; vertex_count * vertex_count],
        }
    }

    /// Creates a graph from a row-major cell buffer.
    ///
    /// # Errors
    /// Returns `GraphError::DimensionMismatch` unless `cells.len()` is exactly
    /// `vertex_count * vertex_count`.
    pub fn from_flat(vertex_count: usize, cells: Vec<bool>) -> Result<Self, GraphError> {
        let expected = vertex_count
            .checked_mul(vertex_count)
            .unwrap_or(usize::MAX);
        if cells.len() != expected {
            return Err(GraphError::DimensionMismatch {
                vertex_count,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            vertex_count,
            cells,
        })
    }

    /// Creates a graph from matrix rows. Every row must have one cell per row.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GraphError> {
        let vertex_count = rows.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != vertex_count)
        {
            return Err(GraphError::RaggedRow {
                row,
                expected: vertex_count,
                actual: cells.len(),
            });
        }
        Self::from_flat(vertex_count, rows.into_iter().flatten().collect())
    }

    /// Creates a graph from an edge list.
    ///
    /// # Errors
    /// Returns `GraphError::VertexOutOfRange` if an endpoint is not below `vertex_count`.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::empty(vertex_count);
        for &(from, to) in edges {
            let index = graph.checked_index(from, to)?;
            graph.cells[index] = true;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns the number of set cells, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns whether the directed edge `from -> to` exists.
    ///
    /// # Panics
    /// Panics if either index is not below `vertex_count()`.
    pub fn edge(&self, from: VertexId, to: VertexId) -> bool {
        match self.checked_edge(from, to) {
            Ok(present) => present,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`edge`](Self::edge).
    pub fn checked_edge(&self, from: VertexId, to: VertexId) -> Result<bool, GraphError> {
        self.checked_index(from, to).map(|index| self.cells[index])
    }

    /// Returns every vertex with in-degree zero, in increasing order.
    pub fn source_vertices(&self) -> Vec<VertexId> {
        (0..self.vertex_count)
            .filter(|&v| (0..self.vertex_count).all(|j| !self.cell(j, v)))
            .collect()
    }

    /// Returns every vertex with out-degree zero, in increasing order.
    pub fn sink_vertices(&self) -> Vec<VertexId> {
        (0..self.vertex_count)
            .filter(|&v| self.row(v).iter().all(|&cell| !cell))
            .collect()
    }

    /// Returns the direct successors of `vertex`, in increasing order.
    ///
    /// # Panics
    /// Panics if `vertex` is not below `vertex_count()`.
    pub fn successors(&self, vertex: VertexId) -> Vec<VertexId> {
        match self.checked_successors(vertex) {
            Ok(successors) => successors,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`successors`](Self::successors).
    pub fn checked_successors(&self, vertex: VertexId) -> Result<Vec<VertexId>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.successors_iter(vertex).collect())
    }

    /// Returns the number of incoming edges of `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok((0..self.vertex_count)
            .filter(|&j| self.cell(j, vertex))
            .count())
    }

    /// Returns the number of outgoing edges of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.successors_iter(vertex).count())
    }

    /// Iterates over the matrix rows, row `i` holding the edges leaving vertex `i`.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics; an empty graph has no cells to chunk anyway.
        self.cells.chunks(self.vertex_count.max(1))
    }

    /// Returns `true` if the graph contains a directed cycle (self-loops count).
    ///
    /// Uses Kahn's algorithm: any vertex never reaching in-degree zero lies on
    /// or behind a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut in_degrees: Vec<usize> = (0..self.vertex_count)
            .map(|v| (0..self.vertex_count).filter(|&j| self.cell(j, v)).count())
            .collect();
        let mut ready: VecDeque<VertexId> = in_degrees
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(v, _)| v)
            .collect();

        let mut removed = 0;
        while let Some(v) = ready.pop_front() {
            removed += 1;
            for w in self.successors_iter(v) {
                in_degrees[w] -= 1;
                if in_degrees[w] == 0 {
                    ready.push_back(w);
                }
            }
        }
        removed < self.vertex_count
    }

    pub(crate) fn successors_iter(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(|(j, _)| j)
    }

    // Callers guarantee both indices are in range.
    fn cell(&self, from: VertexId, to: VertexId) -> bool {
        self.cells[from * self.vertex_count + to]
    }

    fn row(&self, vertex: VertexId) -> &[bool] {
        let start = vertex * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn checked_index(&self, from: VertexId, to: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(from * self.vertex_count + to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AdjacencyGraph {
        // 0 -> 1 -> 3
        // 0 -> 2 -> 3
        AdjacencyGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn test_empty_graph_has_no_vertices() {
        let graph = AdjacencyGraph::empty(0);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.source_vertices().is_empty());
        assert!(graph.sink_vertices().is_empty());
        assert_eq!(graph.rows().count(), 0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_edge_lookup_is_directed() {
        let graph = diamond();
        assert!(graph.edge(0, 1));
        assert!(!graph.edge(1, 0));
        assert!(!graph.edge(1, 2));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_sources_and_sinks() {
        let graph = diamond();
        assert_eq!(graph.source_vertices(), vec![0]);
        assert_eq!(graph.sink_vertices(), vec![3]);
    }

    #[test]
    fn test_isolated_vertices_are_sources_and_sinks() {
        let graph = AdjacencyGraph::empty(2);
        assert_eq!(graph.source_vertices(), vec![0, 1]);
        assert_eq!(graph.sink_vertices(), vec![0, 1]);
    }

    #[test]
    fn test_self_loop_is_neither_source_nor_sink() {
        let graph = AdjacencyGraph::from_edges(1, &[(0, 0)]).unwrap();
        assert!(graph.source_vertices().is_empty());
        assert!(graph.sink_vertices().is_empty());
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_successors_in_increasing_order() {
        let graph = AdjacencyGraph::from_edges(4, &[(0, 3), (0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.successors(0), vec![1, 2, 3]);
        assert!(graph.successors(3).is_empty());
        assert_eq!(graph.out_degree(0), Ok(3));
        assert_eq!(graph.in_degree(3), Ok(1));
    }

    #[test]
    fn test_checked_queries_reject_out_of_range() {
        let graph = diamond();
        assert_eq!(
            graph.checked_edge(0, 4),
            Err(GraphError::VertexOutOfRange {
                vertex: 4,
                vertex_count: 4
            })
        );
        assert!(graph.checked_successors(7).is_err());
        assert!(graph.in_degree(4).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_edge_panics_out_of_range() {
        diamond().edge(4, 0);
    }

    #[test]
    fn test_from_flat_rejects_wrong_cell_count() {
        let err = AdjacencyGraph::from_flat(2, vec![false; 3]).unwrap_err();
        assert_eq!(
            err,
            GraphError::DimensionMismatch {
                vertex_count: 2,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rows_matches_from_edges() {
        let rows = vec![
            vec![false, true, true, false],
            vec![false, false, false, true],
            vec![false, false, false, true],
            vec![false, false, false, false],
        ];
        assert_eq!(AdjacencyGraph::from_rows(rows).unwrap(), diamond());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![false, true], vec![false]];
        assert!(matches!(
            AdjacencyGraph::from_rows(rows),
            Err(GraphError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        assert!(AdjacencyGraph::from_edges(2, &[(0, 2)]).is_err());
    }

    #[test]
    fn test_cycle_detection() {
        assert!(!diamond().has_cycle());
        let cyclic = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2), (2, 1)]).unwrap();
        assert!(cyclic.has_cycle());
    }

    #[test]
    fn test_rows_follow_matrix_layout() {
        let graph = diamond();
        let rows: Vec<&[bool]> = graph.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], &[false, false, false, true]);
    }
}
