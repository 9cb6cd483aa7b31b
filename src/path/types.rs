use std::fmt;

use crate::graph::VertexId;

/// One simple directed path, stored as its vertices in traversal order.
///
/// A `Path` is a snapshot copied out of the search buffer; it never aliases
/// traversal state. Paths are never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<VertexId>);

impl Path {
    pub(crate) fn from_buffer(buffer: &[VertexId]) -> Self {
        debug_assert!(!buffer.is_empty(), "a path holds at least its start vertex");
        Self(buffer.to_vec())
    }

    /// Returns the vertices in traversal order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    pub fn start(&self) -> VertexId {
        self.0[0]
    }

    pub fn end(&self) -> VertexId {
        self.0[self.0.len() - 1]
    }

    /// Number of vertices on the path (edges + 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.0
    }
}

/// Formats as space-separated vertex indices, e.g. `0 1 3`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.0.iter();
        if let Some(first) = vertices.next() {
            write!(f, "{first}")?;
            for vertex in vertices {
                write!(f, " {vertex}")?;
            }
        }
        Ok(())
    }
}

impl PartialEq<[VertexId]> for Path {
    fn eq(&self, other: &[VertexId]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<VertexId>> for Path {
    fn eq(&self, other: &Vec<VertexId>) -> bool {
        &self.0 == other
    }
}

/// Library-side enumeration options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Upper bound on the number of paths collected for one graph.
    /// `None` means unbounded.
    pub max_paths: Option<usize>,
}

impl EnumerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of collected paths.
    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }
}
