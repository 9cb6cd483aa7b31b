use std::fs;
use std::path::Path;

use super::error::LoadError;
use crate::graph::AdjacencyGraph;

//─────────────────────────────────────────────────────────────────────────────

/// Loads an adjacency-matrix graph from a text file.
///
/// The file holds a vertex count `n` followed by `n * n` boolean tokens in
/// row-major order, all whitespace-delimited.
pub fn load_graph_from_file(file_path: &Path) -> Result<AdjacencyGraph, LoadError> {
    let source_name = file_path.display().to_string();
    let file_content =
        fs::read_to_string(file_path).map_err(|e| LoadError::ReadFile(source_name.clone(), e))?;
    parse_graph(&file_content, &source_name)
}

/// Parses the adjacency-matrix text format. `source_name` only labels errors.
pub fn parse_graph(content: &str, source_name: &str) -> Result<AdjacencyGraph, LoadError> {
    let mut tokens = content.split_whitespace();

    let dimension_token = tokens
        .next()
        .ok_or_else(|| LoadError::MissingDimension(source_name.into()))?;
    let invalid_dimension = || LoadError::InvalidDimension {
        source_name: source_name.into(),
        token: dimension_token.into(),
    };
    let vertex_count: usize = dimension_token.parse().map_err(|_| invalid_dimension())?;
    let expected = vertex_count
        .checked_mul(vertex_count)
        .ok_or_else(invalid_dimension)?;

    let mut cells = Vec::new();
    for (position, token) in tokens.by_ref().take(expected).enumerate() {
        let cell = parse_cell(token).ok_or_else(|| LoadError::InvalidEntry {
            source_name: source_name.into(),
            row: position / vertex_count,
            column: position % vertex_count,
            token: token.into(),
        })?;
        cells.push(cell);
    }

    if cells.len() < expected {
        return Err(LoadError::TooFewEntries {
            source_name: source_name.into(),
            expected,
            found: cells.len(),
        });
    }
    let extra = tokens.count();
    if extra > 0 {
        return Err(LoadError::TooManyEntries {
            source_name: source_name.into(),
            expected,
            found: expected + extra,
        });
    }

    AdjacencyGraph::from_flat(vertex_count, cells)
        .map_err(|e| LoadError::Graph(source_name.into(), e))
}

/// Accepts `0`/`1` and `true`/`false` in any case.
fn parse_cell(token: &str) -> Option<bool> {
    match token {
        "0" => Some(false),
        "1" => Some(true),
        _ if token.eq_ignore_ascii_case("false") => Some(false),
        _ if token.eq_ignore_ascii_case("true") => Some(true),
        _ => None,
    }
}
