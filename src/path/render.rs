use std::io::Write;

use super::types::Path;
use crate::graph::AdjacencyGraph;

/// Writes a header line followed by one line per path, then a blank line.
///
/// Each path is printed as its space-separated vertex indices.
pub fn write_paths_to_writer(
    header: &str,
    paths: &[Path],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "{}", header)?;
    for path in paths {
        writeln!(writer, "{}", path)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Writes the adjacency matrix as rows of `0`/`1` separated by spaces.
pub fn write_matrix_to_writer(
    graph: &AdjacencyGraph,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for row in graph.rows() {
        let line = row
            .iter()
            .map(|&cell| if cell { "1" } else { "0" })
            .collect::<Vec<&str>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
