//! Handles the work done for one graph file.
//!
//! This covers validating and loading the adjacency matrix, logging its
//! structure, enumerating its source-to-sink paths and rendering the result.

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::AdjacencyGraph;
use crate::graph_loader;
use crate::path::{self, EnumerationConfig, Path, PathEnumerator};
use std::io::Write;
use std::path::Path as FsPath;

/// Per-graph options taken from the command line.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphOptions {
    pub enumeration: EnumerationConfig,
    pub show_matrix: bool,
    pub quiet_mode: bool,
}

/// Validates and loads one adjacency-matrix file.
pub fn load_graph(graph_file_path: &FsPath, quiet_mode: bool) -> Result<AdjacencyGraph, AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Loading adjacency matrix...");
    file_handler::validate_graph_file(graph_file_path, quiet_mode)?;
    let graph = graph_loader::load_graph_from_file(graph_file_path)?;
    verbose_println!(
        quiet_mode,
        "   => Loaded {} vertices, {} edges.",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Enumerates every source-to-sink path of `graph`, logging its structure first.
pub fn enumerate_graph(
    graph: &AdjacencyGraph,
    config: EnumerationConfig,
    quiet_mode: bool,
) -> Result<Vec<Path>, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Analyzing graph structure...");
    log_structure_summary(graph, quiet_mode);

    verbose_println!(quiet_mode, "[STEP 3] Enumerating paths...");
    let paths = PathEnumerator::with_config(graph, config)
        .enumerate_all_paths()
        .map_err(|e| {
            verbose_eprintln!(quiet_mode, "   => Enumeration aborted: {}", e);
            e
        })?;
    verbose_println!(quiet_mode, "   => Found {} paths.", paths.len());
    Ok(paths)
}

/// Loads, enumerates and renders one graph file.
///
/// Nothing is written to `out` unless the whole graph succeeds, so a failed
/// file never leaves a partial block in the results.
///
/// # Returns
/// The number of paths written.
pub fn process_graph_file(
    graph_index: usize,
    graph_file_path: &FsPath,
    options: GraphOptions,
    out: &mut dyn Write,
) -> Result<usize, AppError> {
    let quiet_mode = options.quiet_mode;
    let graph = load_graph(graph_file_path, quiet_mode)?;
    let paths = enumerate_graph(&graph, options.enumeration, quiet_mode)?;

    if options.show_matrix {
        writeln!(
            out,
            "Graph {} ({}) adjacency matrix...",
            graph_index,
            graph_file_path.display()
        )?;
        path::write_matrix_to_writer(&graph, out)?;
        writeln!(out)?;
    }
    let header = format!(
        "Graph {} ({}) paths...",
        graph_index,
        graph_file_path.display()
    );
    path::write_paths_to_writer(&header, &paths, out)?;
    Ok(paths.len())
}

/// Logs vertex and edge counts, sources, sinks and a cycle warning.
fn log_structure_summary(graph: &AdjacencyGraph, quiet_mode: bool) {
    if quiet_mode {
        return;
    }

    let sources = graph.source_vertices();
    let sinks = graph.sink_vertices();
    verbose_println!(quiet_mode, "   Sources: {:?}", sources);
    verbose_println!(quiet_mode, "   Sinks:   {:?}", sinks);
    if sources.is_empty() || sinks.is_empty() {
        verbose_println!(
            quiet_mode,
            "   => No source or no sink vertex; no paths can exist."
        );
    }
    if graph.has_cycle() {
        verbose_eprintln!(
            quiet_mode,
            "   [WARNING] Graph contains a cycle; only simple paths are reported."
        );
    }
}
