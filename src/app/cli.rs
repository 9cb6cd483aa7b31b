use clap::Parser;
use std::path::PathBuf;

use crate::path::EnumerationConfig;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Enumerates every simple source-to-sink path in adjacency-matrix graphs.", long_about = None)]
pub struct Cli {
    /// Adjacency-matrix files to process, in the order given
    #[clap(required = true)]
    pub graph_files: Vec<PathBuf>,

    /// Suppress verbose logging, only printing paths and errors.
    #[clap(short, long)]
    pub quiet: bool,

    /// Print each graph's adjacency matrix before its paths
    #[clap(long)]
    pub show_matrix: bool,

    /// Fail any graph holding more than N simple paths
    #[clap(long, value_name = "N")]
    pub max_paths: Option<usize>,

    /// Write results to this file instead of stdout
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose log destination (ignored with --quiet)
    #[clap(long, value_name = "FILE", default_value = "path-enumeration.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Library-side options derived from the command line.
    pub fn enumeration_config(&self) -> EnumerationConfig {
        EnumerationConfig {
            max_paths: self.max_paths,
        }
    }
}
