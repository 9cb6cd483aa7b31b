use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph loading error: {0}")]
    Load(#[from] crate::graph_loader::LoadError),
    #[error("Path enumeration error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("{failed} of {total} graph file(s) failed")]
    BatchFailed { failed: usize, total: usize },
}
