// error module
mod error;
// loader module
mod loader;

pub use error::LoadError;
pub use loader::{load_graph_from_file, parse_graph};
