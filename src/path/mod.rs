// error module
mod error;
// explorer module
mod explorer;
// render module
pub mod render;
// types module
mod types;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use explorer::{enumerate_all_paths, PathEnumerator};
pub use render::{write_matrix_to_writer, write_paths_to_writer};
pub use types::{EnumerationConfig, Path};
