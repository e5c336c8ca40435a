pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod parse;
pub mod routes;
pub mod transform;

use std::path::PathBuf;

/// A generated `.http` file with its destination and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Directory key in the index (`.` for the source root).
    pub directory: String,
    pub path: PathBuf,
    pub content: String,
    pub operation_count: usize,
}
