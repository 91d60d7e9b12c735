use std::path::PathBuf;

use crate::error::Result;
use crate::types::MainProgram;

/// A project source directory, as reported by the project model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    pub name: String,
    pub path: PathBuf,
}

/// The external project model (the language server in the original
/// integration). Results are recomputed on demand, never cached here.
pub trait ProjectModel {
    /// Path of the active project file, relative to the workspace root.
    fn project_file(&self) -> Result<String>;

    /// The mains designated by the project, with derived executable paths.
    fn mains(&self) -> Result<Vec<MainProgram>>;

    /// All source directories of the project closure.
    fn source_dirs(&self) -> Result<Vec<SourceDir>>;
}
