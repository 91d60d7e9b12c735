use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A project-designated executable entry point: the relative path of its
/// source file and the derived relative path of the produced executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainProgram {
    pub source: PathBuf,
    pub executable: PathBuf,
}

impl MainProgram {
    /// Derive the executable path from a main source path and the project's
    /// executable directory: the source stem placed under `exec_dir`.
    pub fn from_source(source: impl Into<PathBuf>, exec_dir: &Path) -> Self {
        let source = source.into();
        let stem = source.file_stem().unwrap_or(source.as_os_str());
        Self {
            executable: exec_dir.join(stem),
            source,
        }
    }

    pub fn source_rel_path(&self) -> String {
        path_to_string(&self.source)
    }

    pub fn exec_rel_path(&self) -> String {
        path_to_string(&self.executable)
    }

    /// Whether `path` designates this main, by relative source path or by
    /// bare file name.
    pub fn matches(&self, path: &str) -> bool {
        self.source_rel_path() == path
            || self.source.file_name().and_then(|n| n.to_str()) == Some(path)
    }
}

fn path_to_string(path: &Path) -> String {
    // Command lines use forward slashes on every platform.
    path.to_string_lossy().replace('\\', "/")
}
