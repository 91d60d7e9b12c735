use std::path::Path;

use tracing::debug;

/// Alire `exec` wrapper tokens when the workspace is an Alire crate and the
/// `alr` executable is on PATH; empty otherwise.
pub fn command_prefix(workspace_root: &Path) -> Vec<String> {
    if !workspace_root.join("alire.toml").exists() {
        return Vec::new();
    }
    match which::which("alr") {
        Ok(path) => {
            debug!("alire workspace detected, wrapping commands with {}", path.display());
            vec!["alr".to_string(), "exec".to_string(), "--".to_string()]
        }
        Err(_) => Vec::new(),
    }
}
