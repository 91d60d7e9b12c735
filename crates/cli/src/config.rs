//! Workspace settings and per-workspace state persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gpr_runner_core::config::{Settings, UserTask};
use gpr_runner_core::run_main::LastUsed;

/// Workspace settings file, looked up from the current directory upwards.
pub const SETTINGS_FILE: &str = ".gpr-runner.toml";
/// Per-workspace state (last-used task, dismissed popups).
pub const STATE_FILE: &str = ".gpr-runner-state.json";

/// Walk up from `start` until a settings file is found.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(SETTINGS_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// The loaded workspace: its root directory and settings. The root is the
/// directory holding the settings file, or `start` when there is none.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
    pub settings: Settings,
    pub settings_path: Option<PathBuf>,
}

impl WorkspaceConfig {
    pub fn load(start: &Path) -> Result<Self> {
        match find_settings_file(start) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let settings: Settings = toml::from_str(&contents)
                    .with_context(|| format!("failed to parse {}", path.display()))?;
                debug!(path = %path.display(), "loaded workspace settings");
                let root = path.parent().unwrap_or(start).to_path_buf();
                Ok(Self {
                    root,
                    settings,
                    settings_path: Some(path),
                })
            }
            None => Ok(Self {
                root: start.to_path_buf(),
                settings: Settings::default(),
                settings_path: None,
            }),
        }
    }

    /// Where user tasks are persisted, creating the default location when
    /// no settings file exists yet.
    pub fn settings_path_or_default(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(|| self.root.join(SETTINGS_FILE))
    }

    /// Append a user task to the settings file.
    pub fn append_user_task(&self, task: &UserTask) -> Result<()> {
        let path = self.settings_path_or_default();
        let mut settings = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            Settings::default()
        };
        settings.tasks.push(task.clone());
        let rendered = toml::to_string_pretty(&settings)?;
        std::fs::write(&path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Persisted state: the last-used task marker and dismissed popups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub last_used: Option<LastUsed>,
    pub flags: HashMap<String, bool>,
}

/// File-backed state slot at the workspace root.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(STATE_FILE),
        }
    }

    pub fn load(&self) -> State {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, state: &State) -> Result<()> {
        let contents = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
