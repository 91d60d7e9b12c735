//! Wires the workspace configuration and the concrete services into the
//! core task engine.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use gpr_runner_core::command::CommandContext;
use gpr_runner_core::config::UserTask;
use gpr_runner_core::error::Error as CoreError;
use gpr_runner_core::interfaces::{EditorContext, TaskConfigStore};
use gpr_runner_core::provider::{CancellationToken, TaskProvider};
use gpr_runner_core::types::{ResolvedTask, TaskFamily, TaskSource};

use crate::config::{StateFile, WorkspaceConfig};
use crate::services::{AdaSymbolProvider, GprProjectModel, ProcessTaskMonitor, TerminalInteraction};

/// The assembled workspace: configuration, project model and host services.
pub struct Engine {
    pub workspace: WorkspaceConfig,
    pub state_file: StateFile,
    pub model: GprProjectModel,
    pub symbols: AdaSymbolProvider,
    pub editor: EditorContext,
    pub interaction: TerminalInteraction,
}

impl Engine {
    /// Load the workspace rooted at (or above) the current directory.
    pub fn bootstrap(editor: EditorContext) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let workspace = WorkspaceConfig::load(&cwd)?;
        let state_file = StateFile::new(&workspace.root);
        let model = GprProjectModel::discover(&workspace.root, &workspace.settings)?;
        Ok(Self {
            workspace,
            state_file,
            model,
            symbols: AdaSymbolProvider::new(),
            editor,
            interaction: TerminalInteraction::new(),
        })
    }

    pub(crate) fn context(&self) -> CommandContext<'_> {
        CommandContext {
            project_model: &self.model,
            symbols: &self.symbols,
            editor: &self.editor,
            settings: &self.workspace.settings,
            interaction: &self.interaction,
        }
    }

    /// Every task currently known: the user-configured ones first, then the
    /// synthesized ones of both families.
    pub fn enumerate_tasks(&self) -> Result<Vec<ResolvedTask>> {
        let token = CancellationToken::new();
        let mut tasks = Vec::new();

        for family in [TaskFamily::Ada, TaskFamily::Spark] {
            let provider = TaskProvider::new(family, self.context(), &self.workspace.root);

            for user_task in &self.workspace.settings.tasks {
                if user_task.definition.kind.family() != family {
                    continue;
                }
                tasks.push(provider.resolve_task(
                    &user_task.definition,
                    Some(&user_task.label),
                    TaskSource::Workspace,
                )?);
            }
            tasks.extend(provider.provide_tasks(&token)?);
        }

        debug!(count = tasks.len(), "enumerated workspace tasks");
        Ok(tasks)
    }

    /// A monitor serving the current task list.
    pub fn monitor(&self) -> Result<ProcessTaskMonitor<'_>> {
        Ok(ProcessTaskMonitor::new(
            self.enumerate_tasks()?,
            &self.interaction,
        ))
    }

    /// The persistent task configuration store of this workspace.
    pub fn config_store(&self) -> FileTaskConfigStore<'_> {
        FileTaskConfigStore {
            workspace: &self.workspace,
            state_file: &self.state_file,
        }
    }
}

/// Task configuration store backed by the settings and state files.
pub struct FileTaskConfigStore<'a> {
    workspace: &'a WorkspaceConfig,
    state_file: &'a StateFile,
}

fn config_err(err: anyhow::Error) -> CoreError {
    CoreError::ConfigError(err.to_string())
}

impl TaskConfigStore for FileTaskConfigStore<'_> {
    fn user_tasks(&self) -> gpr_runner_core::Result<Vec<UserTask>> {
        // Re-read so tasks appended during this run are visible.
        let fresh = WorkspaceConfig::load(&self.workspace.root).map_err(config_err)?;
        Ok(fresh.settings.tasks)
    }

    fn append_task(&self, task: &UserTask) -> gpr_runner_core::Result<()> {
        self.workspace.append_user_task(task).map_err(config_err)
    }

    fn open_for_editing(&self) -> gpr_runner_core::Result<()> {
        let path = self.workspace.settings_path_or_default();
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "Task configuration written to {}", path.display())?;
        Ok(())
    }

    fn flag(&self, key: &str) -> bool {
        self.state_file
            .load()
            .flags
            .get(key)
            .copied()
            .unwrap_or(false)
    }

    fn set_flag(&self, key: &str, value: bool) -> gpr_runner_core::Result<()> {
        let mut state = self.state_file.load();
        state.flags.insert(key.to_string(), value);
        self.state_file.save(&state).map_err(config_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpr_runner_core::types::TaskKind;

    fn workspace_with_project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("hello.gpr"),
            "project Hello is\n\
             \x20  for Source_Dirs use (\"src\");\n\
             \x20  for Object_Dir use \"obj\";\n\
             \x20  for Main use (\"main1.adb\");\n\
             end Hello;\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("src/main1.adb"), "").unwrap();
        dir
    }

    fn engine_at(root: &std::path::Path) -> Engine {
        let workspace = WorkspaceConfig::load(root).unwrap();
        let state_file = StateFile::new(&workspace.root);
        let model = GprProjectModel::discover(&workspace.root, &workspace.settings).unwrap();
        Engine {
            workspace,
            state_file,
            model,
            symbols: AdaSymbolProvider::new(),
            editor: EditorContext::default(),
            interaction: TerminalInteraction::new(),
        }
    }

    #[test]
    fn enumerates_both_families_plus_user_tasks() {
        let dir = workspace_with_project();
        std::fs::write(
            dir.path().join(".gpr-runner.toml"),
            "[[tasks]]\nlabel = \"ada: My build\"\nkind = \"buildProject\"\nargs = [\"-j4\"]\n",
        )
        .unwrap();
        let engine = engine_at(dir.path());

        let tasks = engine.enumerate_tasks().unwrap();
        // 1 user task + 6 ada (3 project kinds + triple for one main) + 9 spark.
        assert_eq!(tasks.len(), 16);
        let user = &tasks[0];
        assert!(user.is_from_workspace());
        assert_eq!(user.conventional_label(), "ada: My build");
        assert_eq!(user.definition.kind, TaskKind::BuildProject);
    }

    #[test]
    fn config_store_round_trips_flags() {
        let dir = workspace_with_project();
        let engine = engine_at(dir.path());
        let store = engine.config_store();

        assert!(!store.flag("someFlag"));
        store.set_flag("someFlag", true).unwrap();
        assert!(store.flag("someFlag"));
    }

    #[test]
    fn appended_tasks_are_visible_to_the_store() {
        let dir = workspace_with_project();
        let engine = engine_at(dir.path());
        let store = engine.config_store();

        assert!(store.user_tasks().unwrap().is_empty());
        store
            .append_task(&UserTask {
                label: "ada: Build current project".into(),
                definition: gpr_runner_core::types::TaskDefinition::new(TaskKind::BuildProject),
            })
            .unwrap();
        let tasks = store.user_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].label, "ada: Build current project");
    }
}
