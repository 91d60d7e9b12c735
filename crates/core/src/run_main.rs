//! "Run last" and "run/ask" flows over the build-and-run tasks, plus the
//! single-slot memory of the most recently run task.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::UserTask;
use crate::error::Result;
use crate::interfaces::{Interaction, PickEntry, PickOutcome, ProjectModel, TaskConfigStore, TaskMonitor};
use crate::types::{ResolvedTask, TaskFamily, TaskKind};

/// Marker for the most recently run task. A single process-wide slot,
/// overwritten on every run, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUsed {
    pub source: String,
    pub name: String,
}

impl LastUsed {
    pub fn of(task: &ResolvedTask) -> Self {
        Self {
            source: task.source.label().to_string(),
            name: task.name.clone(),
        }
    }

    pub fn matches(&self, task: &ResolvedTask) -> bool {
        self.source == task.source.label() && self.name == task.name
    }
}

/// The host services the run-main flows draw on.
pub struct RunMainServices<'a> {
    pub monitor: &'a dyn TaskMonitor,
    pub interaction: &'a dyn Interaction,
    pub store: &'a dyn TaskConfigStore,
    pub project_model: &'a dyn ProjectModel,
}

/// Re-run the task recorded in the last-used slot if it still exists;
/// otherwise fall back to the interactive chooser. Returns the exit status
/// of the executed task, or `None` when nothing ran.
pub fn run_main_last(
    services: &RunMainServices<'_>,
    last_used: &mut Option<LastUsed>,
    output: &mut dyn Write,
) -> Result<Option<i32>> {
    let tasks = build_and_run_tasks(services.monitor)?;

    if let Some(marker) = last_used.as_ref() {
        if let Some(task) = tasks.iter().find(|t| marker.matches(t)) {
            debug!(name = %task.name, "re-running last used task");
            let status = services.monitor.execute(task, output)?;
            return Ok(Some(status));
        }
        // The last task run no longer exists; ask again.
    }

    ask(services, last_used, tasks, output)
}

/// Present the build-and-run tasks, workspace-defined ones first, with the
/// last-used task marked. The user either runs the chosen task (updating
/// the slot) or materializes it into persistent configuration for editing.
pub fn run_main_ask(
    services: &RunMainServices<'_>,
    last_used: &mut Option<LastUsed>,
    output: &mut dyn Write,
) -> Result<Option<i32>> {
    let tasks = build_and_run_tasks(services.monitor)?;
    ask(services, last_used, tasks, output)
}

fn ask(
    services: &RunMainServices<'_>,
    last_used: &mut Option<LastUsed>,
    tasks: Vec<ResolvedTask>,
    output: &mut dyn Write,
) -> Result<Option<i32>> {
    if tasks.is_empty() {
        let project = services
            .project_model
            .project_file()
            .unwrap_or_else(|_| "<unknown>".to_string());
        services.interaction.show_warning(&format!(
            "There are no Mains defined in the workspace project {project}"
        ));
        return Ok(None);
    }

    // Workspace-configured tasks first, separated from the provider's.
    let mut ordered: Vec<&ResolvedTask> = tasks.iter().filter(|t| t.is_from_workspace()).collect();
    let workspace_count = ordered.len();
    ordered.extend(tasks.iter().filter(|t| !t.is_from_workspace()));

    let entries: Vec<PickEntry> = ordered
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let is_last_used = last_used
                .as_ref()
                .map(|marker| marker.matches(task))
                .unwrap_or(false);
            let label = if task.is_from_workspace() {
                format!("(From Workspace) {}", task.name)
            } else {
                task.conventional_label()
            };
            PickEntry {
                label: if is_last_used {
                    format!("* {label}")
                } else {
                    label
                },
                description: is_last_used.then(|| "last used".to_string()),
                separator_before: workspace_count > 0 && index == workspace_count,
            }
        })
        .collect();

    match services.interaction.pick_task(&entries)? {
        PickOutcome::Chosen(index) => {
            let task = ordered[index];
            *last_used = Some(LastUsed::of(task));
            let status = services.monitor.execute(task, output)?;
            Ok(Some(status))
        }
        PickOutcome::Configure(index) => {
            let task = ordered[index];
            let label = task.conventional_label();
            let already_defined = services
                .store
                .user_tasks()?
                .iter()
                .any(|user_task| user_task.label == label);
            if !already_defined {
                services.store.append_task(&UserTask {
                    label,
                    definition: task.definition.clone(),
                })?;
            }
            services.store.open_for_editing()?;
            Ok(None)
        }
        PickOutcome::Dismissed => Ok(None),
    }
}

/// All currently known `buildAndRunMain` tasks, both provider-synthesized
/// and user-defined.
pub fn build_and_run_tasks(monitor: &dyn TaskMonitor) -> Result<Vec<ResolvedTask>> {
    Ok(monitor
        .fetch_tasks(TaskFamily::Ada)?
        .into_iter()
        .filter(|task| task.definition.kind == TaskKind::BuildAndRunMain)
        .collect())
}
