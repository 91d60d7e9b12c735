use serde::Serialize;

use super::{TaskDefinition, TaskFamily};
use crate::command::CommandLine;

/// Problem matcher assigned to diagnostic-producing tasks.
pub const DEFAULT_PROBLEM_MATCHER: &str = "$ada";

/// Host task-group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskGroup {
    Build,
    Clean,
}

/// Where a task came from. Workspace tasks are defined explicitly by the
/// user; provider tasks are synthesized from the project model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Workspace,
    Provider(TaskFamily),
}

impl TaskSource {
    /// The source label the host displays and the last-used marker stores.
    pub fn label(&self) -> &'static str {
        match self {
            TaskSource::Workspace => "Workspace",
            TaskSource::Provider(family) => family.as_str(),
        }
    }
}

/// How a resolved task executes: a direct quoted shell command, or the
/// build-then-run sequence referencing two other tasks by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Execution {
    Shell(CommandLine),
    #[serde(rename_all = "camelCase")]
    Sequence { build_task: String, run_task: String },
}

/// A fully resolved, executable task. Created on demand by the resolver and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTask {
    pub definition: TaskDefinition,
    pub family: TaskFamily,
    pub name: String,
    pub source: TaskSource,
    pub execution: Execution,
    pub group: Option<TaskGroup>,
    pub problem_matcher: Option<&'static str>,
}

impl ResolvedTask {
    pub fn is_from_workspace(&self) -> bool {
        self.source == TaskSource::Workspace
    }

    /// The label tasks are referenced by. Provider tasks are prefixed with
    /// their family (`ada: Build main - foo.adb`); workspace tasks already
    /// carry the convention in their name.
    pub fn conventional_label(&self) -> String {
        match self.source {
            TaskSource::Workspace => self.name.clone(),
            TaskSource::Provider(family) => format!("{}: {}", family, self.name),
        }
    }
}
