use serde::{Deserialize, Serialize};

use super::TaskKind;
use crate::error::{Error, Result};

/// A declarative task definition, either synthesized by the task provider or
/// read from user configuration. Compared structurally for identity matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub kind: TaskKind,
    /// Project file override; when absent the active project is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
    /// Static arguments appended after the generated ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Relative source path of the main program (`buildMain`/`runMain`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// Arguments passed to the main executable (`runMain`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub main_args: Vec<String>,
    /// Label of the build task to sequence (`buildAndRunMain` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_task: Option<String>,
    /// Label of the run task to sequence (`buildAndRunMain` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_task: Option<String>,
}

impl TaskDefinition {
    pub fn new(kind: TaskKind) -> Self {
        Self {
            kind,
            project_file: None,
            args: Vec::new(),
            main: None,
            main_args: Vec::new(),
            build_task: None,
            run_task: None,
        }
    }

    pub fn with_project_file(mut self, project: impl Into<String>) -> Self {
        self.project_file = Some(project.into());
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_main(mut self, main: impl Into<String>) -> Self {
        self.main = Some(main.into());
        self
    }

    pub fn with_main_args(mut self, args: Vec<String>) -> Self {
        self.main_args = args;
        self
    }

    pub fn with_sequence(
        mut self,
        build_task: impl Into<String>,
        run_task: impl Into<String>,
    ) -> Self {
        self.build_task = Some(build_task.into());
        self.run_task = Some(run_task.into());
        self
    }

    /// The main source path, required for `buildMain`/`runMain` definitions.
    pub fn required_main(&self) -> Result<&str> {
        self.main.as_deref().ok_or_else(|| {
            Error::InvalidDefinition(format!(
                "a {:?} task definition must specify a main",
                self.kind
            ))
        })
    }

    /// The build/run task labels, required for `buildAndRunMain` definitions.
    pub fn required_sequence(&self) -> Result<(&str, &str)> {
        match (self.build_task.as_deref(), self.run_task.as_deref()) {
            (Some(build), Some(run)) => Ok((build, run)),
            _ => Err(Error::InvalidDefinition(
                "a buildAndRunMain task definition must specify buildTask and runTask".into(),
            )),
        }
    }
}
