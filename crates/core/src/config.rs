//! Workspace settings consumed by the task engine: active project file,
//! scenario variables and user-defined task configurations.

use serde::{Deserialize, Serialize};

use crate::types::TaskDefinition;

/// A named build-time configuration value passed to the toolchain as
/// `-X<name>=<value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioVariable {
    pub name: String,
    pub value: String,
}

/// A user-defined task configuration: a label plus the definition it pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTask {
    pub label: String,
    #[serde(flatten)]
    pub definition: TaskDefinition,
}

/// Workspace configuration. Scenario variables are kept as an ordered list;
/// generated `-X` options follow that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Settings {
    /// Active project file; when unset the project model is queried.
    pub project_file: Option<String>,
    pub scenario_variables: Vec<ScenarioVariable>,
    /// Persisted user task configurations.
    pub tasks: Vec<UserTask>,
}

impl Settings {
    /// One `-X<name>=<value>` option per scenario variable, in configuration
    /// order.
    pub fn scenario_args(&self) -> Vec<String> {
        self.scenario_variables
            .iter()
            .map(|var| format!("-X{}={}", var.name, var.value))
            .collect()
    }
}
