use serde::{Deserialize, Serialize};
use std::fmt;

/// The two task families exposed to the host: plain Ada build/run tasks and
/// SPARK proof tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFamily {
    Ada,
    Spark,
}

impl TaskFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskFamily::Ada => "ada",
            TaskFamily::Spark => "spark",
        }
    }

    /// All task kinds belonging to this family, in catalog order.
    pub fn kinds(self) -> &'static [TaskKind] {
        match self {
            TaskFamily::Ada => &[
                TaskKind::BuildProject,
                TaskKind::CheckFile,
                TaskKind::CleanProject,
                TaskKind::BuildMain,
                TaskKind::RunMain,
                TaskKind::BuildAndRunMain,
            ],
            TaskFamily::Spark => &[
                TaskKind::CleanProjectForProof,
                TaskKind::ExamineProject,
                TaskKind::ExamineFile,
                TaskKind::ExamineSubprogram,
                TaskKind::ProveProject,
                TaskKind::ProveFile,
                TaskKind::ProveSubprogram,
                TaskKind::ProveRegion,
                TaskKind::ProveLine,
            ],
        }
    }
}

impl fmt::Display for TaskFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of operations gpr-runner knows how to turn into commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    // Ada family
    BuildProject,
    CheckFile,
    CleanProject,
    BuildMain,
    RunMain,
    BuildAndRunMain,
    // SPARK family
    CleanProjectForProof,
    ExamineProject,
    ExamineFile,
    ExamineSubprogram,
    ProveProject,
    ProveFile,
    ProveSubprogram,
    ProveRegion,
    ProveLine,
}

impl TaskKind {
    pub fn family(self) -> TaskFamily {
        match self {
            TaskKind::BuildProject
            | TaskKind::CheckFile
            | TaskKind::CleanProject
            | TaskKind::BuildMain
            | TaskKind::RunMain
            | TaskKind::BuildAndRunMain => TaskFamily::Ada,
            _ => TaskFamily::Spark,
        }
    }

    /// Kinds that are synthesized per project main rather than once per family.
    pub fn is_main_specific(self) -> bool {
        matches!(
            self,
            TaskKind::BuildMain | TaskKind::RunMain | TaskKind::BuildAndRunMain
        )
    }

    /// Kinds whose command performs no build at all (the command only runs an
    /// executable, so project/scenario/diagnostic arguments do not apply).
    pub fn is_run_only(self) -> bool {
        matches!(self, TaskKind::RunMain)
    }
}
