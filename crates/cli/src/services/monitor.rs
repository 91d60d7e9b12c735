//! Process-spawning task monitor: executes shell tasks as child processes
//! and composite tasks through the sequencer.

use std::io::Write;

use tracing::debug;

use gpr_runner_core::error::Result;
use gpr_runner_core::interfaces::{Interaction, TaskMonitor};
use gpr_runner_core::sequencer::BuildAndRunSequencer;
use gpr_runner_core::types::{Execution, ResolvedTask, TaskFamily};

/// Serves tasks from a pre-enumerated list and runs them as child processes
/// in the workspace root. Composite failures are surfaced through the
/// interaction layer and reported as the sequencer's distinguished status.
pub struct ProcessTaskMonitor<'a> {
    tasks: Vec<ResolvedTask>,
    interaction: &'a dyn Interaction,
}

impl<'a> ProcessTaskMonitor<'a> {
    pub fn new(tasks: Vec<ResolvedTask>, interaction: &'a dyn Interaction) -> Self {
        Self { tasks, interaction }
    }

    pub fn tasks(&self) -> &[ResolvedTask] {
        &self.tasks
    }
}

impl TaskMonitor for ProcessTaskMonitor<'_> {
    fn fetch_tasks(&self, family: TaskFamily) -> Result<Vec<ResolvedTask>> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| task.family == family)
            .cloned()
            .collect())
    }

    fn execute(&self, task: &ResolvedTask, output: &mut dyn Write) -> Result<i32> {
        match &task.execution {
            Execution::Shell(command) => {
                debug!(task = %task.conventional_label(), command = %command.to_shell_command(), "spawning");
                if command.args.is_empty() {
                    // Resolution degraded (e.g. unknown main); nothing to run.
                    return Ok(0);
                }
                let status = command.execute()?;
                Ok(status.code().unwrap_or(-1))
            }
            Execution::Sequence { .. } => {
                let mut sequencer = BuildAndRunSequencer::new(&task.definition, self)?;
                Ok(sequencer.run_reporting(output, self.interaction))
            }
        }
    }
}
