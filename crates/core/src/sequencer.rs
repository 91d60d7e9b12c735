//! Composite build-then-run execution: locate the referenced tasks, run the
//! build, and only on success run the executable.

use std::cmp::Ordering;
use std::io::Write;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::interfaces::{Interaction, TaskMonitor};
use crate::types::{ResolvedTask, TaskDefinition, TaskKind};

/// Exit status reported when the referenced build or run task cannot be
/// located.
pub const LOOKUP_FAILURE_STATUS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    NotStarted,
    Building,
    Running,
    Finished,
}

/// Executes a `buildAndRunMain` definition as an explicit state machine.
/// The run task is never started before the build task's completion status
/// has been observed, and a non-zero build status short-circuits the
/// sequence.
pub struct BuildAndRunSequencer<'a> {
    definition: &'a TaskDefinition,
    monitor: &'a dyn TaskMonitor,
    state: SequencerState,
}

impl<'a> BuildAndRunSequencer<'a> {
    pub fn new(definition: &'a TaskDefinition, monitor: &'a dyn TaskMonitor) -> Result<Self> {
        if definition.kind != TaskKind::BuildAndRunMain {
            return Err(Error::InvalidDefinition(format!(
                "cannot sequence a {:?} task",
                definition.kind
            )));
        }
        definition.required_sequence()?;
        Ok(Self {
            definition,
            monitor,
            state: SequencerState::NotStarted,
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Run the sequence, streaming status lines to `output`. Returns the
    /// exit status of the last task run; fails when a referenced task label
    /// cannot be resolved.
    pub fn run(&mut self, output: &mut dyn Write) -> Result<i32> {
        let (build_label, run_label) = self.definition.required_sequence()?;

        let mut tasks = self.monitor.fetch_tasks(self.definition.kind.family())?;
        // When a user task shadows a provider task of the same label, the
        // user-defined one wins.
        tasks.sort_by(compare_for_lookup);

        let build_task = find_task(&tasks, build_label)?;
        let run_task = find_task(&tasks, run_label)?;

        self.state = SequencerState::Building;
        writeln!(output, "Executing task: {}", build_task.conventional_label())?;
        let build_status = self.monitor.execute(build_task, output)?;
        if build_status != 0 {
            debug!(status = build_status, "build failed, run task not started");
            self.state = SequencerState::Finished;
            return Ok(build_status);
        }

        self.state = SequencerState::Running;
        writeln!(output, "Executing task: {}", run_task.conventional_label())?;
        let run_status = self.monitor.execute(run_task, output)?;
        self.state = SequencerState::Finished;
        Ok(run_status)
    }

    /// Like [`run`](Self::run), but surfaces failures to the user and maps
    /// them to [`LOOKUP_FAILURE_STATUS`].
    pub fn run_reporting(
        &mut self,
        output: &mut dyn Write,
        interaction: &dyn Interaction,
    ) -> i32 {
        match self.run(output) {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "build-and-run sequence aborted");
                interaction.show_error(&err.to_string());
                let _ = writeln!(output, "{err}");
                LOOKUP_FAILURE_STATUS
            }
        }
    }
}

fn compare_for_lookup(a: &ResolvedTask, b: &ResolvedTask) -> Ordering {
    match (a.is_from_workspace(), b.is_from_workspace()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

fn find_task<'t>(tasks: &'t [ResolvedTask], label: &str) -> Result<&'t ResolvedTask> {
    tasks
        .iter()
        .find(|task| task.conventional_label() == label)
        .ok_or_else(|| Error::TaskNotFound(label.to_string()))
}
