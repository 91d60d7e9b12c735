use std::io::Write;

use crate::error::Result;
use crate::types::{ResolvedTask, TaskFamily};

/// The host task engine: enumeration of currently known tasks and execution
/// with an observable exit status. Status lines produced during execution
/// are streamed to `output`.
pub trait TaskMonitor {
    /// All currently known tasks of a family, both provider-synthesized and
    /// user-defined.
    fn fetch_tasks(&self, family: TaskFamily) -> Result<Vec<ResolvedTask>>;

    /// Execute a task to completion and return its exit code.
    fn execute(&self, task: &ResolvedTask, output: &mut dyn Write) -> Result<i32>;
}
