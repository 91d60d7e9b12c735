mod definition;
mod main_program;
mod resolved;
mod task_kind;

pub use definition::TaskDefinition;
pub use main_program::MainProgram;
pub use resolved::{Execution, ResolvedTask, TaskGroup, TaskSource, DEFAULT_PROBLEM_MATCHER};
pub use task_kind::{TaskFamily, TaskKind};
