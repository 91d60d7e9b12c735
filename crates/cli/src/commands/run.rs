use anyhow::{bail, Result};

use gpr_runner_core::command::{command_prefix, CommandBuilder};
use gpr_runner_core::interfaces::TaskMonitor;
use gpr_runner_core::types::{Execution, ResolvedTask};

use crate::engine::Engine;

/// Resolve a task by label and execute it (or just print its command).
pub fn run(engine: &Engine, label: &str, extra_args: &[String], dry_run: bool) -> Result<i32> {
    let monitor = engine.monitor()?;
    let task = match find_task(monitor.tasks(), label) {
        Some(task) => task.clone(),
        None => bail!(
            "no task labelled '{label}'; run `gpr-runner list` to see the available tasks"
        ),
    };

    // One-off arguments require rebuilding the command line.
    let task = if extra_args.is_empty() {
        task
    } else {
        rebuild_with_extra_args(engine, task, extra_args)?
    };

    if dry_run {
        match &task.execution {
            Execution::Shell(command) => println!("{}", command.to_shell_command()),
            Execution::Sequence { build_task, run_task } => {
                println!("[{build_task}] then [{run_task}]")
            }
        }
        return Ok(0);
    }

    let mut stdout = std::io::stdout();
    Ok(monitor.execute(&task, &mut stdout)?)
}

/// Tasks are addressed by their conventional label, with the plain name
/// accepted as a fallback. Workspace tasks come first in the list, so they
/// shadow provider tasks of the same label.
fn find_task<'a>(tasks: &'a [ResolvedTask], label: &str) -> Option<&'a ResolvedTask> {
    tasks
        .iter()
        .find(|task| task.conventional_label() == label)
        .or_else(|| tasks.iter().find(|task| task.name == label))
}

fn rebuild_with_extra_args(
    engine: &Engine,
    mut task: ResolvedTask,
    extra_args: &[String],
) -> Result<ResolvedTask> {
    if let Execution::Sequence { .. } = task.execution {
        bail!("extra arguments cannot be passed to a build-and-run task");
    }
    let ctx = engine.context();
    let prefix = command_prefix(&engine.workspace.root);
    let command = CommandBuilder::new(&task.definition, &ctx)
        .with_name(&task.name)
        .with_prefix(&prefix)
        .with_extra_args(extra_args)
        .build()?;
    task.execution = Execution::Shell(command);
    Ok(task)
}
