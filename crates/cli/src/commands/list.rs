use anyhow::Result;

use gpr_runner_core::types::Execution;

use crate::engine::Engine;

/// Print every available task, optionally as JSON.
pub fn list(engine: &Engine, json: bool) -> Result<i32> {
    let tasks = engine.enumerate_tasks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(0);
    }

    for task in &tasks {
        println!("{}", task.conventional_label());
        match &task.execution {
            Execution::Shell(command) => println!("    {}", command.to_shell_command()),
            Execution::Sequence { build_task, run_task } => {
                println!("    [{build_task}] then [{run_task}]")
            }
        }
    }
    Ok(0)
}
