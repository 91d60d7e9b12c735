use anyhow::Result;

use gpr_runner_core::ops::check_source_dirs;

use crate::engine::Engine;

/// Report the project source directories that live outside the workspace.
pub fn check_dirs(engine: &Engine) -> Result<i32> {
    let store = engine.config_store();
    let missing = check_source_dirs(
        &engine.model,
        &engine.interaction,
        &store,
        &[engine.workspace.root.clone()],
        false,
        false,
    )?;

    for dir in &missing {
        println!("{}\t{}", dir.name, dir.path.display());
    }
    Ok(0)
}
