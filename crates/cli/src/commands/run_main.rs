use anyhow::Result;

use gpr_runner_core::run_main::{run_main_ask, run_main_last, RunMainServices};

use crate::engine::Engine;

/// Re-run the last build-and-run task, falling back to the chooser.
pub fn run_last(engine: &Engine) -> Result<i32> {
    with_services(engine, run_main_last)
}

/// Always present the build-and-run chooser.
pub fn run_ask(engine: &Engine) -> Result<i32> {
    with_services(engine, run_main_ask)
}

fn with_services(
    engine: &Engine,
    flow: impl FnOnce(
        &RunMainServices<'_>,
        &mut Option<gpr_runner_core::run_main::LastUsed>,
        &mut dyn std::io::Write,
    ) -> gpr_runner_core::Result<Option<i32>>,
) -> Result<i32> {
    let monitor = engine.monitor()?;
    let store = engine.config_store();
    let services = RunMainServices {
        monitor: &monitor,
        interaction: &engine.interaction,
        store: &store,
        project_model: &engine.model,
    };

    // The last-used slot lives in the workspace state file across runs.
    let mut state = engine.state_file.load();
    let mut stdout = std::io::stdout();
    let status = flow(&services, &mut state.last_used, &mut stdout)?;
    engine.state_file.save(&state)?;
    Ok(status.unwrap_or(0))
}
