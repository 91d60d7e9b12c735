use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gpr_runner::cli::{Commands, GprRunner};
use gpr_runner::commands;
use gpr_runner::engine::Engine;
use gpr_runner::utils::{parse_location, parse_range};

use gpr_runner_core::interfaces::EditorContext;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match dispatch() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn dispatch() -> Result<i32> {
    let cli = GprRunner::parse();

    match cli.command {
        Commands::List { json } => {
            let engine = Engine::bootstrap(EditorContext::default())?;
            commands::list(&engine, json)
        }
        Commands::Run {
            label,
            file,
            lines,
            dry_run,
            args,
        } => {
            let editor = editor_context(file.as_deref(), lines.as_deref())?;
            let engine = Engine::bootstrap(editor)?;
            commands::run(&engine, &label, &args, dry_run)
        }
        Commands::RunLast => {
            let engine = Engine::bootstrap(EditorContext::default())?;
            commands::run_last(&engine)
        }
        Commands::RunAsk => {
            let engine = Engine::bootstrap(EditorContext::default())?;
            commands::run_ask(&engine)
        }
        Commands::CheckDirs => {
            let engine = Engine::bootstrap(EditorContext::default())?;
            commands::check_dirs(&engine)
        }
        Commands::Banner { location } => {
            let engine = Engine::bootstrap(EditorContext::default())?;
            commands::banner(&engine, &location)
        }
    }
}

/// Assemble the editor snapshot cursor-scoped tasks read from.
fn editor_context(file: Option<&str>, lines: Option<&str>) -> Result<EditorContext> {
    let mut editor = EditorContext::default();
    if let Some(location) = file {
        let (path, line) = parse_location(location);
        editor.file = Some(path);
        editor.cursor_line = line;
    }
    if let Some(range) = lines {
        editor.selection = Some(parse_range(range)?);
    }
    Ok(editor)
}
