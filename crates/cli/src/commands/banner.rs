use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use gpr_runner_core::interfaces::SymbolProvider;
use gpr_runner_core::ops::subprogram_banner;

use crate::engine::Engine;
use crate::utils::parse_location;

/// Print the comment banner for the subprogram enclosing `file:line`.
pub fn banner(engine: &Engine, location: &str) -> Result<i32> {
    let (file, line) = parse_location(location);
    let line = match line {
        Some(line) => line,
        None => bail!("expected a location of the form file:line, got '{location}'"),
    };
    let file = resolve_path(engine, file);

    let symbol = engine
        .symbols
        .enclosing_subprogram(&file, line)?
        .with_context(|| {
            format!("no subprogram encloses line {line} of {}", file.display())
        })?;

    let contents = std::fs::read_to_string(&file)?;
    let eol = if contents.contains("\r\n") { "\r\n" } else { "\n" };
    let declaration = contents
        .lines()
        .nth(symbol.start_line as usize - 1)
        .unwrap_or("");
    let indentation: String = declaration
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    print!("{}", subprogram_banner(&symbol.name, &indentation, eol));
    eprintln!(
        "insert above {}:{}",
        file.display(),
        symbol.start_line
    );
    Ok(0)
}

fn resolve_path(engine: &Engine, file: PathBuf) -> PathBuf {
    if file.is_absolute() || file.exists() {
        file
    } else {
        engine.workspace.root.join(file)
    }
}
