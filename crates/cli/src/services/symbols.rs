//! Lightweight Ada subprogram scanner. Pairs `procedure`/`function` bodies
//! with their matching `end <name>;` lines to build inclusive line spans,
//! enough to answer "which subprogram encloses this line".

use std::path::Path;

use regex::Regex;

use gpr_runner_core::error::Result;
use gpr_runner_core::interfaces::{Symbol, SymbolProvider};

#[derive(Debug, Clone)]
pub struct AdaSymbolProvider {
    declaration: Regex,
    terminator: Regex,
}

impl Default for AdaSymbolProvider {
    fn default() -> Self {
        Self {
            declaration: Regex::new(r"(?i)^\s*(?:procedure|function)\s+([A-Za-z][A-Za-z0-9_]*)")
                .unwrap(),
            terminator: Regex::new(r"(?i)^\s*end\s+([A-Za-z][A-Za-z0-9_]*)\s*;").unwrap(),
        }
    }
}

impl AdaSymbolProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// All subprogram bodies in `contents`, with 1-based inclusive spans.
    /// Specs (`procedure Foo;`) open no span and are skipped.
    pub fn scan(&self, contents: &str) -> Vec<Symbol> {
        // Open declarations, innermost last.
        let mut open: Vec<(String, u32)> = Vec::new();
        let mut symbols = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let line_no = index as u32 + 1;
            if let Some(captures) = self.declaration.captures(line) {
                if is_spec(line) {
                    continue;
                }
                open.push((captures[1].to_string(), line_no));
            } else if let Some(captures) = self.terminator.captures(line) {
                let name = &captures[1];
                let matching = open
                    .iter()
                    .rposition(|(open_name, _)| open_name.eq_ignore_ascii_case(name));
                if let Some(position) = matching {
                    let (name, start_line) = open.remove(position);
                    symbols.push(Symbol {
                        name,
                        start_line,
                        end_line: line_no,
                    });
                }
                // `end loop;`, `end record;` and friends match no open
                // declaration and are ignored.
            }
        }
        symbols
    }
}

/// A declaration that completes on its own line without a body.
fn is_spec(line: &str) -> bool {
    line.contains(';') && !line.contains(" is")
}

impl SymbolProvider for AdaSymbolProvider {
    fn enclosing_subprogram(&self, file: &Path, line: u32) -> Result<Option<Symbol>> {
        let contents = std::fs::read_to_string(file)?;
        Ok(self
            .scan(&contents)
            .into_iter()
            .filter(|symbol| symbol.start_line <= line && line <= symbol.end_line)
            // Innermost enclosing body starts last.
            .max_by_key(|symbol| symbol.start_line))
    }
}
