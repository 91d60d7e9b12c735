use std::path::{Path, PathBuf};

use crate::error::Result;

/// Snapshot of the active editor state at command-build time. All line
/// numbers are 1-based.
#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    /// Path of the file in the active editor, if any.
    pub file: Option<PathBuf>,
    /// Cursor line.
    pub cursor_line: Option<u32>,
    /// Selected line range, inclusive on both ends.
    pub selection: Option<(u32, u32)>,
}

impl EditorContext {
    pub fn file_basename(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|f| f.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Selection rendered as `from:to`, or `0:0` with no active editor.
    pub fn selected_region(&self) -> String {
        match self.selection {
            Some((from, to)) => format!("{from}:{to}"),
            None => "0:0".to_string(),
        }
    }
}

/// A subprogram declaration located in a source file. Lines are 1-based and
/// the span is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// Document symbol lookup, normally served by the host editor's symbol
/// provider.
pub trait SymbolProvider {
    /// The innermost subprogram enclosing `line` in `file`, if any.
    fn enclosing_subprogram(&self, file: &Path, line: u32) -> Result<Option<Symbol>>;
}
