//! Static catalog mapping every task kind to its base command line, dynamic
//! extra-argument variant and display text.

use crate::types::TaskKind;

/// Macro expanded to the base name of the active editor's file.
pub const FILE_BASENAME: &str = "${fileBasename}";
/// Macro expanded to the active editor's cursor line (1-based).
pub const LINE_NUMBER: &str = "${lineNumber}";

/// Dynamic extra arguments computed at command-build time from the editor
/// state. A tagged variant rather than a stored closure so the catalog stays
/// plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraArgs {
    /// No extra arguments.
    None,
    /// `--limit-subp=<file>:<line>` for the subprogram enclosing the cursor.
    LimitSubprogram,
    /// `--limit-region=<file>:<from>:<to>` for the active selection.
    LimitRegion,
}

/// Catalog entry for one task kind. Static, process-wide, read-only.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Tool executable and static arguments.
    pub command: &'static [&'static str],
    pub extra: ExtraArgs,
    /// Short title displayed in task lists.
    pub title: &'static str,
    /// Long description displayed on a separate line, if any.
    pub description: Option<&'static str>,
}

/// Look up the catalog entry for a task kind. Total over the closed enum, so
/// a missing kind cannot occur at runtime.
pub fn entry(kind: TaskKind) -> &'static CatalogEntry {
    match kind {
        TaskKind::CleanProjectForProof => &CatalogEntry {
            command: &["gnatprove", "--clean"],
            extra: ExtraArgs::None,
            title: "Clean project for proof",
            description: None,
        },
        TaskKind::ExamineProject => &CatalogEntry {
            command: &["gnatprove", "-j0", "--mode=flow"],
            extra: ExtraArgs::None,
            title: "Examine project",
            description: None,
        },
        TaskKind::ExamineFile => &CatalogEntry {
            command: &["gnatprove", "-j0", "--mode=flow", "-u", FILE_BASENAME],
            extra: ExtraArgs::None,
            title: "Examine file",
            description: None,
        },
        TaskKind::ExamineSubprogram => &CatalogEntry {
            command: &["gnatprove", "-j0", "--mode=flow"],
            extra: ExtraArgs::LimitSubprogram,
            title: "Examine subprogram",
            description: None,
        },
        TaskKind::ProveProject => &CatalogEntry {
            command: &["gnatprove", "-j0"],
            extra: ExtraArgs::None,
            title: "Prove project",
            description: None,
        },
        TaskKind::ProveFile => &CatalogEntry {
            command: &["gnatprove", "-j0", "-u", FILE_BASENAME],
            extra: ExtraArgs::None,
            title: "Prove file",
            description: None,
        },
        TaskKind::ProveSubprogram => &CatalogEntry {
            command: &["gnatprove", "-j0"],
            extra: ExtraArgs::LimitSubprogram,
            title: "Prove subprogram",
            description: None,
        },
        TaskKind::ProveRegion => &CatalogEntry {
            command: &["gnatprove", "-j0", "-u", FILE_BASENAME],
            extra: ExtraArgs::LimitRegion,
            title: "Prove selected region",
            description: None,
        },
        TaskKind::ProveLine => &CatalogEntry {
            command: &[
                "gnatprove",
                "-j0",
                "-u",
                FILE_BASENAME,
                "--limit-line=${fileBasename}:${lineNumber}",
            ],
            extra: ExtraArgs::None,
            title: "Prove line",
            description: None,
        },
        TaskKind::BuildProject => &CatalogEntry {
            command: &["gprbuild"],
            extra: ExtraArgs::None,
            title: "Build current project",
            description: None,
        },
        TaskKind::CheckFile => &CatalogEntry {
            command: &["gprbuild", "-q", "-f", "-c", "-u", "-gnatc", FILE_BASENAME],
            extra: ExtraArgs::None,
            title: "Check current file",
            description: None,
        },
        TaskKind::CleanProject => &CatalogEntry {
            command: &["gprclean"],
            extra: ExtraArgs::None,
            title: "Clean current project",
            description: None,
        },
        TaskKind::BuildMain => &CatalogEntry {
            command: &["gprbuild"],
            extra: ExtraArgs::None,
            title: "Build main - ",
            description: None,
        },
        TaskKind::RunMain => &CatalogEntry {
            command: &[],
            extra: ExtraArgs::None,
            title: "Run main - ",
            description: None,
        },
        TaskKind::BuildAndRunMain => &CatalogEntry {
            command: &["gprbuild"],
            extra: ExtraArgs::None,
            title: "Build and run main - ",
            description: Some("Run the build task followed by the run task for the given main"),
        },
    }
}
