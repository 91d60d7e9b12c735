//! Assembles full command lines from task definitions, project state and the
//! editor context.

use tracing::debug;

use super::CommandLine;
use crate::catalog::{self, ExtraArgs, FILE_BASENAME, LINE_NUMBER};
use crate::config::Settings;
use crate::error::Result;
use crate::interfaces::{EditorContext, Interaction, ProjectModel, SymbolProvider};
use crate::types::{TaskDefinition, TaskKind};

/// Fixed options forcing fully-qualified file names in tool diagnostics.
pub fn diagnostic_args() -> &'static [&'static str] {
    &["-cargs:ada", "-gnatef"]
}

/// The services a command build draws on.
pub struct CommandContext<'a> {
    pub project_model: &'a dyn ProjectModel,
    pub symbols: &'a dyn SymbolProvider,
    pub editor: &'a EditorContext,
    pub settings: &'a Settings,
    pub interaction: &'a dyn Interaction,
}

/// Builds the ordered token vector for a task definition.
///
/// Token order: catalog base command, project and scenario options, dynamic
/// limit options, main source (build-main), definition arguments, one-off
/// caller arguments, diagnostic options, executable and its arguments
/// (run-main), all behind an optional package-manager prefix.
pub struct CommandBuilder<'a> {
    definition: &'a TaskDefinition,
    ctx: &'a CommandContext<'a>,
    name: Option<&'a str>,
    prefix: &'a [String],
    extra_args: &'a [String],
}

impl<'a> CommandBuilder<'a> {
    pub fn new(definition: &'a TaskDefinition, ctx: &'a CommandContext<'a>) -> Self {
        Self {
            definition,
            ctx,
            name: None,
            prefix: &[],
            extra_args: &[],
        }
    }

    /// Task name used in warning messages.
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Package-manager wrapper tokens prepended to the command.
    pub fn with_prefix(mut self, prefix: &'a [String]) -> Self {
        self.prefix = prefix;
        self
    }

    /// One-off arguments supplied by the caller, appended after the
    /// definition's static arguments.
    pub fn with_extra_args(mut self, args: &'a [String]) -> Self {
        self.extra_args = args;
        self
    }

    pub fn build(self) -> Result<CommandLine> {
        let def = self.definition;
        let entry = catalog::entry(def.kind);

        let mut cmd: Vec<String> = entry
            .command
            .iter()
            .map(|token| self.expand_macros(token))
            .collect();

        // A surviving macro means the editor context is missing the file or
        // cursor the kind needs. Non-fatal, like an unresolved main.
        if let Some(token) = cmd
            .iter()
            .find(|t| t.contains(FILE_BASENAME) || t.contains(LINE_NUMBER))
        {
            self.warn(format!(
                "Task '{}': there is no active editor state to expand '{}'.",
                self.display_name(),
                token,
            ));
        }

        // Project selection and scenario variables apply to every kind that
        // invokes the toolchain.
        if !def.kind.is_run_only() {
            cmd.extend(self.project_args());
            cmd.extend(self.ctx.settings.scenario_args());
        }

        match entry.extra {
            ExtraArgs::None => {}
            ExtraArgs::LimitSubprogram => cmd.extend(self.limit_subprogram()?),
            ExtraArgs::LimitRegion => cmd.extend(self.limit_region()),
        }

        let task_project_is_active = self.task_project_is_active();
        let main_program = if matches!(def.kind, TaskKind::BuildMain | TaskKind::RunMain) {
            let main = def.required_main()?;
            if task_project_is_active {
                let found = self
                    .ctx
                    .project_model
                    .mains()?
                    .into_iter()
                    .find(|candidate| candidate.matches(main));
                if found.is_none() {
                    self.warn(format!(
                        "Task '{}': The specified main '{}' does not match any value of \
                         the Mains attribute of the project: {}.",
                        self.display_name(),
                        main,
                        self.active_project().unwrap_or_else(|| "<unknown>".into()),
                    ));
                }
                found
            } else {
                // The definition points at another project; the active
                // project model cannot look the main up.
                None
            }
        } else {
            None
        };

        if def.kind == TaskKind::BuildMain {
            cmd.push(def.required_main()?.to_string());
        }

        cmd.extend(def.args.iter().cloned());
        cmd.extend(self.extra_args.iter().cloned());

        // User args come before the diagnostic ones because the latter open a
        // -cargs section.
        if !def.kind.is_run_only() && cmd.first().map(String::as_str) != Some("gprclean") {
            cmd.extend(diagnostic_args().iter().map(|s| s.to_string()));
        }

        if def.kind == TaskKind::RunMain {
            match main_program {
                Some(main) => {
                    cmd.push(main.exec_rel_path());
                    cmd.extend(def.main_args.iter().cloned());
                }
                None if !task_project_is_active => {
                    self.warn(format!(
                        "Task '{}': The project file specified in this task is different \
                         than the workspace project. It is not possible to automatically \
                         compute the path to the executable to run. Please invoke the \
                         executable directly.",
                        self.display_name(),
                    ));
                }
                // Main not found in the active project: already warned above.
                None => {}
            }
        }

        let mut full: Vec<String> = self.prefix.to_vec();
        full.extend(cmd);

        debug!(kind = ?def.kind, command = ?full, "built command line");
        Ok(CommandLine::new(full))
    }

    fn display_name(&self) -> &str {
        self.name
            .unwrap_or_else(|| catalog::entry(self.definition.kind).title)
    }

    fn warn(&self, message: String) {
        self.ctx.interaction.show_warning(&message);
    }

    /// Project configured for the workspace: the setting when present, the
    /// project model's answer otherwise.
    fn active_project(&self) -> Option<String> {
        self.ctx
            .settings
            .project_file
            .clone()
            .or_else(|| self.ctx.project_model.project_file().ok())
    }

    /// Project the task selects: definition override first, then the active
    /// project.
    fn effective_project(&self) -> Option<String> {
        self.definition
            .project_file
            .clone()
            .or_else(|| self.active_project())
    }

    /// Whether the task's configured project is the active project. A
    /// definition without an override always targets the active project.
    fn task_project_is_active(&self) -> bool {
        match self.definition.project_file.as_deref() {
            None => true,
            Some(project) => {
                Some(project) == self.ctx.settings.project_file.as_deref()
                    || Some(project) == self.ctx.project_model.project_file().ok().as_deref()
            }
        }
    }

    fn project_args(&self) -> Vec<String> {
        match self.effective_project() {
            Some(project) => vec!["-P".to_string(), project],
            None => Vec::new(),
        }
    }

    /// `--limit-subp=<file>:<line>` for the subprogram enclosing the cursor,
    /// or nothing when no symbol is locatable.
    fn limit_subprogram(&self) -> Result<Vec<String>> {
        let editor = self.ctx.editor;
        let (file, line) = match (editor.file.as_deref(), editor.cursor_line) {
            (Some(file), Some(line)) => (file, line),
            _ => return Ok(Vec::new()),
        };
        let basename = match editor.file_basename() {
            Some(basename) => basename,
            None => return Ok(Vec::new()),
        };

        Ok(match self.ctx.symbols.enclosing_subprogram(file, line)? {
            Some(symbol) => vec![format!("--limit-subp={}:{}", basename, symbol.start_line)],
            None => Vec::new(),
        })
    }

    /// `--limit-region=<file>:<from>:<to>` for the active selection.
    fn limit_region(&self) -> Vec<String> {
        match self.ctx.editor.file_basename() {
            Some(basename) => vec![format!(
                "--limit-region={}:{}",
                basename,
                self.ctx.editor.selected_region()
            )],
            None => Vec::new(),
        }
    }

    fn expand_macros(&self, token: &str) -> String {
        let mut expanded = token.to_string();
        if let Some(basename) = self.ctx.editor.file_basename() {
            expanded = expanded.replace(FILE_BASENAME, &basename);
        }
        if let Some(line) = self.ctx.editor.cursor_line {
            expanded = expanded.replace(LINE_NUMBER, &line.to_string());
        }
        expanded
    }
}
