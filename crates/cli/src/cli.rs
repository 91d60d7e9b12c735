use clap::{Parser, Subcommand};

/// A task runner for GNAT/SPARK projects
#[derive(Parser, Debug)]
#[command(name = "gpr-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct GprRunner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tasks available for the current workspace
    #[command(visible_alias = "l")]
    List {
        /// Emit the task list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a task by label and execute it
    #[command(visible_alias = "r")]
    Run {
        /// Task label, e.g. "ada: Build current project"
        label: String,

        /// Active file with optional cursor line (e.g. src/pack.adb:42),
        /// used by cursor-scoped tasks
        #[arg(short, long)]
        file: Option<String>,

        /// Selected line range (e.g. 3:7), used by region-scoped tasks
        #[arg(long)]
        lines: Option<String>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Extra arguments appended to the command
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Re-run the most recently run build-and-run task
    RunLast,
    /// Pick a build-and-run task to run, or materialize it into the settings
    RunAsk,
    /// Report project source directories missing from the workspace
    CheckDirs,
    /// Print the comment banner for the subprogram enclosing FILE:LINE
    Banner {
        /// Location as file:line (e.g. src/pack.adb:42)
        location: String,
    },
}
