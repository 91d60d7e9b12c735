//! gpr-runner - task orchestration for the GNAT/SPARK toolchain
//!
//! This crate provides functionality to:
//! - Enumerate the mains of a GPR project and synthesize build/run/prove tasks
//! - Resolve declarative task definitions into fully quoted command lines
//! - Sequence composite build-then-run executions with failure short-circuiting
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod ops;
pub mod provider;
pub mod run_main;
pub mod sequencer;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandBuilder, CommandContext, CommandLine};
pub use config::Settings;
pub use provider::{CancellationToken, TaskProvider};
pub use sequencer::BuildAndRunSequencer;
