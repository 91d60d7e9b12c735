//! Concrete host services backing the core engine's trait seams: a GPR
//! project model, an Ada symbol scanner, a process-spawning task monitor and
//! a terminal interaction layer.

pub mod interaction;
pub mod monitor;
pub mod project;
pub mod symbols;

pub use interaction::TerminalInteraction;
pub use monitor::ProcessTaskMonitor;
pub use project::GprProjectModel;
pub use symbols::AdaSymbolProvider;
