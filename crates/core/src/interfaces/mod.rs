//! Trait seams for everything the task engine delegates to its host:
//! project model queries, editor/symbol lookup, task execution, user
//! interaction and persisted task configuration.

mod editor;
mod interaction;
mod monitor;
mod project_model;
mod task_config;

pub use editor::{EditorContext, Symbol, SymbolProvider};
pub use interaction::{Answer, Interaction, PickEntry, PickOutcome};
pub use monitor::TaskMonitor;
pub use project_model::{ProjectModel, SourceDir};
pub use task_config::TaskConfigStore;
