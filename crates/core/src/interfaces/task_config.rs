use crate::config::UserTask;
use crate::error::Result;

/// Persisted user task configuration and per-workspace flags (the host's
/// configuration store).
pub trait TaskConfigStore {
    /// The user-defined task configurations, in file order.
    fn user_tasks(&self) -> Result<Vec<UserTask>>;

    /// Append a task configuration to the persisted list.
    fn append_task(&self, task: &UserTask) -> Result<()>;

    /// Open the persisted task configuration for editing.
    fn open_for_editing(&self) -> Result<()>;

    /// Read a per-workspace boolean flag (e.g. "don't show again").
    fn flag(&self, key: &str) -> bool;

    /// Persist a per-workspace boolean flag.
    fn set_flag(&self, key: &str, value: bool) -> Result<()>;
}
