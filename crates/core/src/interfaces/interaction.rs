use crate::error::Result;

/// One row of the task picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickEntry {
    pub label: String,
    /// Secondary text shown next to the label (e.g. "last used").
    pub description: Option<String>,
    /// Render a visual separator above this entry.
    pub separator_before: bool,
}

/// Outcome of a task pick. Indices refer to the entry list handed to
/// `pick_task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Run the chosen task.
    Chosen(usize),
    /// Materialize the chosen task into persistent configuration without
    /// running it.
    Configure(usize),
    /// The picker was dismissed.
    Dismissed,
}

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    DontShowAgain,
}

/// User-facing interaction primitives provided by the host.
pub trait Interaction {
    fn pick_task(&self, entries: &[PickEntry]) -> Result<PickOutcome>;

    fn show_info(&self, message: &str);
    fn show_warning(&self, message: &str);
    fn show_error(&self, message: &str);

    /// Ask a yes/no question; the "Don't Show Again" choice is only offered
    /// when `offer_dont_show_again` is set.
    fn ask_yes_no(&self, message: &str, offer_dont_show_again: bool) -> Result<Answer>;
}
