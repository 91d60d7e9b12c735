//! In-memory fakes for the host-facing trait seams, shared by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::config::UserTask;
use crate::error::{Error, Result};
use crate::interfaces::{
    Answer, Interaction, PickEntry, PickOutcome, ProjectModel, SourceDir, Symbol, SymbolProvider,
    TaskConfigStore, TaskMonitor,
};
use crate::types::{MainProgram, ResolvedTask, TaskFamily};

pub struct FakeProjectModel {
    pub project: String,
    pub mains: Vec<MainProgram>,
    pub source_dirs: Vec<SourceDir>,
}

impl FakeProjectModel {
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            mains: Vec::new(),
            source_dirs: Vec::new(),
        }
    }

    pub fn with_main(mut self, source: &str, exec_dir: &str) -> Self {
        self.mains
            .push(MainProgram::from_source(source, Path::new(exec_dir)));
        self
    }
}

impl ProjectModel for FakeProjectModel {
    fn project_file(&self) -> Result<String> {
        Ok(self.project.clone())
    }

    fn mains(&self) -> Result<Vec<MainProgram>> {
        Ok(self.mains.clone())
    }

    fn source_dirs(&self) -> Result<Vec<SourceDir>> {
        Ok(self.source_dirs.clone())
    }
}

/// Serves a fixed symbol table of `(start_line, end_line, name)` spans.
#[derive(Default)]
pub struct FakeSymbols {
    pub spans: Vec<(u32, u32, String)>,
}

impl SymbolProvider for FakeSymbols {
    fn enclosing_subprogram(&self, _file: &Path, line: u32) -> Result<Option<Symbol>> {
        Ok(self
            .spans
            .iter()
            .filter(|(start, end, _)| *start <= line && line <= *end)
            .min_by_key(|(start, end, _)| end - start)
            .map(|(start, end, name)| Symbol {
                name: name.clone(),
                start_line: *start,
                end_line: *end,
            }))
    }
}

pub struct RecordingInteraction {
    pub warnings: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    pub infos: RefCell<Vec<String>>,
    pub pick_outcomes: RefCell<Vec<PickOutcome>>,
    pub picked_entries: RefCell<Vec<Vec<PickEntry>>>,
    pub answer: RefCell<Answer>,
}

impl RecordingInteraction {
    pub fn new() -> Self {
        Self {
            warnings: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
            infos: RefCell::new(Vec::new()),
            pick_outcomes: RefCell::new(Vec::new()),
            picked_entries: RefCell::new(Vec::new()),
            answer: RefCell::new(Answer::Yes),
        }
    }

    pub fn will_pick(self, outcome: PickOutcome) -> Self {
        self.pick_outcomes.borrow_mut().push(outcome);
        self
    }

    pub fn will_answer(self, answer: Answer) -> Self {
        *self.answer.borrow_mut() = answer;
        self
    }
}

impl Interaction for RecordingInteraction {
    fn pick_task(&self, entries: &[PickEntry]) -> Result<PickOutcome> {
        self.picked_entries.borrow_mut().push(entries.to_vec());
        let mut outcomes = self.pick_outcomes.borrow_mut();
        if outcomes.is_empty() {
            Ok(PickOutcome::Dismissed)
        } else {
            Ok(outcomes.remove(0))
        }
    }

    fn show_info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn show_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn ask_yes_no(&self, _message: &str, _offer_dont_show_again: bool) -> Result<Answer> {
        Ok(*self.answer.borrow())
    }
}

/// Task engine fake: a fixed task list plus per-label exit codes.
#[derive(Default)]
pub struct FakeMonitor {
    pub tasks: Vec<ResolvedTask>,
    pub exit_codes: HashMap<String, i32>,
    pub executed: RefCell<Vec<String>>,
}

impl FakeMonitor {
    pub fn new(tasks: Vec<ResolvedTask>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn with_exit_code(mut self, label: &str, code: i32) -> Self {
        self.exit_codes.insert(label.to_string(), code);
        self
    }
}

impl TaskMonitor for FakeMonitor {
    fn fetch_tasks(&self, family: TaskFamily) -> Result<Vec<ResolvedTask>> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.family == family)
            .cloned()
            .collect())
    }

    fn execute(&self, task: &ResolvedTask, output: &mut dyn Write) -> Result<i32> {
        let label = task.conventional_label();
        writeln!(output, "[fake] {label}").map_err(Error::IoError)?;
        self.executed.borrow_mut().push(label.clone());
        Ok(*self.exit_codes.get(&label).unwrap_or(&0))
    }
}

#[derive(Default)]
pub struct MemoryConfigStore {
    pub tasks: RefCell<Vec<UserTask>>,
    pub flags: RefCell<HashMap<String, bool>>,
    pub opened: RefCell<bool>,
}

impl TaskConfigStore for MemoryConfigStore {
    fn user_tasks(&self) -> Result<Vec<UserTask>> {
        Ok(self.tasks.borrow().clone())
    }

    fn append_task(&self, task: &UserTask) -> Result<()> {
        self.tasks.borrow_mut().push(task.clone());
        Ok(())
    }

    fn open_for_editing(&self) -> Result<()> {
        *self.opened.borrow_mut() = true;
        Ok(())
    }

    fn flag(&self, key: &str) -> bool {
        *self.flags.borrow().get(key).unwrap_or(&false)
    }

    fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        self.flags.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
