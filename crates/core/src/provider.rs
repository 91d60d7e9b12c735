//! Task provider: enumerates the tasks of one family and resolves
//! declarative definitions into executable tasks.

use std::cell::RefCell;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::catalog;
use crate::command::{command_prefix, CommandBuilder, CommandContext};
use crate::error::Result;
use crate::types::{
    Execution, MainProgram, ResolvedTask, TaskDefinition, TaskFamily, TaskGroup, TaskKind,
    TaskSource, DEFAULT_PROBLEM_MATCHER,
};

/// Cooperative cancellation flag checked between enumeration steps. A
/// cancelled discovery yields an empty result rather than a partial one.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Plain name of the build task synthesized for a main.
pub fn build_main_task_name(main: &MainProgram) -> String {
    format!(
        "{}{}",
        catalog::entry(TaskKind::BuildMain).title,
        main.source_rel_path()
    )
}

/// Plain name of the run task synthesized for a main.
pub fn run_main_task_name(main: &MainProgram) -> String {
    format!(
        "{}{}",
        catalog::entry(TaskKind::RunMain).title,
        main.source_rel_path()
    )
}

/// Conventional label of the build task of a main, including the family.
pub fn build_main_task_label(main: &MainProgram) -> String {
    format!("{}: {}", TaskFamily::Ada, build_main_task_name(main))
}

/// Conventional label of the run task of a main, including the family.
pub fn run_main_task_label(main: &MainProgram) -> String {
    format!("{}: {}", TaskFamily::Ada, run_main_task_name(main))
}

/// Provides and resolves the tasks of one family. The provided list is
/// memoized for the provider's lifetime.
pub struct TaskProvider<'a> {
    family: TaskFamily,
    ctx: CommandContext<'a>,
    workspace_root: &'a Path,
    tasks: RefCell<Option<Vec<ResolvedTask>>>,
}

impl<'a> TaskProvider<'a> {
    pub fn new(family: TaskFamily, ctx: CommandContext<'a>, workspace_root: &'a Path) -> Self {
        Self {
            family,
            ctx,
            workspace_root,
            tasks: RefCell::new(None),
        }
    }

    pub fn family(&self) -> TaskFamily {
        self.family
    }

    /// Enumerate the family's tasks: one per project-wide kind, plus a
    /// build/run/build-and-run triple per discovered main for the Ada
    /// family. Fully resolved and ready for execution.
    pub fn provide_tasks(&self, token: &CancellationToken) -> Result<Vec<ResolvedTask>> {
        if let Some(tasks) = self.tasks.borrow().as_ref() {
            return Ok(tasks.clone());
        }

        let prefix = command_prefix(self.workspace_root);
        let project_file = self.active_project();

        let mut tasks = Vec::new();
        for &kind in self.family.kinds() {
            if token.is_cancelled() {
                return Ok(Vec::new());
            }
            if kind.is_main_specific() {
                // Main-specific tasks are synthesized per project main below.
                continue;
            }

            let mut definition = TaskDefinition::new(kind);
            definition.project_file = project_file.clone();
            tasks.push(self.resolve(&definition, None, TaskSource::Provider(self.family), &prefix)?);
        }

        if self.family == TaskFamily::Ada {
            for main in self.ctx.project_model.mains()? {
                if token.is_cancelled() {
                    return Ok(Vec::new());
                }

                let mut definition = TaskDefinition::new(TaskKind::BuildMain)
                    .with_main(main.source_rel_path());
                definition.project_file = project_file.clone();
                let name = build_main_task_name(&main);
                tasks.push(self.resolve(
                    &definition,
                    Some(&name),
                    TaskSource::Provider(self.family),
                    &prefix,
                )?);

                let mut definition =
                    TaskDefinition::new(TaskKind::RunMain).with_main(main.source_rel_path());
                definition.project_file = project_file.clone();
                let name = run_main_task_name(&main);
                tasks.push(self.resolve(
                    &definition,
                    Some(&name),
                    TaskSource::Provider(self.family),
                    &prefix,
                )?);

                let definition = TaskDefinition::new(TaskKind::BuildAndRunMain)
                    .with_sequence(build_main_task_label(&main), run_main_task_label(&main));
                let name = format!(
                    "{}{}",
                    catalog::entry(TaskKind::BuildAndRunMain).title,
                    main.source_rel_path()
                );
                tasks.push(self.resolve(
                    &definition,
                    Some(&name),
                    TaskSource::Provider(self.family),
                    &prefix,
                )?);
            }
        }

        debug!(family = %self.family, count = tasks.len(), "provided tasks");
        self.tasks.replace(Some(tasks.clone()));
        Ok(tasks)
    }

    /// Resolve a (possibly user-configured) definition into an executable
    /// task. The display name defaults to the catalog title.
    pub fn resolve_task(
        &self,
        definition: &TaskDefinition,
        name: Option<&str>,
        source: TaskSource,
    ) -> Result<ResolvedTask> {
        let prefix = command_prefix(self.workspace_root);
        self.resolve(definition, name, source, &prefix)
    }

    fn resolve(
        &self,
        definition: &TaskDefinition,
        name: Option<&str>,
        source: TaskSource,
        prefix: &[String],
    ) -> Result<ResolvedTask> {
        let entry = catalog::entry(definition.kind);
        let name = name.unwrap_or(entry.title).to_string();

        let execution = if definition.kind == TaskKind::BuildAndRunMain {
            let (build_task, run_task) = definition.required_sequence()?;
            Execution::Sequence {
                build_task: build_task.to_string(),
                run_task: run_task.to_string(),
            }
        } else {
            let command = CommandBuilder::new(definition, &self.ctx)
                .with_name(&name)
                .with_prefix(prefix)
                .build()?;
            Execution::Shell(command)
        };

        // Run output is not diagnostic, so run-only and composite tasks get
        // neither a group nor a problem matcher.
        let (group, problem_matcher) = match definition.kind {
            TaskKind::RunMain | TaskKind::BuildAndRunMain => (None, None),
            TaskKind::CleanProject | TaskKind::CleanProjectForProof => {
                (Some(TaskGroup::Clean), Some(DEFAULT_PROBLEM_MATCHER))
            }
            _ => (Some(TaskGroup::Build), Some(DEFAULT_PROBLEM_MATCHER)),
        };

        Ok(ResolvedTask {
            definition: definition.clone(),
            family: definition.kind.family(),
            name,
            source,
            execution,
            group,
            problem_matcher,
        })
    }

    fn active_project(&self) -> Option<String> {
        self.ctx
            .settings
            .project_file
            .clone()
            .or_else(|| self.ctx.project_model.project_file().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::interfaces::EditorContext;
    use crate::testing::{FakeProjectModel, FakeSymbols, RecordingInteraction};

    struct Fixture {
        model: FakeProjectModel,
        symbols: FakeSymbols,
        editor: EditorContext,
        settings: Settings,
        interaction: RecordingInteraction,
        root: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                model: FakeProjectModel::new("prj.gpr").with_main("src/main1.adb", "obj"),
                symbols: FakeSymbols::default(),
                editor: EditorContext::default(),
                settings: Settings::default(),
                interaction: RecordingInteraction::new(),
                root: tempfile::tempdir().unwrap(),
            }
        }

        fn provider(&self, family: TaskFamily) -> TaskProvider<'_> {
            TaskProvider::new(
                family,
                CommandContext {
                    project_model: &self.model,
                    symbols: &self.symbols,
                    editor: &self.editor,
                    settings: &self.settings,
                    interaction: &self.interaction,
                },
                self.root.path(),
            )
        }
    }

    #[test]
    fn ada_family_provides_project_tasks_plus_a_triple_per_main() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let tasks = provider.provide_tasks(&CancellationToken::new()).unwrap();

        // buildProject, checkFile, cleanProject + 3 tasks for the single main
        assert_eq!(tasks.len(), 6);
        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"Build current project"));
        assert!(names.contains(&"Build main - src/main1.adb"));
        assert!(names.contains(&"Run main - src/main1.adb"));
        assert!(names.contains(&"Build and run main - src/main1.adb"));
    }

    #[test]
    fn spark_family_provides_one_task_per_kind() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Spark);
        let tasks = provider.provide_tasks(&CancellationToken::new()).unwrap();
        assert_eq!(tasks.len(), TaskFamily::Spark.kinds().len());
        assert!(tasks.iter().all(|t| t.family == TaskFamily::Spark));
    }

    #[test]
    fn cancelled_discovery_yields_no_tasks() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let token = CancellationToken::new();
        token.cancel();
        assert!(provider.provide_tasks(&token).unwrap().is_empty());

        // A later uncancelled call still enumerates everything.
        let tasks = provider.provide_tasks(&CancellationToken::new()).unwrap();
        assert_eq!(tasks.len(), 6);
    }

    #[test]
    fn composite_task_references_its_build_and_run_labels() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let tasks = provider.provide_tasks(&CancellationToken::new()).unwrap();
        let composite = tasks
            .iter()
            .find(|t| t.definition.kind == TaskKind::BuildAndRunMain)
            .unwrap();
        assert_eq!(
            composite.execution,
            Execution::Sequence {
                build_task: "ada: Build main - src/main1.adb".into(),
                run_task: "ada: Run main - src/main1.adb".into(),
            }
        );
        assert!(composite.group.is_none());
        assert!(composite.problem_matcher.is_none());
    }

    #[test]
    fn grouping_and_matchers_follow_the_kind() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let tasks = provider.provide_tasks(&CancellationToken::new()).unwrap();

        for task in &tasks {
            match task.definition.kind {
                TaskKind::RunMain | TaskKind::BuildAndRunMain => {
                    assert!(task.group.is_none());
                    assert!(task.problem_matcher.is_none());
                }
                TaskKind::CleanProject => {
                    assert_eq!(task.group, Some(TaskGroup::Clean));
                    assert_eq!(task.problem_matcher, Some(DEFAULT_PROBLEM_MATCHER));
                }
                _ => {
                    assert_eq!(task.group, Some(TaskGroup::Build));
                    assert_eq!(task.problem_matcher, Some(DEFAULT_PROBLEM_MATCHER));
                }
            }
        }
    }

    #[test]
    fn resolve_task_defaults_the_name_to_the_catalog_title() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let definition = TaskDefinition::new(TaskKind::BuildProject);
        let task = provider
            .resolve_task(&definition, None, TaskSource::Workspace)
            .unwrap();
        assert_eq!(task.name, "Build current project");
        assert!(matches!(task.execution, Execution::Shell(_)));
    }

    #[test]
    fn provided_tasks_are_memoized() {
        let fx = Fixture::new();
        let provider = fx.provider(TaskFamily::Ada);
        let first = provider.provide_tasks(&CancellationToken::new()).unwrap();
        let second = provider.provide_tasks(&CancellationToken::new()).unwrap();
        assert_eq!(first, second);
    }
}
