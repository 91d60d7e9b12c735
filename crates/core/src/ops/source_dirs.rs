//! Check whether the project closure has source directories outside the
//! workspace folders, and offer to add them.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::interfaces::{Answer, Interaction, ProjectModel, SourceDir, TaskConfigStore};

/// Per-workspace flag suppressing the startup popup.
pub const DONT_SHOW_AGAIN_KEY: &str = "addMissingDirsDontShowAgain";

/// Returns the source directories that should be added to the workspace, or
/// an empty list when there is nothing to add or the user declined.
///
/// At startup the check is skipped entirely once the user has chosen
/// "Don't Show Again" for this workspace.
pub fn check_source_dirs(
    model: &dyn ProjectModel,
    interaction: &dyn Interaction,
    store: &dyn TaskConfigStore,
    workspace_folders: &[PathBuf],
    at_startup: bool,
    ask: bool,
) -> Result<Vec<SourceDir>> {
    if at_startup && store.flag(DONT_SHOW_AGAIN_KEY) {
        return Ok(Vec::new());
    }

    let missing: Vec<SourceDir> = model
        .source_dirs()?
        .into_iter()
        .filter(|dir| {
            !workspace_folders
                .iter()
                .any(|folder| dir.path == *folder || dir.path.starts_with(folder))
        })
        .collect();

    if missing.is_empty() {
        if !at_startup {
            interaction.show_info(
                "All the project's source directories are already available in the \
                 current workspace.",
            );
        }
        return Ok(Vec::new());
    }

    info!(count = missing.len(), "project source directories missing from the workspace");

    if !ask {
        return Ok(missing);
    }

    match interaction.ask_yes_no(
        "Some project source directories are not listed in your workspace: \
         do you want to add them?",
        at_startup,
    )? {
        Answer::Yes => Ok(missing),
        Answer::No => Ok(Vec::new()),
        Answer::DontShowAgain => {
            store.set_flag(DONT_SHOW_AGAIN_KEY, true)?;
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeProjectModel, MemoryConfigStore, RecordingInteraction};
    use std::path::Path;

    fn model_with_dirs(dirs: &[&str]) -> FakeProjectModel {
        let mut model = FakeProjectModel::new("prj.gpr");
        model.source_dirs = dirs
            .iter()
            .map(|d| SourceDir {
                name: Path::new(d)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned(),
                path: PathBuf::from(d),
            })
            .collect();
        model
    }

    #[test]
    fn directories_under_a_workspace_folder_are_not_missing() {
        let model = model_with_dirs(&["/ws/src", "/ws/src/gen", "/other/lib"]);
        let interaction = RecordingInteraction::new();
        let store = MemoryConfigStore::default();
        let folders = vec![PathBuf::from("/ws")];

        let missing =
            check_source_dirs(&model, &interaction, &store, &folders, false, true).unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].path, PathBuf::from("/other/lib"));
    }

    #[test]
    fn declining_adds_nothing() {
        let model = model_with_dirs(&["/other/lib"]);
        let interaction = RecordingInteraction::new().will_answer(Answer::No);
        let store = MemoryConfigStore::default();

        let missing =
            check_source_dirs(&model, &interaction, &store, &[], false, true).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn dont_show_again_is_persisted_and_honored_at_startup() {
        let model = model_with_dirs(&["/other/lib"]);
        let interaction = RecordingInteraction::new().will_answer(Answer::DontShowAgain);
        let store = MemoryConfigStore::default();

        let missing =
            check_source_dirs(&model, &interaction, &store, &[], true, true).unwrap();
        assert!(missing.is_empty());
        assert!(store.flag(DONT_SHOW_AGAIN_KEY));

        // Next startup check is suppressed entirely.
        let interaction = RecordingInteraction::new().will_answer(Answer::Yes);
        let missing =
            check_source_dirs(&model, &interaction, &store, &[], true, true).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn explicit_check_with_nothing_missing_reports_info() {
        let model = model_with_dirs(&["/ws/src"]);
        let interaction = RecordingInteraction::new();
        let store = MemoryConfigStore::default();
        let folders = vec![PathBuf::from("/ws")];

        check_source_dirs(&model, &interaction, &store, &folders, false, true).unwrap();
        assert_eq!(interaction.infos.borrow().len(), 1);
    }
}
