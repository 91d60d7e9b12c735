//! A self-contained GPR project model: parses the attributes the task engine
//! needs (Main, Source_Dirs, Object_Dir, Exec_Dir) straight from the project
//! file text.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use regex::Regex;
use tracing::debug;

use gpr_runner_core::config::Settings;
use gpr_runner_core::error::Result;
use gpr_runner_core::interfaces::{ProjectModel, SourceDir};
use gpr_runner_core::types::MainProgram;

/// Project state derived once at startup from the project file.
#[derive(Debug, Clone)]
pub struct GprProjectModel {
    root: PathBuf,
    /// Project file path relative to the workspace root, forward slashes.
    project_rel: String,
    mains: Vec<String>,
    source_dirs: Vec<String>,
    object_dir: Option<String>,
    exec_dir: Option<String>,
}

impl GprProjectModel {
    /// Locate and parse the workspace project: the configured one when set,
    /// otherwise the single `.gpr` file at the workspace root.
    pub fn discover(root: &Path, settings: &Settings) -> anyhow::Result<Self> {
        let project_rel = match &settings.project_file {
            Some(project) => project.clone(),
            None => find_root_project(root)?,
        };
        let project_path = root.join(&project_rel);
        let contents = std::fs::read_to_string(&project_path)
            .with_context(|| format!("failed to read project file {}", project_path.display()))?;

        let model = Self {
            root: root.to_path_buf(),
            project_rel: project_rel.replace('\\', "/"),
            mains: attribute_list(&contents, "Main"),
            source_dirs: attribute_list(&contents, "Source_Dirs"),
            object_dir: attribute_string(&contents, "Object_Dir"),
            exec_dir: attribute_string(&contents, "Exec_Dir"),
        };
        debug!(
            project = %model.project_rel,
            mains = model.mains.len(),
            "discovered project"
        );
        Ok(model)
    }

    /// Directory holding the project file, relative to the workspace root.
    fn project_dir(&self) -> PathBuf {
        Path::new(&self.project_rel)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Where executables land: Exec_Dir, falling back to Object_Dir, falling
    /// back to the project directory itself.
    fn effective_exec_dir(&self) -> PathBuf {
        let dir = self
            .exec_dir
            .as_deref()
            .or(self.object_dir.as_deref())
            .unwrap_or(".");
        normalize(&self.project_dir().join(dir))
    }

    /// Resolve a bare main file name to a workspace-relative source path by
    /// probing the project's source directories.
    fn locate_main(&self, name: &str) -> PathBuf {
        let project_dir = self.project_dir();
        for dir in &self.source_dirs {
            let candidate = normalize(&project_dir.join(dir).join(name));
            if self.root.join(&candidate).exists() {
                return candidate;
            }
        }
        normalize(&project_dir.join(name))
    }
}

impl ProjectModel for GprProjectModel {
    fn project_file(&self) -> Result<String> {
        Ok(self.project_rel.clone())
    }

    fn mains(&self) -> Result<Vec<MainProgram>> {
        let exec_dir = self.effective_exec_dir();
        Ok(self
            .mains
            .iter()
            .map(|name| MainProgram::from_source(self.locate_main(name), &exec_dir))
            .collect())
    }

    fn source_dirs(&self) -> Result<Vec<SourceDir>> {
        let project_dir = self.project_dir();
        Ok(self
            .source_dirs
            .iter()
            .map(|dir| SourceDir {
                name: dir.clone(),
                path: self.root.join(normalize(&project_dir.join(dir))),
            })
            .collect())
    }
}

/// The sole `.gpr` file directly under `root`. Zero or several is an error
/// the user resolves by configuring the project explicitly.
fn find_root_project(root: &Path) -> anyhow::Result<String> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(root)
        .with_context(|| format!("failed to read {}", root.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "gpr") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                found.push(name.to_string());
            }
        }
    }
    match found.as_slice() {
        [single] => Ok(single.clone()),
        [] => bail!("no .gpr project file found in {}", root.display()),
        _ => bail!(
            "multiple .gpr files in {}; set project_file in the settings",
            root.display()
        ),
    }
}

/// Values of a list-valued attribute, e.g. `for Main use ("a.adb", "b.adb");`.
fn attribute_list(contents: &str, attribute: &str) -> Vec<String> {
    let pattern = format!(r#"(?is)for\s+{attribute}\s+use\s+\(([^)]*)\)"#);
    let re = Regex::new(&pattern).unwrap();
    let quoted = Regex::new(r#""([^"]*)""#).unwrap();
    re.captures(contents)
        .map(|captures| {
            quoted
                .captures_iter(&captures[1])
                .map(|c| c[1].to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Value of a string-valued attribute, e.g. `for Object_Dir use "obj";`.
fn attribute_string(contents: &str, attribute: &str) -> Option<String> {
    let pattern = format!(r#"(?i)for\s+{attribute}\s+use\s+"([^"]*)""#);
    let re = Regex::new(&pattern).unwrap();
    re.captures(contents).map(|captures| captures[1].to_string())
}

/// Collapse `.` components so derived paths stay tidy.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"
project Hello is
   for Source_Dirs use ("src", "src/extra");
   for Object_Dir use "obj";
   for Exec_Dir use "bin";
   for Main use ("main1.adb", "main2.adb");
end Hello;
"#;

    fn workspace(project: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/extra")).unwrap();
        std::fs::write(dir.path().join("hello.gpr"), project).unwrap();
        std::fs::write(dir.path().join("src/main1.adb"), "").unwrap();
        std::fs::write(dir.path().join("src/extra/main2.adb"), "").unwrap();
        dir
    }

    #[test]
    fn attributes_are_parsed_case_insensitively() {
        assert_eq!(attribute_list(PROJECT, "Main"), vec!["main1.adb", "main2.adb"]);
        assert_eq!(attribute_string(PROJECT, "object_dir").as_deref(), Some("obj"));
        assert_eq!(attribute_string(PROJECT, "Missing"), None);
    }

    #[test]
    fn mains_are_located_in_source_dirs() {
        let dir = workspace(PROJECT);
        let model = GprProjectModel::discover(dir.path(), &Settings::default()).unwrap();

        assert_eq!(model.project_file().unwrap(), "hello.gpr");
        let mains = model.mains().unwrap();
        assert_eq!(mains.len(), 2);
        assert_eq!(mains[0].source_rel_path(), "src/main1.adb");
        assert_eq!(mains[0].exec_rel_path(), "bin/main1");
        assert_eq!(mains[1].source_rel_path(), "src/extra/main2.adb");
    }

    #[test]
    fn exec_dir_falls_back_to_object_dir() {
        let dir = workspace(
            r#"
project Hello is
   for Source_Dirs use ("src");
   for Object_Dir use "obj";
   for Main use ("main1.adb");
end Hello;
"#,
        );
        let model = GprProjectModel::discover(dir.path(), &Settings::default()).unwrap();
        assert_eq!(model.mains().unwrap()[0].exec_rel_path(), "obj/main1");
    }

    #[test]
    fn configured_project_file_wins_over_discovery() {
        let dir = workspace(PROJECT);
        std::fs::create_dir_all(dir.path().join("gnat")).unwrap();
        std::fs::write(
            dir.path().join("gnat/other.gpr"),
            "project Other is\n   for Source_Dirs use (\"../src\");\nend Other;\n",
        )
        .unwrap();
        let settings = Settings {
            project_file: Some("gnat/other.gpr".into()),
            ..Settings::default()
        };
        let model = GprProjectModel::discover(dir.path(), &settings).unwrap();
        assert_eq!(model.project_file().unwrap(), "gnat/other.gpr");
        let dirs = model.source_dirs().unwrap();
        assert_eq!(dirs[0].name, "../src");
    }

    #[test]
    fn several_root_projects_require_configuration() {
        let dir = workspace(PROJECT);
        std::fs::write(dir.path().join("second.gpr"), "project Second is end Second;").unwrap();
        let err = GprProjectModel::discover(dir.path(), &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("multiple .gpr files"));
    }
}
