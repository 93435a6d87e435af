//! Integration tests for project creation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use savvy_core::{
    NoProgress, ProjectManager, ProjectRegistry, ProjectTarget, RecordingProgress,
    ScaffoldBuilder, ScaffoldConfig, ScaffoldError,
};
use savvy_spec::{FolderSpec, SpecError, StructureSpec, TemplateSpec};
use savvy_templates::{TemplateEngine, TemplateError};
use tempfile::{tempdir, TempDir};
use walkdir::WalkDir;

const STRUCTURE: &str = r#"
folders:
  - path: src
    files:
      - __init__.txt
templates:
  - name: readme.tmpl
    path: README.md
"#;

const README: &str = "# {{ project_name }}\n\nWelcome to {{project_name}}.\n";

/// A config directory holding `structure.yaml` and `templates/`.
fn fixture(structure: &str, templates: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("structure.yaml"), structure).unwrap();
    fs::create_dir_all(dir.path().join("templates")).unwrap();
    for (name, content) in templates {
        fs::write(dir.path().join("templates").join(name), content).unwrap();
    }
    dir
}

fn manager(config_dir: &Path) -> ProjectManager {
    ProjectManager::with_registry(
        ScaffoldConfig::from_dir(config_dir),
        Arc::new(ProjectRegistry::new()),
    )
}

/// Every file under `root` with its bytes.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| {
            let content = if e.file_type().is_file() {
                fs::read(e.path()).unwrap()
            } else {
                Vec::new()
            };
            (e.path().to_path_buf(), content)
        })
        .collect()
}

fn file_count(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_demo_project_end_to_end() {
    let config = fixture(STRUCTURE, &[("readme.tmpl", README)]);
    let out = tempdir().unwrap();
    let mut progress = RecordingProgress::new();

    let result = manager(config.path())
        .new_project(out.path(), "demo", &mut progress)
        .unwrap();

    let init = out.path().join("demo/src/__init__.txt");
    assert!(init.is_file());
    assert_eq!(fs::metadata(&init).unwrap().len(), 0);

    let readme = fs::read_to_string(out.path().join("demo/README.md")).unwrap();
    assert_eq!(readme, "# demo\n\nWelcome to demo.\n");
    assert!(!readme.contains("{{"));

    assert_eq!(
        result.message(),
        format!("New project 'demo' created successfully in '{}'.", out.path().display())
    );
    assert_eq!(result.project_path(), out.path().join("demo"));
    assert_eq!(progress.total, Some(2));
    assert_eq!(progress.completed(), 2);
}

#[test]
fn test_second_invocation_is_refused() {
    let config = fixture(STRUCTURE, &[("readme.tmpl", README)]);
    let out = tempdir().unwrap();
    let manager = manager(config.path());

    manager.new_project(out.path(), "demo", &mut NoProgress).unwrap();
    let before = snapshot(&out.path().join("demo"));

    let mut progress = RecordingProgress::new();
    let err = manager
        .new_project(out.path(), "demo", &mut progress)
        .unwrap_err();

    match &err {
        ScaffoldError::ProjectExists { name, dir } => {
            assert_eq!(name, "demo");
            assert_eq!(dir, out.path());
        }
        other => panic!("expected ProjectExists, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("demo"));
    assert!(message.contains(&out.path().display().to_string()));

    assert_eq!(snapshot(&out.path().join("demo")), before);
    assert_eq!(progress.total, None);
}

#[test]
fn test_existing_target_left_untouched() {
    let config = fixture(STRUCTURE, &[("readme.tmpl", README)]);
    let out = tempdir().unwrap();
    let existing = out.path().join("demo");
    fs::create_dir_all(existing.join("src")).unwrap();
    fs::write(existing.join("README.md"), "hand written").unwrap();
    let before = snapshot(&existing);

    let err = manager(config.path())
        .new_project(out.path(), "demo", &mut NoProgress)
        .unwrap_err();

    assert!(err.is_recoverable());
    assert_eq!(snapshot(&existing), before);
}

#[test]
fn test_entry_count_matches_progress_total() {
    let structure = r#"
folders:
  - path: app
    files: [__init__.py, main.py]
  - path: app/routes
    files: [__init__.py]
  - path: tests
    files: [conftest.py]
  - path: docs
    files: []
templates:
  - name: readme.tmpl
    path: README.md
  - name: config.tmpl
    path: config/settings.yaml
"#;
    let config = fixture(
        structure,
        &[("readme.tmpl", README), ("config.tmpl", "name: {{ project_name }}\n")],
    );
    let out = tempdir().unwrap();
    let mut progress = RecordingProgress::new();

    let result = manager(config.path())
        .new_project(out.path(), "svc", &mut progress)
        .unwrap();

    assert_eq!(result.files_created, 4);
    assert_eq!(result.templates_rendered, 2);
    assert_eq!(progress.total, Some(6));
    assert_eq!(progress.increments, vec![4, 2]);
    assert_eq!(file_count(&out.path().join("svc")), 6);
    assert!(out.path().join("svc/docs").is_dir());
    assert_eq!(
        fs::read_to_string(out.path().join("svc/config/settings.yaml")).unwrap(),
        "name: svc\n"
    );
}

#[test]
fn test_prefix_folders_are_idempotent() {
    let (_templates, engine) = empty_engine();
    let builder = ScaffoldBuilder::new(Arc::new(ProjectRegistry::new()), engine);
    let out = tempdir().unwrap();

    let spec = StructureSpec::new(
        vec![
            FolderSpec::new("src/app/models", ["user.py"]),
            FolderSpec::new("src/app", ["__init__.py"]),
            FolderSpec::new("src", ["__init__.py"]),
            FolderSpec::new("src", ["__init__.py"]),
        ],
        vec![],
    );

    let result = builder
        .build(&spec, &ProjectTarget::new(out.path(), "nested"), &mut NoProgress)
        .unwrap();

    let root = out.path().join("nested");
    assert!(root.join("src/app/models/user.py").is_file());
    assert!(root.join("src/app/__init__.py").is_file());
    assert!(root.join("src/__init__.py").is_file());
    assert_eq!(result.files_created, 4);
    assert_eq!(file_count(&root), 3);
}

#[test]
fn test_project_folder_created_without_folders() {
    let config = fixture(
        "folders: []\ntemplates:\n  - name: readme.tmpl\n    path: README.md\n",
        &[("readme.tmpl", README)],
    );
    let out = tempdir().unwrap();

    manager(config.path())
        .new_project(out.path(), "flat", &mut NoProgress)
        .unwrap();

    assert!(out.path().join("flat/README.md").is_file());
}

#[test]
fn test_missing_template_keeps_folders() {
    let structure = r#"
folders:
  - path: src
    files: [main.py]
templates:
  - name: missing.tmpl
    path: README.md
"#;
    let config = fixture(structure, &[]);
    let out = tempdir().unwrap();

    let err = manager(config.path())
        .new_project(out.path(), "demo", &mut NoProgress)
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Template(TemplateError::NotFound(ref name)) if name == "missing.tmpl"
    ));
    assert!(!err.is_recoverable());
    assert!(out.path().join("demo/src/main.py").is_file());
    assert!(!out.path().join("demo/README.md").exists());
}

#[test]
fn test_missing_structure_aborts_before_mutation() {
    let config = tempdir().unwrap();
    let out = tempdir().unwrap();

    let err = manager(config.path())
        .new_project(out.path(), "demo", &mut NoProgress)
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::Spec(SpecError::NotFound { .. })));
    assert!(!out.path().join("demo").exists());
}

#[test]
fn test_malformed_structure_aborts_before_mutation() {
    let config = fixture("folders:\n  - path: src\n", &[]);
    let out = tempdir().unwrap();

    let err = manager(config.path())
        .new_project(out.path(), "demo", &mut NoProgress)
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::Spec(SpecError::Malformed { .. })));
    assert!(!out.path().join("demo").exists());
}

#[test]
fn test_template_overwrites_declared_file() {
    let config = fixture(
        "folders:\n  - path: .\n    files: [README.md]\ntemplates:\n  - name: readme.tmpl\n    path: README.md\n",
        &[("readme.tmpl", README)],
    );
    let out = tempdir().unwrap();

    manager(config.path())
        .new_project(out.path(), "demo", &mut NoProgress)
        .unwrap();

    let readme = fs::read_to_string(out.path().join("demo/README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
}

#[test]
fn test_render_is_repeatable_across_projects() {
    let config = fixture(STRUCTURE, &[("readme.tmpl", README)]);
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let manager = manager(config.path());

    manager.new_project(first.path(), "foo", &mut NoProgress).unwrap();
    manager.new_project(second.path(), "foo", &mut NoProgress).unwrap();

    assert_eq!(
        fs::read(first.path().join("foo/README.md")).unwrap(),
        fs::read(second.path().join("foo/README.md")).unwrap()
    );
}

#[test]
fn test_builder_with_explicit_template_spec() {
    let templates = tempdir().unwrap();
    fs::write(templates.path().join("main.tmpl"), "print('{{ project_name_snake }}')\n").unwrap();
    let builder = ScaffoldBuilder::new(
        Arc::new(ProjectRegistry::new()),
        TemplateEngine::new(templates.path()),
    );
    let out = tempdir().unwrap();

    let spec = StructureSpec::new(
        vec![FolderSpec::new("my_app", Vec::<String>::new())],
        vec![TemplateSpec::new("main.tmpl", "my_app/main.py")],
    );
    builder
        .build(&spec, &ProjectTarget::new(out.path(), "MyApp"), &mut NoProgress)
        .unwrap();

    assert_eq!(
        fs::read_to_string(out.path().join("MyApp/my_app/main.py")).unwrap(),
        "print('my_app')\n"
    );
}

fn empty_engine() -> (TempDir, TemplateEngine) {
    let dir = tempdir().unwrap();
    let engine = TemplateEngine::new(dir.path());
    (dir, engine)
}

#[test]
fn test_bundled_structure_builds() {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let out = tempdir().unwrap();
    let mut progress = RecordingProgress::new();

    let result = manager(&workspace)
        .new_project(out.path(), "petstore-tests", &mut progress)
        .unwrap();

    let root = out.path().join("petstore-tests");
    assert_eq!(file_count(&root), result.units());
    assert_eq!(progress.total, Some(result.units() as u64));
    assert!(root.join("config").is_dir());

    let config = fs::read_to_string(root.join("config/stage.yaml")).unwrap();
    assert!(config.contains("project: petstore-tests"));
}

#[test]
fn test_escaping_project_name_is_refused() {
    let config = fixture(STRUCTURE, &[("readme.tmpl", README)]);
    let out = tempdir().unwrap();
    let projects = out.path().join("projects");
    fs::create_dir(&projects).unwrap();
    let manager = manager(config.path());

    for name in ["../escaped", "nested/demo", ""] {
        let mut progress = RecordingProgress::new();
        let err = manager
            .new_project(&projects, name, &mut progress)
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidProjectName(_)), "{}: {:?}", name, err);
        assert!(!err.is_recoverable());
        assert_eq!(progress.total, None);
    }

    assert_eq!(fs::read_dir(&projects).unwrap().count(), 0);
    assert!(!out.path().join("escaped").exists());
}
