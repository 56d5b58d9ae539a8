//! Binary tests.
//!
//! Run the real executable with environment detection off so results do not
//! depend on the machine running the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID_CONTEXT: &str = r#"{
    "project_name": "MyApp",
    "package_name": "com.example.myapp",
    "min_sdk": "24",
    "target_sdk": "34",
    "compile_sdk": "34",
    "java_version": "17",
    "version_name": "1.0.0"
}"#;

const PROJECT_FILES: [&str; 6] = [
    "app/build.gradle.kts",
    "app/src/main/AndroidManifest.xml",
    "build.gradle.kts",
    "settings.gradle.kts",
    "gradlew",
    "gradlew.bat",
];

fn generated_project(context: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("app/src/main/java")).unwrap();
    for path in PROJECT_FILES {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, "").unwrap();
    }
    if let Some(context) = context {
        fs::write(dir.path().join("cookiecutter_context.json"), context).unwrap();
    }
    dir
}

fn hook(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("android-template-hook").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--skip-environment")
        .arg("--no-color")
        .arg("--project-dir")
        .arg(project);
    cmd
}

#[test]
fn test_valid_project_exits_zero() {
    let project = generated_project(Some(VALID_CONTEXT));
    hook(project.path())
        .assert()
        .success()
        .stdout(contains("All validations passed successfully!"))
        .stdout(contains("Happy Android Development!"));

    assert!(project.path().join("REQUIREMENTS.md").exists());
    assert!(!project.path().join("cookiecutter_context.json").exists());
}

#[test]
fn test_invalid_package_exits_one() {
    let project = generated_project(Some(&VALID_CONTEXT.replace("com.example.myapp", "Com.Example")));
    hook(project.path())
        .assert()
        .code(1)
        .stdout(contains("package_name"))
        .stdout(contains("Template validation failed!"));

    assert!(project.path().join("cookiecutter_context.json").exists());
}

#[test]
fn test_missing_context_exits_three() {
    let project = generated_project(None);
    hook(project.path())
        .assert()
        .code(3)
        .stderr(contains("template context file not found"));
}

#[test]
fn test_missing_context_allowed() {
    let project = generated_project(None);
    hook(project.path())
        .arg("--allow-missing-context")
        .assert()
        .success()
        .stdout(contains("skipping validation"));
}

#[test]
fn test_missing_structure_exits_one() {
    let project = generated_project(Some(VALID_CONTEXT));
    fs::remove_file(project.path().join("gradlew")).unwrap();
    hook(project.path())
        .assert()
        .code(1)
        .stdout(contains("Missing required files:"))
        .stdout(contains("  - gradlew\n"));
}

#[test]
fn test_permissive_accepts_anything() {
    let project = generated_project(Some(r#"{"project_name": "not a name"}"#));
    hook(project.path())
        .arg("--permissive")
        .assert()
        .success()
        .stdout(contains("failed").not());
}

#[test]
fn test_json_report() {
    let project = generated_project(Some(r#"{"project_name": "MyApp"}"#));
    hook(project.path())
        .arg("--json")
        .assert()
        .code(1)
        .stdout(contains("\"success\": false"));
}

#[test]
fn test_unknown_flag_is_setup_fault() {
    Command::cargo_bin("android-template-hook")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .code(3);
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("android-template-hook")
        .unwrap()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains("android-template-hook "))
        .stdout(contains("Target: "));
}
