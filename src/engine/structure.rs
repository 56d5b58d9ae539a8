//! Generated project tree verification.

use std::path::Path;

/// Paths every generated project must contain, relative to its root
pub const REQUIRED_PATHS: [&str; 7] = [
    "app/build.gradle.kts",
    "app/src/main/java",
    "app/src/main/AndroidManifest.xml",
    "build.gradle.kts",
    "settings.gradle.kts",
    "gradlew",
    "gradlew.bat",
];

/// Entries of `required` that do not exist under `project_dir`, in order
pub fn missing_paths(project_dir: &Path, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|relative| !project_dir.join(relative).exists())
        .map(|relative| relative.to_string())
        .collect()
}

/// Check the standard project layout
pub fn verify_structure(project_dir: &Path) -> Vec<String> {
    missing_paths(project_dir, &REQUIRED_PATHS)
}
