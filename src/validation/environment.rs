//! Host environment probing.
//!
//! Three best-effort checks:
//! - Java runtime: `java -version` with a timeout. The only check that can
//!   block generation, because nothing builds without it.
//! - Android SDK: first existing conventional install location.
//! - Android Studio: first existing conventional install location.
//!
//! SDK and IDE absence is common on fresh machines and becomes a warning.
//! No function here returns an error; every failure lands in [`Findings`].

use super::report::Findings;
use crate::platform::{CommandOutcome, Host};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Default time allowed for the runtime version command
pub const DEFAULT_RUNTIME_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime probe settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Program invoked with `-version`
    pub runtime_program: String,
    /// Upper bound on how long the program may run
    pub runtime_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            runtime_program: "java".to_string(),
            runtime_timeout: DEFAULT_RUNTIME_TIMEOUT,
        }
    }
}

/// Run all environment checks in order: runtime, SDK, IDE
///
/// `required_java` is the Java level the project asks for, when known.
pub fn probe_environment(
    host: &dyn Host,
    config: &ProbeConfig,
    required_java: Option<u32>,
    findings: Findings,
) -> Findings {
    let findings = check_runtime(host, config, required_java, findings);
    let findings = check_android_sdk(host, findings);
    check_android_studio(host, findings)
}

/// Check that the Java runtime is installed and answers `-version`.
///
/// An installed runtime older than `required_java` is a warning.
pub fn check_runtime(
    host: &dyn Host,
    config: &ProbeConfig,
    required_java: Option<u32>,
    findings: Findings,
) -> Findings {
    let outcome = host.run_command(&config.runtime_program, &["-version"], config.runtime_timeout);
    debug!(program = %config.runtime_program, outcome = ?outcome, "runtime probe");

    match &outcome {
        CommandOutcome::Exited { code: Some(0), .. } => {
            let version = outcome.output_text().and_then(|text| parse_java_version(&text));
            match version {
                Some(version) => {
                    let findings =
                        findings.note(format!("Java is installed (version {})", version));
                    match (required_java, java_major(&version)) {
                        (Some(required), Some(major)) if major < required => findings.warning(
                            format!(
                                "java_version: Installed Java {} is older than the requested Java {}",
                                version, required
                            ),
                        ),
                        _ => findings,
                    }
                }
                None => findings.note("Java is installed"),
            }
        }
        CommandOutcome::Exited { .. } => findings.error("Java is not properly installed"),
        CommandOutcome::TimedOut { .. }
        | CommandOutcome::NotFound
        | CommandOutcome::SpawnFailed { .. } => findings.error("Java is not installed"),
    }
}

/// Check conventional Android SDK locations
pub fn check_android_sdk(host: &dyn Host, findings: Findings) -> Findings {
    match first_existing(host, sdk_candidates(host)) {
        Some(path) => findings.note(format!("Android SDK found at: {}", path.display())),
        None => findings.warning("Android SDK not found in common locations"),
    }
}

/// Check conventional Android Studio locations
pub fn check_android_studio(host: &dyn Host, findings: Findings) -> Findings {
    match first_existing(host, studio_candidates(host)) {
        Some(path) => {
            debug!(path = %path.display(), "Android Studio located");
            findings.note("Android Studio is installed")
        }
        None => findings.warning("Android Studio not found in common locations"),
    }
}

/// Android SDK locations in probe order.
///
/// `ANDROID_HOME` and `ANDROID_SDK_ROOT` come first when set; the rest are
/// the default install paths on macOS, Linux and Windows.
pub fn sdk_candidates(host: &dyn Host) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = ["ANDROID_HOME", "ANDROID_SDK_ROOT"]
        .iter()
        .filter_map(|name| host.env_var(name))
        .map(PathBuf::from)
        .collect();

    if let Some(home) = host.home_dir() {
        candidates.push(home.join("Library/Android/sdk"));
        candidates.push(home.join("Android/Sdk"));
        if let Some(user) = home.file_name() {
            candidates.push(
                PathBuf::from("C:/Users")
                    .join(user)
                    .join("AppData/Local/Android/Sdk"),
            );
        }
    }

    candidates
}

/// Android Studio locations in probe order
pub fn studio_candidates(host: &dyn Host) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("/Applications/Android Studio.app")];
    if let Some(home) = host.home_dir() {
        candidates.push(home.join("android-studio"));
    }
    candidates.push(PathBuf::from("/opt/android-studio"));
    candidates.push(PathBuf::from("C:/Program Files/Android/Android Studio"));
    candidates
}

/// First candidate that exists on the host
pub fn first_existing(host: &dyn Host, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| {
        let exists = host.path_exists(path);
        debug!(path = %path.display(), exists, "probe path");
        exists
    })
}

/// Detected runtime version, for documents that want to mention it
pub fn detect_runtime_version(host: &dyn Host, config: &ProbeConfig) -> Option<String> {
    let outcome = host.run_command(&config.runtime_program, &["-version"], config.runtime_timeout);
    if !outcome.succeeded() {
        return None;
    }
    outcome.output_text().and_then(|text| parse_java_version(&text))
}

/// Extract the version from `java -version` output.
///
/// Handles `openjdk version "17.0.2" 2022-01-18` and the legacy
/// `java version "1.8.0_292"` forms: the first double-quoted token wins.
pub fn parse_java_version(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        if !line.contains("version") {
            return None;
        }
        let start = line.find('"')? + 1;
        let len = line[start..].find('"')?;
        let version = &line[start..start + len];
        if version.is_empty() {
            None
        } else {
            Some(version.to_string())
        }
    })
}

/// Major release of a Java version string (`1.8.0_292` → 8, `17.0.2` → 17)
pub fn java_major(version: &str) -> Option<u32> {
    let mut parts = version.split(|c: char| c == '.' || c == '_' || c == '-' || c == '+');
    let first: u32 = parts.next()?.parse().ok()?;
    if first == 1 {
        parts.next()?.parse().ok()
    } else {
        Some(first)
    }
}
