//! Validation pass tests.
//!
//! Full validator runs over realistic contexts with a mock host.

use crate::mocks::{java_broken, java_ok, MockHost, MOCK_HOME};
use android_template_hook::platform::CommandOutcome;
use android_template_hook::validation::environment::ProbeConfig;
use android_template_hook::{Context, FullValidator, TemplateValidator, ValidationOutcome};

const VALID_CONTEXT: &str = r#"{
    "project_name": "MyApp",
    "package_name": "com.example.myapp",
    "min_sdk": "24",
    "target_sdk": "34",
    "compile_sdk": "34",
    "java_version": "17",
    "version_name": "1.0.0"
}"#;

fn context_with(overrides: &[(&str, &str)], removed: &[&str]) -> Context {
    let base = Context::from_json_str(VALID_CONTEXT).unwrap();
    base.iter()
        .filter(|(k, _)| !removed.contains(k))
        .map(|(k, v)| {
            let value = overrides
                .iter()
                .find(|(key, _)| key == &k)
                .map(|(_, value)| *value)
                .unwrap_or(v);
            (k.to_string(), value.to_string())
        })
        .chain(
            overrides
                .iter()
                .filter(|(key, _)| !base.contains(key))
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .collect()
}

fn validate(host: MockHost, context: &Context) -> ValidationOutcome {
    FullValidator::new(host, ProbeConfig::default()).validate(context)
}

#[test]
fn test_valid_context_on_healthy_host() {
    let outcome = validate(MockHost::healthy(), &context_with(&[], &[]));
    let (success, errors, warnings) = outcome.clone().into_parts();
    assert!(success);
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
    assert_eq!(
        outcome.notes,
        vec![
            "Java is installed (version 17.0.2)".to_string(),
            format!("Android SDK found at: {}/Android/Sdk", MOCK_HOME),
            "Android Studio is installed".to_string(),
        ]
    );
}

#[test]
fn test_valid_context_on_bare_host_only_advisory_warnings() {
    let outcome = validate(MockHost::bare(), &context_with(&[], &[]));
    assert!(outcome.success);
    assert!(outcome.errors.is_empty());
    assert_eq!(
        outcome.warnings,
        vec![
            "Android SDK not found in common locations",
            "Android Studio not found in common locations"
        ]
    );
}

#[test]
fn test_reserved_project_name_warns_but_succeeds() {
    let outcome = validate(MockHost::healthy(), &context_with(&[("project_name", "android")], &[]));
    assert!(outcome.success);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("reserved"));
}

#[test]
fn test_bad_package_name_fails_naming_field() {
    let outcome = validate(
        MockHost::healthy(),
        &context_with(&[("package_name", "Com.Example")], &[]),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("package_name"));
    assert!(outcome.errors[0].contains("Com.Example"));
}

#[test]
fn test_missing_version_name() {
    let outcome = validate(MockHost::healthy(), &context_with(&[], &["version_name"]));
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["Required field 'version_name' is missing"]);
}

#[test]
fn test_all_field_errors_collected_not_fail_fast() {
    let outcome = validate(
        MockHost::healthy(),
        &context_with(
            &[
                ("project_name", "9lives"),
                ("min_sdk", "19"),
                ("java_version", "eleven"),
                ("author_email", "nobody"),
            ],
            &["compile_sdk"],
        ),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 5);
    assert!(outcome.errors[0].starts_with("project_name: "));
    assert!(outcome.errors[1].starts_with("min_sdk: "));
    assert_eq!(outcome.errors[2], "Required field 'compile_sdk' is missing");
    assert!(outcome.errors[3].starts_with("java_version: "));
    assert!(outcome.errors[4].starts_with("author_email: "));
}

#[test]
fn test_environment_runs_even_when_fields_fail() {
    let host = MockHost::without_java();
    let outcome = validate(host.clone(), &Context::new());
    assert_eq!(host.command_count(), 1);
    assert_eq!(outcome.errors.len(), 8);
    assert_eq!(outcome.errors.last().unwrap(), "Java is not installed");
}

#[test]
fn test_runtime_failures_are_blocking() {
    let broken = validate(MockHost::healthy().with_runtime(java_broken()), &context_with(&[], &[]));
    assert!(!broken.success);
    assert_eq!(broken.errors, vec!["Java is not properly installed"]);

    let hung = validate(
        MockHost::healthy().with_runtime(CommandOutcome::TimedOut { after_ms: 10_000 }),
        &context_with(&[], &[]),
    );
    assert_eq!(hung.errors, vec!["Java is not installed"]);
}

#[test]
fn test_android_home_takes_precedence() {
    let host = MockHost::healthy()
        .with_env("ANDROID_HOME", "/opt/android-sdk")
        .with_path("/opt/android-sdk");
    let outcome = validate(host, &context_with(&[], &[]));
    assert!(outcome
        .notes
        .contains(&"Android SDK found at: /opt/android-sdk".to_string()));
}

#[test]
fn test_empty_email_is_advisory() {
    let outcome = validate(MockHost::healthy(), &context_with(&[("author_email", "")], &[]));
    assert!(outcome.success);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("optional but recommended"));
}

#[test]
fn test_sdk_ordering_advisory() {
    let outcome = validate(
        MockHost::healthy(),
        &context_with(&[("min_sdk", "34"), ("target_sdk", "30"), ("compile_sdk", "30")], &[]),
    );
    assert!(outcome.success);
    assert_eq!(
        outcome.warnings,
        vec!["min_sdk (34) is higher than target_sdk (30)"]
    );
}

#[test]
fn test_numeric_json_values_validate() {
    let context = Context::from_json_str(
        r#"{"project_name": "MyApp", "package_name": "com.example.myapp",
            "min_sdk": 24, "target_sdk": 34, "compile_sdk": 34,
            "java_version": 17, "version_name": "1.0.0"}"#,
    )
    .unwrap();
    assert!(validate(MockHost::healthy(), &context).success);
}

#[test]
fn test_idempotent_and_order_stable() {
    let context = context_with(
        &[("package_name", "bad-name"), ("version_name", "v1"), ("project_name", "test")],
        &["target_sdk"],
    );
    let validator = FullValidator::new(MockHost::bare(), ProbeConfig::default());
    let first = validator.validate(&context);
    let second = validator.validate(&context);
    assert_eq!(first, second);
    assert_eq!(first.errors.len(), 2);
    assert_eq!(first.warnings.len(), 4);
}

#[test]
fn test_installed_java_older_than_requested() {
    let host = MockHost::healthy().with_runtime(java_ok("11.0.21"));
    let outcome = validate(host, &context_with(&[], &[]));
    assert!(outcome.success);
    assert_eq!(
        outcome.warnings,
        vec!["java_version: Installed Java 11.0.21 is older than the requested Java 17"]
    );

    let host = MockHost::healthy().with_runtime(java_ok("11.0.21"));
    let outcome = validate(host, &context_with(&[("java_version", "11")], &[]));
    assert!(outcome.warnings.is_empty());
}
