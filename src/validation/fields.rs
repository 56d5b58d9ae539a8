//! Template field rules.
//!
//! Each rule inspects one value and returns a [`Verdict`]. Rules are pure:
//! they never touch the host, never panic on bad input, and report
//! malformed values as errors in the verdict. Every message starts with the
//! context key it concerns.

use once_cell::sync::Lazy;
use regex::Regex;
use std::num::IntErrorKind;

/// Longest accepted project name, in characters
pub const PROJECT_NAME_MAX_LEN: usize = 50;

/// Longest accepted package name, in characters
pub const PACKAGE_NAME_MAX_LEN: usize = 100;

/// Accepted Android API level range (inclusive)
pub const SDK_RANGE: (i64, i64) = (21, 35);

/// Accepted Java language level range (inclusive)
pub const JAVA_RANGE: (i64, i64) = (8, 21);

/// Project names that clash with Android or Gradle conventions
pub const RESERVED_PROJECT_NAMES: [&str; 6] = ["android", "test", "main", "java", "kotlin", "gradle"];

static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid project name pattern"));

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").expect("valid package name pattern")
});

static SEMVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[a-zA-Z0-9.-]+)?(\+[a-zA-Z0-9.-]+)?$").expect("valid semver pattern")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Signature shared by every field rule: `(field, value) -> verdict`
pub type FieldRule = fn(&str, &str) -> Verdict;

/// Required fields and their rules, in check order.
pub const REQUIRED_FIELDS: [(&str, FieldRule); 7] = [
    ("project_name", project_name),
    ("package_name", package_name),
    ("min_sdk", sdk_version),
    ("target_sdk", sdk_version),
    ("compile_sdk", sdk_version),
    ("java_version", java_version),
    ("version_name", version_name),
];

/// Optional field checked only when present
pub const AUTHOR_EMAIL: &str = "author_email";

/// What a rule decided about one value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Verdict {
    pub fn accept() -> Self {
        Self::default()
    }

    pub fn reject(message: impl Into<String>) -> Self {
        Verdict {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }

    /// True when the value raised no errors (warnings allowed)
    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Message for a required field absent from the context
pub fn missing_field(field: &str) -> String {
    format!("Required field '{}' is missing", field)
}

/// Project name: letter first, then letters/digits/underscores, at most 50.
///
/// A valid name that matches a reserved word (case-insensitive) is accepted
/// with a warning.
pub fn project_name(field: &str, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::reject(format!("{}: Project name cannot be empty", field));
    }

    if !PROJECT_NAME.is_match(value) {
        return Verdict::reject(format!(
            "{}: Project name '{}' must start with a letter and contain only letters, numbers, and underscores",
            field, value
        ));
    }

    let len = value.chars().count();
    if len > PROJECT_NAME_MAX_LEN {
        return Verdict::reject(format!(
            "{}: Project name must be {} characters or less (got {})",
            field, PROJECT_NAME_MAX_LEN, len
        ));
    }

    let lowered = value.to_lowercase();
    if RESERVED_PROJECT_NAMES.contains(&lowered.as_str()) {
        return Verdict::accept().with_warning(format!(
            "{}: Project name '{}' might conflict with Android reserved words",
            field, value
        ));
    }

    Verdict::accept()
}

/// Package name: dot-separated lowercase Java identifiers, at most 100.
pub fn package_name(field: &str, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::reject(format!("{}: Package name cannot be empty", field));
    }

    if !PACKAGE_NAME.is_match(value) {
        return Verdict::reject(format!(
            "{}: Package name '{}' must follow Java package naming conventions (e.g., com.example.app)",
            field, value
        ));
    }

    let len = value.chars().count();
    if len > PACKAGE_NAME_MAX_LEN {
        return Verdict::reject(format!(
            "{}: Package name must be {} characters or less (got {})",
            field, PACKAGE_NAME_MAX_LEN, len
        ));
    }

    Verdict::accept()
}

/// Android API level within [`SDK_RANGE`]
pub fn sdk_version(field: &str, value: &str) -> Verdict {
    integer_in_range(field, value, "SDK version", SDK_RANGE)
}

/// Java language level within [`JAVA_RANGE`]
pub fn java_version(field: &str, value: &str) -> Verdict {
    integer_in_range(field, value, "Java version", JAVA_RANGE)
}

/// Version name: must be non-empty; semantic versioning is recommended.
pub fn version_name(field: &str, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::reject(format!("{}: Version name cannot be empty", field));
    }

    if !SEMVER.is_match(value) {
        return Verdict::accept().with_warning(format!(
            "{}: Version name '{}' should follow semantic versioning (e.g., 1.0.0)",
            field, value
        ));
    }

    Verdict::accept()
}

/// Author email: optional, but must look like `local@domain.tld` if given.
pub fn author_email(field: &str, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::accept().with_warning(format!(
            "{}: Email address is empty (optional but recommended)",
            field
        ));
    }

    if !EMAIL.is_match(value) {
        return Verdict::reject(format!(
            "{}: Invalid email address format '{}'",
            field, value
        ));
    }

    Verdict::accept()
}

/// Parse an integer field the way the template documents it: surrounding
/// whitespace is ignored and a leading sign is allowed.
pub fn parse_level(value: &str) -> Result<i64, IntErrorKind> {
    value.trim().parse::<i64>().map_err(|e| e.kind().clone())
}

/// Warn when SDK levels are individually valid but inconsistently ordered.
///
/// Returns an empty verdict unless all three levels parse.
pub fn sdk_ordering(min_sdk: &str, target_sdk: &str, compile_sdk: &str) -> Verdict {
    let (Ok(min), Ok(target), Ok(compile)) = (
        parse_level(min_sdk),
        parse_level(target_sdk),
        parse_level(compile_sdk),
    ) else {
        return Verdict::accept();
    };

    let mut verdict = Verdict::accept();
    if min > target {
        verdict = verdict.with_warning(format!(
            "min_sdk ({}) is higher than target_sdk ({})",
            min, target
        ));
    }
    if target > compile {
        verdict = verdict.with_warning(format!(
            "target_sdk ({}) is higher than compile_sdk ({})",
            target, compile
        ));
    }
    verdict
}

fn integer_in_range(field: &str, value: &str, label: &str, (min, max): (i64, i64)) -> Verdict {
    match parse_level(value) {
        Ok(n) if (min..=max).contains(&n) => Verdict::accept(),
        Ok(n) => Verdict::reject(format!(
            "{}: {} must be between {} and {} (got {})",
            field, label, min, max, n
        )),
        Err(IntErrorKind::PosOverflow) | Err(IntErrorKind::NegOverflow) => {
            Verdict::reject(format!(
                "{}: {} must be between {} and {} (got {})",
                field, label, min, max, value.trim()
            ))
        }
        Err(_) => Verdict::reject(format!(
            "{}: {} must be a valid integer (got '{}')",
            field, label, value
        )),
    }
}
