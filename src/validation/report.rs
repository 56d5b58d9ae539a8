//! Result accumulation and reporting.
//!
//! [`Findings`] is the accumulator for one validation pass. It is passed by
//! value into each rule and handed back with the rule's messages appended,
//! so every pass starts from an empty value and nothing leaks between runs.

use super::fields::Verdict;
use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Messages collected during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
    notes: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blocking error
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Append an advisory warning
    pub fn warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }

    /// Append an informational note (a check that passed)
    pub fn note(mut self, message: impl Into<String>) -> Self {
        self.notes.push(message.into());
        self
    }

    /// Append everything a field rule produced
    pub fn absorb(mut self, verdict: Verdict) -> Self {
        self.errors.extend(verdict.errors);
        self.warnings.extend(verdict.warnings);
        self
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Freeze the accumulator into a report
    pub fn into_outcome(self) -> ValidationOutcome {
        ValidationOutcome {
            success: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            notes: self.notes,
        }
    }
}

/// Overall state of a validation report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// No errors, no warnings
    Clean,
    /// No errors, at least one warning
    Warnings,
    /// At least one error
    Failed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Clean => write!(f, "clean"),
            ReportStatus::Warnings => write!(f, "warnings"),
            ReportStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Final result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// True exactly when `errors` is empty
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Passed checks, for display only
    pub notes: Vec<String>,
}

impl ValidationOutcome {
    /// A report with nothing to say
    pub fn passed() -> Self {
        Findings::new().into_outcome()
    }

    pub fn status(&self) -> ReportStatus {
        if !self.errors.is_empty() {
            ReportStatus::Failed
        } else if !self.warnings.is_empty() {
            ReportStatus::Warnings
        } else {
            ReportStatus::Clean
        }
    }

    /// Human-readable one-line summary
    pub fn summary_line(&self) -> String {
        match self.status() {
            ReportStatus::Clean => "All validations passed successfully!".to_string(),
            ReportStatus::Warnings => format!(
                "Validation passed with {} {}",
                self.warnings.len(),
                plural(self.warnings.len(), "warning", "warnings")
            ),
            ReportStatus::Failed if self.warnings.is_empty() => format!(
                "Found {} validation {}",
                self.errors.len(),
                plural(self.errors.len(), "error", "errors")
            ),
            ReportStatus::Failed => format!(
                "Found {} validation {} and {} {}",
                self.errors.len(),
                plural(self.errors.len(), "error", "errors"),
                self.warnings.len(),
                plural(self.warnings.len(), "warning", "warnings")
            ),
        }
    }

    /// Emit the summary through tracing at a level matching the status
    pub fn log_summary(&self) {
        let summary = self.summary_line();
        match self.status() {
            ReportStatus::Clean => info!(status = %self.status(), "{}", summary),
            ReportStatus::Warnings => {
                warn!(status = %self.status(), warnings = self.warnings.len(), "{}", summary)
            }
            ReportStatus::Failed => error!(
                status = %self.status(),
                errors = self.errors.len(),
                warnings = self.warnings.len(),
                "{}",
                summary
            ),
        }
    }

    /// Split into `(success, errors, warnings)`
    pub fn into_parts(self) -> (bool, Vec<String>, Vec<String>) {
        (self.success, self.errors, self.warnings)
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
