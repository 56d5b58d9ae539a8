//! Template input validation.
//!
//! This module contains the validation pass run over one template context:
//! - Fields: per-field rules for names, SDK levels and versions
//! - Environment: Java runtime, Android SDK and Android Studio detection
//! - Report: the accumulator and the final outcome
//!
//! # Ordering
//!
//! Required fields are checked in the order of
//! [`fields::REQUIRED_FIELDS`], then the optional author email, then the
//! SDK ordering advisory, then the environment. Environment probing always
//! runs, even when field checks failed. For a fixed context and host the
//! messages come out in the same order on every run.

pub mod environment;
pub mod fields;
pub mod report;

use crate::context::Context;
use crate::platform::{Host, SystemHost};
use crate::HookConfig;
use environment::ProbeConfig;
use report::{Findings, ValidationOutcome};
use tracing::debug;

/// Something that can judge a template context.
pub trait TemplateValidator {
    fn validate(&self, context: &Context) -> ValidationOutcome;
}

/// Runs every field rule and the environment probe.
#[derive(Debug, Clone)]
pub struct FullValidator<H: Host = SystemHost> {
    host: H,
    probe: ProbeConfig,
    probe_environment: bool,
}

impl FullValidator<SystemHost> {
    /// Validator for the machine the hook runs on, default probe settings
    pub fn system() -> Self {
        FullValidator::new(SystemHost, ProbeConfig::default())
    }
}

impl<H: Host> FullValidator<H> {
    pub fn new(host: H, probe: ProbeConfig) -> Self {
        FullValidator {
            host,
            probe,
            probe_environment: true,
        }
    }

    /// Turn host probing on or off (fields are always checked)
    pub fn with_environment(mut self, enabled: bool) -> Self {
        self.probe_environment = enabled;
        self
    }
}

impl<H: Host> TemplateValidator for FullValidator<H> {
    fn validate(&self, context: &Context) -> ValidationOutcome {
        let findings = check_fields(context, Findings::new());

        let findings = if self.probe_environment {
            environment::probe_environment(
                &self.host,
                &self.probe,
                required_java(context),
                findings,
            )
        } else {
            debug!("environment probing disabled");
            findings
        };

        let outcome = findings.into_outcome();
        outcome.log_summary();
        outcome
    }
}

/// Accepts every context without looking at it.
///
/// Used when full validation is unwanted, e.g. when re-running the hook on a
/// project whose values are already known to be good.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveValidator;

impl TemplateValidator for PermissiveValidator {
    fn validate(&self, _context: &Context) -> ValidationOutcome {
        debug!("permissive validator: skipping all checks");
        ValidationOutcome::passed()
    }
}

/// Run all field rules over `context`, appending to `findings`
pub fn check_fields(context: &Context, findings: Findings) -> Findings {
    let mut findings = findings;
    let mut all_sdk_levels_valid = true;

    for (field, rule) in fields::REQUIRED_FIELDS {
        match context.get(field) {
            Some(value) => {
                let verdict = rule(field, value);
                if !verdict.accepted() {
                    debug!(field, value, "validation failed");
                    if field.ends_with("_sdk") {
                        all_sdk_levels_valid = false;
                    }
                }
                findings = findings.absorb(verdict);
            }
            None => {
                if field.ends_with("_sdk") {
                    all_sdk_levels_valid = false;
                }
                findings = findings.error(fields::missing_field(field));
            }
        }
    }

    if let Some(email) = context.get(fields::AUTHOR_EMAIL) {
        findings = findings.absorb(fields::author_email(fields::AUTHOR_EMAIL, email));
    }

    if all_sdk_levels_valid {
        if let (Some(min), Some(target), Some(compile)) = (
            context.get("min_sdk"),
            context.get("target_sdk"),
            context.get("compile_sdk"),
        ) {
            findings = findings.absorb(fields::sdk_ordering(min, target, compile));
        }
    }

    findings
}

/// Pick the validator for this run
pub fn select_validator(config: &HookConfig) -> Box<dyn TemplateValidator> {
    if config.permissive {
        Box::new(PermissiveValidator)
    } else {
        Box::new(
            FullValidator::new(SystemHost, config.probe.clone())
                .with_environment(!config.skip_environment),
        )
    }
}

/// Java level requested by the context, when it is a valid one
fn required_java(context: &Context) -> Option<u32> {
    let (min, max) = fields::JAVA_RANGE;
    context
        .get("java_version")
        .and_then(|value| fields::parse_level(value).ok())
        .filter(|level| (min..=max).contains(level))
        .and_then(|level| u32::try_from(level).ok())
}

/// Validate `context` against the real host.
///
/// Returns `(success, errors, warnings)`.
pub fn validate_template_inputs(context: &Context) -> (bool, Vec<String>, Vec<String>) {
    FullValidator::system().validate(context).into_parts()
}
