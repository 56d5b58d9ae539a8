//! Post-generation hook orchestration.
//!
//! Runs once in a freshly generated project:
//! 1. Load the template context
//! 2. Validate it (fields, then environment)
//! 3. Verify the project tree
//! 4. Write the requirements document
//! 5. Remove the context file
//! 6. Print next steps and project information
//!
//! # Failure handling
//!
//! - Missing/unreadable context: `Err(HookError)` (setup fault), unless
//!   missing contexts are allowed, in which case validation is skipped
//! - Validation errors: `HookOutcome::ValidationFailed`, after every error
//!   and warning has been printed
//! - Missing project files: `HookOutcome::StructureIncomplete`
//! - Requirements generation or context removal failing: printed as a
//!   warning, the run carries on
//!
//! On either failure outcome the context file is kept unless
//! `cleanup_on_failure` is set.

use super::requirements::RequirementsGenerator;
use super::structure;
use crate::cli::output::Console;
use crate::context::Context;
use crate::validation::report::ValidationOutcome;
use crate::validation::TemplateValidator;
use crate::{HookConfig, HookError, EXIT_VALIDATION_FAILED};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, info_span, warn};

/// How a hook run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Every step finished; warnings are advisory
    Completed { warnings: Vec<String> },
    /// The template values did not validate
    ValidationFailed {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
    /// The generated tree is missing required paths
    StructureIncomplete { missing: Vec<String> },
}

impl HookOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HookOutcome::Completed { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            EXIT_VALIDATION_FAILED
        }
    }
}

/// One post-generation run
pub struct PostGenHook<W: Write> {
    config: HookConfig,
    validator: Box<dyn TemplateValidator>,
    requirements: Box<dyn RequirementsGenerator>,
    console: Console<W>,
}

impl<W: Write> PostGenHook<W> {
    pub fn new(
        config: HookConfig,
        validator: Box<dyn TemplateValidator>,
        requirements: Box<dyn RequirementsGenerator>,
        console: Console<W>,
    ) -> Self {
        PostGenHook {
            config,
            validator,
            requirements,
            console,
        }
    }

    /// Run every step and report how it ended
    pub fn run(&mut self) -> Result<HookOutcome, HookError> {
        let project_dir = self.config.project_dir.clone();
        let project_name = project_display_name(&project_dir);
        let _span = info_span!("post_gen_hook", project = %project_name).entered();

        self.console.banner("Android Hello World Template Generation");
        self.console
            .info(&format!("Project directory: {}", project_dir.display()));
        self.console.info(&format!("Project name: {}", project_name));

        let context_path = self.config.context_path();
        let loaded = self.load_context(&context_path)?;

        let mut warnings = Vec::new();
        if let Some(context) = &loaded {
            self.console.section("Validating Template Inputs");
            let outcome = self.validator.validate(context);
            self.print_validation(&outcome);

            if !outcome.success {
                self.console.error("Template validation failed!");
                self.console
                    .info("Please fix the errors and regenerate the template.");
                self.after_failure(&context_path);
                self.console.flush();
                return Ok(HookOutcome::ValidationFailed {
                    errors: outcome.errors,
                    warnings: outcome.warnings,
                });
            }

            if !outcome.warnings.is_empty() {
                self.console
                    .warning("Template generated with warnings. Please review the list above.");
            }
            self.console
                .success("Template validation completed successfully!");
            warnings = outcome.warnings;
        }
        let context = loaded.unwrap_or_default();

        self.console.section("Project Setup");

        self.console.step(1, 3, "Verifying project structure");
        let missing = structure::verify_structure(&project_dir);
        if !missing.is_empty() {
            warn!(missing = ?missing, "project structure incomplete");
            self.console.error("Missing required files:");
            for path in &missing {
                self.console.item(path);
            }
            self.after_failure(&context_path);
            self.console.flush();
            return Ok(HookOutcome::StructureIncomplete { missing });
        }
        self.console.success("Project structure verified");

        self.console.step(2, 3, "Generating requirements file");
        self.write_requirements(&context);

        self.console.step(3, 3, "Cleaning up temporary files");
        self.remove_context(&context_path);

        self.console.banner("Generation Complete");
        self.console.success(&format!(
            "Android project '{}' has been successfully generated!",
            project_name
        ));
        self.print_next_steps(&project_name);
        if !context.is_empty() {
            self.print_project_info(&context);
        }
        self.console.info("");
        self.console.info("Happy Android Development!");
        self.console.flush();

        info!(warnings = warnings.len(), "hook completed");
        Ok(HookOutcome::Completed { warnings })
    }

    /// Recover the console, mostly for tests capturing output
    pub fn into_console(self) -> Console<W> {
        self.console
    }

    fn load_context(&mut self, path: &Path) -> Result<Option<Context>, HookError> {
        self.console.section("Loading Template Context");
        match Context::load(path) {
            Ok(context) => {
                info!(path = %path.display(), fields = context.len(), "context loaded");
                self.console.success("Template context loaded successfully");
                Ok(Some(context))
            }
            Err(HookError::ContextNotFound { .. }) if self.config.allow_missing_context => {
                warn!(path = %path.display(), "context file missing, validation skipped");
                self.console
                    .warning("Template context file not found, skipping validation");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn print_validation(&mut self, outcome: &ValidationOutcome) {
        for note in &outcome.notes {
            self.console.success(note);
        }
        for error in &outcome.errors {
            self.console.error(error);
        }
        for warning in &outcome.warnings {
            self.console.warning(warning);
        }

        let summary = outcome.summary_line();
        if !outcome.errors.is_empty() {
            self.console.error(&summary);
        } else if !outcome.warnings.is_empty() {
            self.console.warning(&summary);
        } else {
            self.console.success(&summary);
        }

        if self.config.json {
            if let Ok(json) = serde_json::to_string_pretty(outcome) {
                self.console.info(&json);
            }
        }
    }

    fn write_requirements(&mut self, context: &Context) {
        let path = self.config.requirements_path();
        let result = self.requirements.generate(context).and_then(|text| {
            fs::write(&path, text).map_err(|source| HookError::Io {
                context: format!("writing {}", path.display()),
                source,
            })
        });

        match result {
            Ok(()) => self.console.success(&format!(
                "Requirements file generated: {}",
                self.config.requirements_file
            )),
            Err(e) => {
                warn!(error = %e, "requirements file not generated");
                self.console
                    .warning(&format!("Could not generate requirements file: {}", e));
            }
        }
    }

    fn remove_context(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match fs::remove_file(path) {
            Ok(()) => self.console.success("Temporary files cleaned up"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "context file not removed");
                self.console
                    .warning(&format!("Could not remove {}: {}", path.display(), e));
            }
        }
    }

    fn after_failure(&mut self, context_path: &Path) {
        if self.config.cleanup_on_failure {
            self.remove_context(context_path);
        } else if context_path.exists() {
            self.console.info(&format!(
                "Context file kept for inspection: {}",
                context_path.display()
            ));
        }
    }

    fn print_next_steps(&mut self, project_name: &str) {
        self.console.section("Next Steps");
        self.console.info("1. Open the project in Android Studio:");
        self.console.info(&format!("   cd {}", project_name));
        self.console
            .info("   # Open Android Studio and select 'Open an existing project'");
        self.console.info("2. Sync the project with Gradle files");
        self.console.info("3. Build and run the project");
        self.console.info(&format!(
            "4. Check {} for environment details",
            self.config.requirements_file
        ));
    }

    fn print_project_info(&mut self, context: &Context) {
        self.console.section("Project Information");
        let rows = [
            ("App Name", "app_name"),
            ("Package", "package_name"),
            ("Version", "version_name"),
            ("Author", "author_name"),
            ("Email", "author_email"),
            ("Min SDK", "min_sdk"),
            ("Target SDK", "target_sdk"),
        ];
        for (label, key) in rows {
            let value = context.get_or(key, "Unknown").to_string();
            self.console.field(label, &value);
        }
    }
}

/// Directory name of the project, resolving `.` and relative paths
pub fn project_display_name(project_dir: &Path) -> String {
    let resolved = fs::canonicalize(project_dir).unwrap_or_else(|_| project_dir.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}
