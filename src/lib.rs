//! android-template-hook library
//!
//! Post-generation hook for the Android Hello World project template.
//!
//! After the template engine renders a project, the hook runs once in the
//! generated project root and:
//! - Validates the substituted template values (names, SDK levels, versions)
//! - Probes the host for a Java runtime, the Android SDK and Android Studio
//! - Verifies the generated file tree
//! - Writes a REQUIREMENTS.md derived from the context
//! - Removes the temporary context file
//!
//! # Example
//!
//! ```no_run
//! use android_template_hook::context::Context;
//! use android_template_hook::validation::{FullValidator, TemplateValidator};
//!
//! let context = Context::from_json_str(r#"{"project_name": "MyApp"}"#).unwrap();
//! let outcome = FullValidator::system().validate(&context);
//! let (success, errors, warnings) = outcome.into_parts();
//! println!("success={} errors={} warnings={}", success, errors.len(), warnings.len());
//! ```

pub mod cli;
pub mod context;
pub mod engine;
pub mod platform;
pub mod validation;
pub mod version;

use cli::args::Args;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use validation::environment::ProbeConfig;

// Re-exports for public API
pub use context::Context;
pub use engine::hook::{HookOutcome, PostGenHook};
pub use validation::report::ValidationOutcome;
pub use validation::{FullValidator, PermissiveValidator, TemplateValidator};

/// File the template engine drops into the project root with the chosen values.
pub const DEFAULT_CONTEXT_FILE: &str = "cookiecutter_context.json";

/// File the hook writes the derived requirements document to.
pub const DEFAULT_REQUIREMENTS_FILE: &str = "REQUIREMENTS.md";

/// Exit code for a run whose validation or structure check failed.
pub const EXIT_VALIDATION_FAILED: u8 = 1;

/// Exit code for setup faults (missing context, bad arguments).
pub const EXIT_SETUP_FAULT: u8 = 3;

/// Error types for hook setup and I/O.
///
/// Invalid template values are never reported through this type; they are
/// collected into a [`ValidationOutcome`].
#[derive(Debug, Error)]
pub enum HookError {
    /// The context file does not exist in the project root
    #[error("template context file not found: {}", path.display())]
    ContextNotFound { path: PathBuf },

    /// The context file exists but could not be read
    #[error("failed to read template context {}: {source}", path.display())]
    ContextRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The context file is not valid JSON
    #[error("template context is not valid JSON: {source}")]
    ContextParse {
        #[source]
        source: serde_json::Error,
    },

    /// The context JSON is valid but not an object
    #[error("template context must be a JSON object, found {found}")]
    ContextShape { found: String },

    /// Filesystem operation failed
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The requirements generator could not produce a document
    #[error("requirements generation failed: {message}")]
    Requirements { message: String },
}

/// Configuration for one hook run.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Root of the generated project
    pub project_dir: PathBuf,
    /// Context file name, relative to `project_dir`
    pub context_file: String,
    /// Requirements document name, relative to `project_dir`
    pub requirements_file: String,
    /// Use the permissive validator instead of the full one
    pub permissive: bool,
    /// Continue with an empty context when the context file is absent
    pub allow_missing_context: bool,
    /// Delete the context file even when the run fails
    pub cleanup_on_failure: bool,
    /// Skip host environment probing
    pub skip_environment: bool,
    /// Colored console output
    pub color: bool,
    /// Print the validation outcome as JSON after the report
    pub json: bool,
    /// Runtime probe settings
    pub probe: ProbeConfig,
}

impl Default for HookConfig {
    fn default() -> Self {
        HookConfig {
            project_dir: PathBuf::from("."),
            context_file: DEFAULT_CONTEXT_FILE.to_string(),
            requirements_file: DEFAULT_REQUIREMENTS_FILE.to_string(),
            permissive: false,
            allow_missing_context: false,
            cleanup_on_failure: false,
            skip_environment: false,
            color: true,
            json: false,
            probe: ProbeConfig::default(),
        }
    }
}

impl HookConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        HookConfig {
            project_dir: args.project_dir.clone(),
            context_file: args.context_file.clone(),
            requirements_file: args.requirements_file.clone(),
            permissive: args.permissive,
            allow_missing_context: args.allow_missing_context,
            cleanup_on_failure: args.cleanup_on_failure,
            skip_environment: args.skip_environment,
            color: !args.no_color && std::env::var_os("NO_COLOR").is_none(),
            json: args.json,
            probe: ProbeConfig {
                runtime_program: args.java.clone(),
                runtime_timeout: std::time::Duration::from_secs(args.timeout_secs),
            },
        }
    }

    /// Absolute-or-relative path of the context file
    pub fn context_path(&self) -> PathBuf {
        self.project_dir.join(&self.context_file)
    }

    /// Absolute-or-relative path of the requirements document
    pub fn requirements_path(&self) -> PathBuf {
        self.project_dir.join(&self.requirements_file)
    }
}

/// Build a hook for `config` wired to the real host and stdout.
///
/// The validator is chosen here, once: `--permissive` selects
/// [`PermissiveValidator`], anything else the [`FullValidator`].
pub fn build_hook(config: HookConfig) -> PostGenHook<io::Stdout> {
    let validator = validation::select_validator(&config);
    let requirements = Box::new(
        engine::requirements::EnvironmentRequirements::new(
            platform::SystemHost,
            config.probe.clone(),
        )
        .with_detection(!config.skip_environment),
    );
    let console = cli::output::Console::stdout(config.color);
    PostGenHook::new(config, validator, requirements, console)
}
