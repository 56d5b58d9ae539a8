//! Command line arguments.

use crate::{DEFAULT_CONTEXT_FILE, DEFAULT_REQUIREMENTS_FILE};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parsed command line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "android-template-hook",
    about = "Validate and finish a freshly generated Android project",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(long, default_value = ".", help = "Root of the generated project")]
    pub project_dir: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_CONTEXT_FILE,
        help = "Template context file, relative to the project root"
    )]
    pub context_file: String,

    #[arg(
        long,
        default_value = DEFAULT_REQUIREMENTS_FILE,
        help = "Requirements document to write, relative to the project root"
    )]
    pub requirements_file: String,

    #[arg(long, default_value = "java", help = "Java runtime used for the environment check")]
    pub java: String,

    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds allowed for `java -version`"
    )]
    pub timeout_secs: u64,

    #[arg(long, help = "Accept any template values without validating them")]
    pub permissive: bool,

    #[arg(long, help = "Continue without validation when the context file is missing")]
    pub allow_missing_context: bool,

    #[arg(long, help = "Delete the context file even when the run fails")]
    pub cleanup_on_failure: bool,

    #[arg(long, help = "Skip Java, Android SDK and Android Studio detection")]
    pub skip_environment: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Print the validation outcome as JSON")]
    pub json: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Diagnostic log verbosity (repeatable)")]
    pub verbose: u8,

    #[arg(short = 'V', long, help = "Print version information")]
    pub version: bool,
}

impl Args {
    /// Default diagnostic filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "android_template_hook=info",
            2 => "android_template_hook=debug",
            _ => "trace",
        }
    }
}
