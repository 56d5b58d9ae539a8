//! Platform abstraction layer.
//!
//! Everything the environment prober needs from the machine goes through
//! [`Host`]:
//! - External process invocation with a timeout
//! - Filesystem existence checks
//! - Environment variables
//! - The user's home directory
//!
//! [`SystemHost`] is the real implementation. Tests substitute their own.

pub mod process;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process exited on its own. `code` is `None` when killed by a signal.
    Exited {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The process was still running at the deadline and was killed
    TimedOut { after_ms: u64 },
    /// The program could not be found
    NotFound,
    /// The program exists but could not be started or waited on
    SpawnFailed { message: String },
}

impl CommandOutcome {
    /// True only for a zero exit status
    pub fn succeeded(&self) -> bool {
        matches!(self, CommandOutcome::Exited { code: Some(0), .. })
    }

    /// Combined stdout and stderr for an exited process
    pub fn output_text(&self) -> Option<String> {
        match self {
            CommandOutcome::Exited { stdout, stderr, .. } => {
                Some(format!("{}{}", stdout, stderr))
            }
            _ => None,
        }
    }
}

/// Host machine interface used by the environment prober.
pub trait Host {
    /// Run `program` with `args`, killing it after `timeout`
    fn run_command(&self, program: &str, args: &[&str], timeout: Duration) -> CommandOutcome;

    /// Check whether a file or directory exists
    fn path_exists(&self, path: &Path) -> bool;

    /// Read an environment variable
    fn env_var(&self, name: &str) -> Option<String>;

    /// The current user's home directory
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The machine the hook is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn run_command(&self, program: &str, args: &[&str], timeout: Duration) -> CommandOutcome {
        process::run_with_timeout(program, args, timeout)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}
