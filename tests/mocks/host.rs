//! Mock host for environment probing.

use android_template_hook::platform::{CommandOutcome, Host};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

pub const MOCK_HOME: &str = "/home/dev";

/// Configurable host: what `java -version` returns and which paths exist
#[derive(Debug, Clone)]
pub struct MockHost {
    pub runtime: CommandOutcome,
    pub existing: HashSet<PathBuf>,
    pub env: HashMap<String, String>,
    pub home: Option<PathBuf>,
    /// Every command line the prober ran, shared across clones
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl MockHost {
    /// Java present, nothing else installed
    pub fn bare() -> Self {
        MockHost {
            runtime: java_ok("17.0.2"),
            existing: HashSet::new(),
            env: HashMap::new(),
            home: Some(PathBuf::from(MOCK_HOME)),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Java, Android SDK and Android Studio all present
    pub fn healthy() -> Self {
        Self::bare()
            .with_path(format!("{}/Android/Sdk", MOCK_HOME))
            .with_path(format!("{}/android-studio", MOCK_HOME))
    }

    /// Healthy apart from the runtime
    pub fn without_java() -> Self {
        Self::healthy().with_runtime(CommandOutcome::NotFound)
    }

    pub fn with_runtime(mut self, runtime: CommandOutcome) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn command_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Host for MockHost {
    fn run_command(&self, program: &str, args: &[&str], _timeout: Duration) -> CommandOutcome {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));
        self.runtime.clone()
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// `java -version` output for a working install (the banner goes to stderr)
pub fn java_ok(version: &str) -> CommandOutcome {
    CommandOutcome::Exited {
        code: Some(0),
        stdout: String::new(),
        stderr: format!(
            "openjdk version \"{}\" 2022-01-18\nOpenJDK Runtime Environment (build {})\n",
            version, version
        ),
    }
}

/// `java -version` from a broken install
pub fn java_broken() -> CommandOutcome {
    CommandOutcome::Exited {
        code: Some(1),
        stdout: String::new(),
        stderr: "Error: could not open `lib/jvm.cfg'\n".to_string(),
    }
}
