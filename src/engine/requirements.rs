//! Requirements document generation.
//!
//! The hook writes whatever a [`RequirementsGenerator`] returns, verbatim.
//! [`EnvironmentRequirements`] is the stock generator: it lists the SDK and
//! Java levels chosen in the context next to what was detected on the host.

use crate::context::Context;
use crate::platform::Host;
use crate::validation::environment::{self, ProbeConfig};
use crate::HookError;

/// Produces the text of REQUIREMENTS.md
pub trait RequirementsGenerator {
    fn generate(&self, context: &Context) -> Result<String, HookError>;
}

/// Requirements derived from the context and the host environment
#[derive(Debug, Clone)]
pub struct EnvironmentRequirements<H: Host> {
    host: H,
    probe: ProbeConfig,
    detect: bool,
}

impl<H: Host> EnvironmentRequirements<H> {
    pub fn new(host: H, probe: ProbeConfig) -> Self {
        EnvironmentRequirements {
            host,
            probe,
            detect: true,
        }
    }

    /// With detection off, host columns read "not checked"
    pub fn with_detection(mut self, detect: bool) -> Self {
        self.detect = detect;
        self
    }

    fn detected_java(&self) -> String {
        if !self.detect {
            return "not checked".to_string();
        }
        environment::detect_runtime_version(&self.host, &self.probe)
            .unwrap_or_else(|| "not detected".to_string())
    }

    fn detected_sdk(&self) -> String {
        if !self.detect {
            return "not checked".to_string();
        }
        environment::first_existing(&self.host, environment::sdk_candidates(&self.host))
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "not found".to_string())
    }

    fn detected_studio(&self) -> String {
        if !self.detect {
            return "not checked".to_string();
        }
        environment::first_existing(&self.host, environment::studio_candidates(&self.host))
            .map(|_| "installed".to_string())
            .unwrap_or_else(|| "not found".to_string())
    }
}

impl<H: Host> RequirementsGenerator for EnvironmentRequirements<H> {
    fn generate(&self, context: &Context) -> Result<String, HookError> {
        let unknown = "Unknown";
        let name = context
            .get("app_name")
            .filter(|v| !v.is_empty())
            .or_else(|| context.get("project_name"))
            .unwrap_or(unknown);
        let java = context.get_or("java_version", unknown);
        let min_sdk = context.get_or("min_sdk", unknown);
        let target_sdk = context.get_or("target_sdk", unknown);
        let compile_sdk = context.get_or("compile_sdk", unknown);

        let mut doc = String::new();
        doc.push_str(&format!("# {} Requirements\n\n", name));
        doc.push_str(&format!(
            "Package `{}`, version {}.\n\n",
            context.get_or("package_name", unknown),
            context.get_or("version_name", unknown)
        ));

        doc.push_str("## Development Environment\n\n");
        doc.push_str("| Component | Required | Detected |\n");
        doc.push_str("|---|---|---|\n");
        doc.push_str(&format!(
            "| Java (JDK) | {} | {} |\n",
            java,
            self.detected_java()
        ));
        doc.push_str(&format!(
            "| Android SDK | API {} | {} |\n",
            compile_sdk,
            self.detected_sdk()
        ));
        doc.push_str(&format!(
            "| Android Studio | latest stable | {} |\n\n",
            self.detected_studio()
        ));

        doc.push_str("## Android SDK Levels\n\n");
        doc.push_str(&format!("- Minimum SDK: {}\n", min_sdk));
        doc.push_str(&format!("- Target SDK: {}\n", target_sdk));
        doc.push_str(&format!("- Compile SDK: {}\n\n", compile_sdk));

        doc.push_str("## Setup\n\n");
        doc.push_str(&format!("1. Install JDK {} or newer.\n", java));
        doc.push_str(&format!(
            "2. Install the Android SDK platform for API {} (set `ANDROID_HOME` if it is not in a default location).\n",
            compile_sdk
        ));
        doc.push_str("3. Open the project in Android Studio and sync the Gradle files.\n");
        doc.push_str("4. Build from the command line with `./gradlew assembleDebug` (`gradlew.bat assembleDebug` on Windows).\n");

        Ok(doc)
    }
}
