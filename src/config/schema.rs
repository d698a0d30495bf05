//! Configuration schema definitions.
//!
//! This module contains the structs that map to the `envcheck.yml` format.
//! Every field has a default, and the defaults describe the stock ML image:
//! an empty file (or no file at all) checks exactly what the tool always has.

use serde::{Deserialize, Serialize};

use crate::probes::{default_packages, PackageCheck, DEFAULT_TIMEOUT};

/// Root configuration structure for envcheck.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Per-probe timeout in seconds
    pub timeout_secs: u64,

    /// Interpreters whose packages are checked, in order
    pub environments: Vec<EnvironmentConfig>,

    /// Packages every environment must be able to import
    pub packages: Vec<PackageCheck>,

    /// GPU probe settings
    pub accelerator: AcceleratorConfig,

    /// Kernel listing settings
    pub kernels: KernelsConfig,

    /// Lines shown after the ready message
    pub hints: Vec<String>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            environments: default_environments(),
            packages: default_packages(),
            accelerator: AcceleratorConfig::default(),
            kernels: KernelsConfig::default(),
            hints: default_hints(),
        }
    }
}

/// One interpreter under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Executable used to launch the interpreter (e.g., python3.10)
    pub interpreter: String,

    /// Name used in the final summary; defaults to the interpreter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EnvironmentConfig {
    /// Create an environment entry.
    pub fn new(interpreter: &str, label: Option<&str>) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            label: label.map(str::to_string),
        }
    }

    /// Label shown in the final summary.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.interpreter)
    }
}

/// GPU probe settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcceleratorConfig {
    /// Run the GPU probe
    pub enabled: bool,

    /// Interpreter with the CUDA-enabled PyTorch build
    pub interpreter: String,
}

impl Default for AcceleratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interpreter: "python3.10".to_string(),
        }
    }
}

/// Kernel listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelsConfig {
    /// Run the kernel listing
    pub enabled: bool,

    /// Command providing the `kernelspec list` subcommand
    pub command: String,
}

impl Default for KernelsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "jupyter".to_string(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_environments() -> Vec<EnvironmentConfig> {
    vec![
        EnvironmentConfig::new("python3", Some("Default Python 3 environment")),
        EnvironmentConfig::new("python3.10", Some("Python 3.10 ML/AI environment")),
    ]
}

fn default_hints() -> Vec<String> {
    [
        "To use in Jupyter:",
        "1. Start Jupyter: docker-compose up",
        "2. Open browser: http://localhost:8888",
        "3. Create new notebook and select kernel:",
        "   - 'Python 3' for general development",
        "   - 'Python 3.10 (ML/AI)' for machine learning",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
