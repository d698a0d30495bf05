//! Package import probe.
//!
//! Each package is checked in its own interpreter subprocess so a broken
//! import (or an extension module that segfaults on load) only fails that
//! one entry.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EnvcheckError, Result};
use crate::shell::{CommandOptions, ProcessRunner};

/// Program run under the interpreter for every package.
///
/// `{report}` is replaced first, then `{package}`. `{e}` is Python's.
const IMPORT_TEMPLATE: &str = r#"import sys
try:
    import {package}
{report}    sys.exit(0)
except ImportError as e:
    print(f"❌ {package}: {e}")
    sys.exit(1)
"#;

const REPORT_WITH_ATTR: &str = r#"    if hasattr({package}, "{attr}"):
        print(f"✅ {package}: {getattr({package}, '{attr}')}")
    else:
        print("✅ {package}: imported successfully")
"#;

const REPORT_PLAIN: &str = r#"    print("✅ {package}: imported successfully")
"#;

/// A package expected to be importable, with the module attribute that
/// carries its version (usually `__version__`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCheck {
    /// Importable module name, e.g. `torch` or `google.protobuf`.
    pub name: String,

    /// Attribute printed as the version when present on the module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_attr: Option<String>,
}

impl PackageCheck {
    /// Create a check for `name`, optionally reporting `version_attr`.
    pub fn new(name: &str, version_attr: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            version_attr: version_attr.map(str::to_string),
        }
    }
}

/// The packages an ML development image is expected to ship.
pub fn default_packages() -> Vec<PackageCheck> {
    const VERSION: Option<&str> = Some("__version__");
    vec![
        PackageCheck::new("torch", VERSION),
        PackageCheck::new("torchvision", VERSION),
        PackageCheck::new("torchaudio", VERSION),
        PackageCheck::new("tensorflow", VERSION),
        PackageCheck::new("onnx", VERSION),
        PackageCheck::new("onnxruntime", VERSION),
        PackageCheck::new("ai_edge_torch", None),
        PackageCheck::new("nobuco", None),
        PackageCheck::new("numpy", VERSION),
        PackageCheck::new("jupyter", VERSION),
        PackageCheck::new("ipykernel", VERSION),
    ]
}

/// Outcome of probing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Package that was probed.
    pub package: String,

    /// Whether the import succeeded.
    pub succeeded: bool,

    /// Line to show the user, already carrying its status glyph.
    pub output_text: String,

    /// Captured stderr of a failed probe, if any.
    pub detail: Option<String>,
}

impl CheckResult {
    fn passed(package: &str, output_text: String) -> Self {
        Self {
            package: package.to_string(),
            succeeded: true,
            output_text,
            detail: None,
        }
    }

    fn failed(package: &str, output_text: String, detail: Option<String>) -> Self {
        Self {
            package: package.to_string(),
            succeeded: false,
            output_text,
            detail,
        }
    }
}

static RE_MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Reserved words that can never name a module or attribute.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

fn is_keyword(word: &str) -> bool {
    PYTHON_KEYWORDS.contains(&word)
}

/// Check that `name` is a dotted sequence of Python identifiers.
///
/// Names are spliced into program text, so anything else is refused before
/// an interpreter ever sees it.
pub fn validate_package_name(name: &str) -> Result<()> {
    if RE_MODULE_PATH.is_match(name) && !name.split('.').any(is_keyword) {
        Ok(())
    } else {
        Err(EnvcheckError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}

/// Check that `attr` is a single, non-reserved identifier on `package`.
pub fn validate_version_attr(package: &str, attr: &str) -> Result<()> {
    if RE_IDENTIFIER.is_match(attr) && !is_keyword(attr) {
        Ok(())
    } else {
        Err(EnvcheckError::InvalidPackageName {
            name: format!("{}.{}", package, attr),
        })
    }
}

/// Render the import-check program for a package.
pub fn import_snippet(check: &PackageCheck) -> String {
    let report = match &check.version_attr {
        Some(attr) => REPORT_WITH_ATTR.replace("{attr}", attr),
        None => REPORT_PLAIN.to_string(),
    };
    IMPORT_TEMPLATE
        .replace("{report}", &report)
        .replace("{package}", &check.name)
}

/// Probe one package under `interpreter`.
///
/// Never fails: spawn errors, timeouts and rejected names all become a
/// failed [`CheckResult`].
pub fn probe_package(
    runner: &dyn ProcessRunner,
    interpreter: &str,
    check: &PackageCheck,
    timeout: Duration,
) -> CheckResult {
    let name = check.name.as_str();

    let valid = validate_package_name(name).and_then(|_| match &check.version_attr {
        Some(attr) => validate_version_attr(name, attr),
        None => Ok(()),
    });
    if let Err(e) = valid {
        tracing::warn!("Refusing to probe {:?}: {}", name, e);
        return CheckResult::failed(name, format!("❌ {}: {}", name, e), None);
    }

    let snippet = import_snippet(check);
    let options = CommandOptions::with_timeout(timeout);

    match runner.run(interpreter, &["-c", &snippet], &options) {
        Ok(result) if result.success => {
            tracing::debug!("{} imported in {}ms", name, result.duration.as_millis());
            CheckResult::passed(name, result.stdout.trim().to_string())
        }
        Ok(result) => {
            tracing::debug!(
                "{} import failed after {}ms",
                name,
                result.duration.as_millis()
            );
            let stdout = result.stdout.trim();
            let text = if stdout.is_empty() {
                format!("❌ {}: Import failed", name)
            } else {
                stdout.to_string()
            };
            let stderr = result.stderr.trim();
            if !stderr.is_empty() {
                tracing::debug!("{} import stderr: {}", name, stderr);
            }
            let detail = (!stderr.is_empty()).then(|| stderr.to_string());
            CheckResult::failed(name, text, detail)
        }
        Err(e) => CheckResult::failed(name, format!("❌ {}: {}", name, e), None),
    }
}
