//! Per-interpreter environment test.
//!
//! Runs the version probe and then every package probe against one
//! interpreter, printing each line as soon as it is known.

use std::time::Duration;

use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::package::{probe_package, CheckResult, PackageCheck};
use super::version::probe_version;

/// Everything learned about one interpreter.
#[derive(Debug, Clone)]
pub struct EnvironmentReport {
    /// Interpreter command the packages were probed with.
    pub interpreter_label: String,

    /// Version string, when the version probe succeeded.
    pub version: Option<String>,

    /// One result per package, in probe order.
    pub results: Vec<CheckResult>,

    /// Number of packages that imported.
    pub success_count: usize,

    /// Number of packages probed.
    pub total_count: usize,
}

impl EnvironmentReport {
    /// True iff every package imported.
    pub fn is_ready(&self) -> bool {
        self.success_count == self.total_count
    }

    /// Results of the packages that failed to import.
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }

    /// The `X/Y packages imported successfully` line.
    pub fn summary_line(&self) -> String {
        format!(
            "Summary: {}/{} packages imported successfully",
            self.success_count, self.total_count
        )
    }
}

/// Probe `packages` under `interpreter`.
///
/// A failing version probe is reported and the package loop still runs.
pub fn test_environment(
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
    interpreter: &str,
    packages: &[PackageCheck],
    timeout: Duration,
) -> EnvironmentReport {
    ui.show_header(&format!("Testing {} environment", interpreter));

    let version = match probe_version(runner, interpreter, timeout) {
        Ok(version) => {
            ui.message(&format!("Python version: {}", version));
            Some(version)
        }
        Err(e) => {
            tracing::warn!("Version probe for {} failed: {}", interpreter, e);
            ui.message(&format!("❌ Could not get Python version: {}", e));
            None
        }
    };

    let show_stderr = ui.output_mode().shows_command_output();
    let mut results = Vec::with_capacity(packages.len());
    let mut success_count = 0;

    for check in packages {
        let mut spinner = ui.start_spinner(&format!("Importing {}...", check.name));
        let result = probe_package(runner, interpreter, check, timeout);
        spinner.finish();

        ui.message(&result.output_text);
        if result.succeeded {
            success_count += 1;
        } else if show_stderr {
            if let Some(detail) = &result.detail {
                for line in detail.lines() {
                    ui.message(&format!("    {}", line));
                }
            }
        }
        results.push(result);
    }

    let report = EnvironmentReport {
        interpreter_label: interpreter.to_string(),
        version,
        results,
        success_count,
        total_count: packages.len(),
    };

    tracing::info!(
        "{}: {}/{} packages imported",
        interpreter,
        report.success_count,
        report.total_count
    );

    ui.message("");
    ui.message(&report.summary_line());
    report
}
