//! Notebook kernel enumeration.

use std::time::Duration;

use crate::shell::{CommandOptions, ProcessRunner};
use crate::ui::UserInterface;

/// One entry of `kernelspec list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSpec {
    /// Kernel name, e.g. `python3`.
    pub name: String,

    /// Directory holding the kernel's `kernel.json`.
    pub path: String,
}

/// Parse the table printed by `jupyter kernelspec list`.
///
/// Lines that do not look like `<name> <path>` (the `Available kernels:`
/// heading, warnings) are skipped.
pub fn parse_kernelspecs(output: &str) -> Vec<KernelSpec> {
    output
        .lines()
        .filter(|line| !line.trim_end().ends_with(':'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;
            let path = parts.next()?;
            if parts.next().is_some() || !(path.starts_with('/') || path.contains('\\')) {
                return None;
            }
            Some(KernelSpec {
                name: name.to_string(),
                path: path.to_string(),
            })
        })
        .collect()
}

/// Run `<command> kernelspec list` and print what it says.
///
/// Returns the parsed kernels, or `None` when the command could not be run.
pub fn list_kernels(
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
    command: &str,
    timeout: Duration,
) -> Option<Vec<KernelSpec>> {
    ui.show_header("Available Jupyter Kernels");

    let outcome = runner.run(
        command,
        &["kernelspec", "list"],
        &CommandOptions::with_timeout(timeout),
    );

    match outcome {
        Ok(result) => {
            ui.message(result.stdout.trim_end());
            let stderr = result.stderr.trim_end();
            if !stderr.is_empty() {
                ui.message(&format!("Errors: {}", stderr));
            }

            let kernels = parse_kernelspecs(&result.stdout);
            tracing::info!("{} registered kernel(s)", kernels.len());
            Some(kernels)
        }
        Err(e) => {
            tracing::warn!("Kernel listing via {} failed: {}", command, e);
            ui.message(&format!("❌ Could not list kernels: {}", e));
            None
        }
    }
}
