//! GPU acceleration probe.
//!
//! Informational only: nothing here feeds into environment readiness.

use std::time::Duration;

use crate::shell::{CommandOptions, ProcessRunner};
use crate::ui::UserInterface;

const ACCELERATOR_SNIPPET: &str = r#"import torch
print(f"PyTorch version: {torch.__version__}")
print(f"CUDA available: {torch.cuda.is_available()}")
if torch.cuda.is_available():
    print(f"CUDA version: {torch.version.cuda}")
    print(f"CUDA devices: {torch.cuda.device_count()}")
    print(f"Current device: {torch.cuda.current_device()}")
    print(f"Device name: {torch.cuda.get_device_name()}")
else:
    print("CUDA not available - running on CPU")
"#;

/// What the accelerator interpreter reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorReport {
    /// Interpreter the check ran under.
    pub interpreter: String,

    /// Trimmed stdout of the check.
    pub output: String,

    /// Trimmed stderr, when the check wrote any.
    pub warnings: Option<String>,

    /// Parsed `CUDA available:` line, if the check got that far.
    pub cuda_available: Option<bool>,
}

/// Pull the `CUDA available: True|False` answer out of the check output.
pub fn parse_cuda_available(output: &str) -> Option<bool> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("CUDA available:"))
        .and_then(|value| match value.trim() {
            "True" => Some(true),
            "False" => Some(false),
            _ => None,
        })
}

/// Run the GPU check under `interpreter` and print what it says.
///
/// Returns `None` when the interpreter could not be run at all.
pub fn probe_accelerator(
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
    interpreter: &str,
    timeout: Duration,
) -> Option<AcceleratorReport> {
    ui.show_header("Testing CUDA availability");

    let mut spinner = ui.start_spinner(&format!("Querying CUDA via {}...", interpreter));
    let outcome = runner.run(
        interpreter,
        &["-c", ACCELERATOR_SNIPPET],
        &CommandOptions::with_timeout(timeout),
    );
    spinner.finish();

    match outcome {
        Ok(result) => {
            let output = result.stdout.trim().to_string();
            let stderr = result.stderr.trim();
            ui.message(&output);
            if !stderr.is_empty() {
                ui.message(&format!("Warnings: {}", stderr));
            }

            let cuda_available = parse_cuda_available(&output);
            tracing::info!("CUDA available via {}: {:?}", interpreter, cuda_available);

            Some(AcceleratorReport {
                interpreter: interpreter.to_string(),
                output,
                warnings: (!stderr.is_empty()).then(|| stderr.to_string()),
                cuda_available,
            })
        }
        Err(e) => {
            tracing::warn!("Accelerator probe via {} failed: {}", interpreter, e);
            ui.message(&format!("❌ CUDA test failed: {}", e));
            None
        }
    }
}
