//! Final summary block.

use crate::ui::UserInterface;

/// Readiness of one environment, as shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStatus {
    /// Label from the config (e.g., "Default Python 3 environment").
    pub label: String,

    /// Whether every package imported.
    pub ready: bool,
}

/// Input of the `FINAL SUMMARY` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationSummary {
    /// One entry per tested environment, in test order.
    pub environments: Vec<EnvironmentStatus>,
}

impl VerificationSummary {
    /// True iff every environment is ready.
    pub fn all_ready(&self) -> bool {
        self.environments.iter().all(|e| e.ready)
    }
}

/// Print the summary block: one line per environment, then the verdict.
pub fn print_final_summary(
    ui: &mut dyn UserInterface,
    summary: &VerificationSummary,
    hints: &[String],
) {
    ui.show_header("FINAL SUMMARY");

    for env in &summary.environments {
        if env.ready {
            ui.success(&format!("{}: All packages working", env.label));
        } else {
            ui.failure(&format!("{}: Some packages failed", env.label));
        }
    }

    ui.message("");
    if summary.all_ready() {
        ui.success("🎉 All environments are ready for use!");
        if !hints.is_empty() {
            ui.message("");
            for hint in hints {
                ui.show_hint(hint);
            }
        }
    } else {
        ui.warning("Some packages failed to install. Check the logs above.");
    }
}
