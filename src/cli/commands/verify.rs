//! Verify command implementation.
//!
//! `envcheck verify` (or plain `envcheck`) runs every probe and prints the
//! final summary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::VerifyArgs;
use crate::config::{load_config, VerifierConfig};
use crate::error::Result;
use crate::runner::{VerificationOutcome, Verifier};
use crate::shell::{ProcessRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: VerifyArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn run_with(
        &self,
        config: &VerifierConfig,
        runner: &dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> VerificationOutcome {
        let mut verifier = Verifier::new(config, runner);
        if let Some(secs) = self.args.timeout {
            verifier = verifier.with_timeout(Duration::from_secs(secs));
        }
        tracing::debug!("Per-probe timeout: {:?}", verifier.timeout());
        verifier.run(ui)
    }

    fn exit_status(&self, outcome: &VerificationOutcome) -> CommandResult {
        if self.args.strict && !outcome.all_ready() {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.working_dir)?;

        let outcome = self.run_with(&config, &SystemRunner, ui);

        tracing::info!(
            ready = outcome.all_ready(),
            environments = outcome.reports.len(),
            "Verification finished"
        );
        Ok(self.exit_status(&outcome))
    }
}
