//! The verification sequence.
//!
//! Environments are tested in config order, then the GPU probe and the
//! kernel listing run, then the summary is printed. Nothing short-circuits:
//! a probe's outcome is only ever aggregated, never used to skip later ones.

use std::time::Duration;

use crate::config::VerifierConfig;
use crate::probes::{
    list_kernels, probe_accelerator, test_environment, AcceleratorReport, EnvironmentReport,
    KernelSpec,
};
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::summary::{print_final_summary, EnvironmentStatus, VerificationSummary};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// One report per environment, in test order.
    pub reports: Vec<EnvironmentReport>,

    /// GPU probe result; `None` if it was disabled or could not run.
    pub accelerator: Option<AcceleratorReport>,

    /// Registered kernels; `None` if listing was disabled or could not run.
    pub kernels: Option<Vec<KernelSpec>>,

    /// What the summary block showed.
    pub summary: VerificationSummary,
}

impl VerificationOutcome {
    /// True iff every environment imported every package.
    pub fn all_ready(&self) -> bool {
        self.summary.all_ready()
    }
}

/// Runs the full sequence against a [`ProcessRunner`].
pub struct Verifier<'a> {
    config: &'a VerifierConfig,
    runner: &'a dyn ProcessRunner,
    timeout: Duration,
}

impl<'a> Verifier<'a> {
    /// Create a verifier using the config's timeout.
    pub fn new(config: &'a VerifierConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            config,
            runner,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Override the per-probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Per-probe timeout in effect.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run every probe and print the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> VerificationOutcome {
        let config = self.config;

        ui.message("🧪 Environment verification suite");
        ui.message(&format!(
            "Checking {} Python environment(s) for {} package(s)",
            config.environments.len(),
            config.packages.len()
        ));

        let mut reports = Vec::with_capacity(config.environments.len());
        let mut statuses = Vec::with_capacity(config.environments.len());
        for env in &config.environments {
            let report = test_environment(
                self.runner,
                ui,
                &env.interpreter,
                &config.packages,
                self.timeout,
            );
            statuses.push(EnvironmentStatus {
                label: env.display_label().to_string(),
                ready: report.is_ready(),
            });
            reports.push(report);
        }

        let accelerator = if config.accelerator.enabled {
            probe_accelerator(self.runner, ui, &config.accelerator.interpreter, self.timeout)
        } else {
            tracing::debug!("Accelerator probe disabled");
            None
        };

        let kernels = if config.kernels.enabled {
            list_kernels(self.runner, ui, &config.kernels.command, self.timeout)
        } else {
            tracing::debug!("Kernel listing disabled");
            None
        };

        let summary = VerificationSummary {
            environments: statuses,
        };
        print_final_summary(ui, &summary, &config.hints);

        VerificationOutcome {
            reports,
            accelerator,
            kernels,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::testing::{ok, FakeRunner, Reply};
    use crate::ui::MockUI;

    const GPU_OUTPUT: &str = "PyTorch version: 2.3.1\nCUDA available: True\nCUDA version: 12.1\nCUDA devices: 1\nCurrent device: 0\nDevice name: NVIDIA A100\n";
    const KERNELS: &str =
        "Available kernels:\n  python3    /usr/local/share/jupyter/kernels/python3\n";

    fn healthy() -> FakeRunner {
        FakeRunner::new()
            .reply_when("--version", ok("Python 3.10.12\n"))
            .reply_when("torch.cuda", ok(GPU_OUTPUT))
            .reply_when("kernelspec", ok(KERNELS))
            .otherwise(ok("✅ imported\n"))
    }

    #[test]
    fn healthy_image_is_ready() {
        let config = VerifierConfig::default();
        let runner = healthy();
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(outcome.all_ready());
        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.accelerator.unwrap().cuda_available, Some(true));
        assert_eq!(outcome.kernels.unwrap().len(), 1);
        assert!(ui.has_success("Default Python 3 environment: All packages working"));
        assert!(ui.has_success("Python 3.10 ML/AI environment: All packages working"));
        assert!(ui.has_success("All environments are ready for use!"));
    }

    #[test]
    fn probes_run_in_order() {
        let config = VerifierConfig::default();
        let runner = healthy();
        let mut ui = MockUI::new();

        Verifier::new(&config, &runner).run(&mut ui);

        let python3 = ui.header_position("Testing python3 environment").unwrap();
        let python310 = ui.header_position("Testing python3.10 environment").unwrap();
        let cuda = ui.header_position("Testing CUDA availability").unwrap();
        let kernels = ui.header_position("Available Jupyter Kernels").unwrap();
        let summary = ui.header_position("FINAL SUMMARY").unwrap();
        assert!(python3 < python310);
        assert!(python310 < cuda);
        assert!(cuda < kernels);
        assert!(kernels < summary);
    }

    #[test]
    fn one_failing_environment_gets_caution() {
        let config = VerifierConfig::default();
        let runner = FakeRunner::new()
            .reply_for(
                "python3.10",
                "    import nobuco\n",
                Reply::Exit {
                    code: 1,
                    stdout: "❌ nobuco: No module named 'nobuco'\n".into(),
                    stderr: String::new(),
                },
            )
            .otherwise(ok("✅ imported\n"));
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(!outcome.all_ready());
        assert!(outcome.reports[0].is_ready());
        assert!(!outcome.reports[1].is_ready());
        assert!(ui.has_failure("Python 3.10 ML/AI environment: Some packages failed"));
        assert!(ui.has_warning("Some packages failed to install"));
        assert!(!ui.has_success("ready for use"));
    }

    #[test]
    fn accelerator_failure_does_not_affect_readiness() {
        let config = VerifierConfig::default();
        let runner = FakeRunner::new()
            .reply_when("torch.cuda", Reply::Missing)
            .reply_when("kernelspec", ok(KERNELS))
            .otherwise(ok("✅ imported\n"));
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(outcome.accelerator.is_none());
        assert!(ui.has_message("CUDA test failed"));
        assert!(outcome.all_ready());
        assert!(ui.has_success("ready for use"));
    }

    #[test]
    fn kernel_listing_failure_still_prints_summary() {
        let config = VerifierConfig::default();
        let runner = FakeRunner::new()
            .missing("jupyter")
            .otherwise(ok("✅ imported\n"));
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(outcome.kernels.is_none());
        assert!(ui.has_message("Could not list kernels"));
        assert!(ui.has_header("FINAL SUMMARY"));
    }

    #[test]
    fn every_interpreter_missing_still_completes() {
        let config = VerifierConfig::default();
        let runner = FakeRunner::new().otherwise(Reply::Missing);
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(!outcome.all_ready());
        assert!(outcome.reports.iter().all(|r| r.success_count == 0));
        assert!(ui.has_header("FINAL SUMMARY"));
        assert!(ui.has_warning("Some packages failed to install"));
    }

    #[test]
    fn accelerator_targets_its_own_interpreter() {
        let mut config = VerifierConfig::default();
        config.accelerator.interpreter = "python3.11".to_string();
        let runner = healthy();
        let mut ui = MockUI::new();

        Verifier::new(&config, &runner).run(&mut ui);

        let gpu_calls: Vec<_> = runner
            .calls()
            .into_iter()
            .filter(|c| c.args.iter().any(|a| a.contains("torch.cuda")))
            .collect();
        assert_eq!(gpu_calls.len(), 1);
        assert_eq!(gpu_calls[0].program, "python3.11");
    }

    #[test]
    fn disabled_probes_are_skipped() {
        let mut config = VerifierConfig::default();
        config.accelerator.enabled = false;
        config.kernels.enabled = false;
        let runner = healthy();
        let mut ui = MockUI::new();

        let outcome = Verifier::new(&config, &runner).run(&mut ui);

        assert!(outcome.accelerator.is_none());
        assert!(outcome.kernels.is_none());
        assert!(!ui.has_header("Testing CUDA availability"));
        assert!(runner.calls_to("jupyter").is_empty());
        assert!(outcome.all_ready());
    }

    #[test]
    fn timeout_override_reaches_every_probe() {
        let config = VerifierConfig::default();
        let runner = healthy();
        let mut ui = MockUI::new();

        let verifier = Verifier::new(&config, &runner).with_timeout(Duration::from_secs(5));
        verifier.run(&mut ui);

        assert_eq!(verifier.timeout(), Duration::from_secs(5));
        assert!(runner
            .calls()
            .iter()
            .all(|c| c.timeout == Some(Duration::from_secs(5))));
    }

    #[test]
    fn each_environment_probes_every_package_separately() {
        let config = VerifierConfig::default();
        let runner = healthy();
        let mut ui = MockUI::new();

        Verifier::new(&config, &runner).run(&mut ui);

        // 1 version + 11 imports for python3; python3.10 adds the same plus the GPU probe.
        assert_eq!(runner.calls_to("python3").len(), 12);
        assert_eq!(runner.calls_to("python3.10").len(), 13);
    }
}
