//! Packages command implementation.
//!
//! `envcheck packages` prints what a verify run would check, without
//! spawning anything.

use std::path::{Path, PathBuf};

use crate::config::{load_config, VerifierConfig};
use crate::error::Result;
use crate::probes::PackageCheck;
use crate::ui::theme::EnvcheckTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The packages command implementation.
pub struct PackagesCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl PackagesCommand {
    /// Create a new packages command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }
}

fn package_line(theme: &EnvcheckTheme, check: &PackageCheck) -> String {
    match &check.version_attr {
        Some(attr) => format!(
            "    {} {}",
            check.name,
            theme.dim.apply_to(format!("({}.{})", check.name, attr))
        ),
        None => format!("    {}", check.name),
    }
}

fn show_manifest(ui: &mut dyn UserInterface, config: &VerifierConfig, theme: &EnvcheckTheme) {
    ui.message(&format!("  {}", theme.header.apply_to("Environments:")));
    for env in &config.environments {
        ui.message(&format!(
            "    {} {}",
            env.interpreter,
            theme.dim.apply_to(format!("- {}", env.display_label()))
        ));
    }

    ui.message("");
    ui.message(&format!("  {}", theme.header.apply_to("Packages:")));
    for check in &config.packages {
        ui.message(&package_line(theme, check));
    }

    if config.accelerator.enabled {
        ui.message("");
        ui.message(&format!(
            "  GPU probe: {}",
            theme.dim.apply_to(&config.accelerator.interpreter)
        ));
    }
}

impl Command for PackagesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.working_dir)?;

        let theme = if should_use_colors() {
            EnvcheckTheme::new()
        } else {
            EnvcheckTheme::plain()
        };
        show_manifest(ui, &config, &theme);

        Ok(CommandResult::success())
    }
}
