//! Interpreter version probe.

use std::time::Duration;

use crate::error::{EnvcheckError, Result};
use crate::shell::{CommandOptions, ProcessRunner};

/// Ask `interpreter` for its version string.
///
/// Python 2 and some launchers print the version on stderr, so stderr is
/// used when stdout is empty.
pub fn probe_version(
    runner: &dyn ProcessRunner,
    interpreter: &str,
    timeout: Duration,
) -> Result<String> {
    let result = runner.run(
        interpreter,
        &["--version"],
        &CommandOptions::with_timeout(timeout),
    )?;

    if !result.success {
        return Err(EnvcheckError::CommandFailed {
            command: format!("{} --version", interpreter),
            code: result.exit_code,
        });
    }

    let stdout = result.stdout.trim();
    let version = if stdout.is_empty() {
        result.stderr.trim()
    } else {
        stdout
    };
    Ok(version.to_string())
}
