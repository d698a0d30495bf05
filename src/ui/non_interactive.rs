//! Plain UI for pipes, CI logs and redirected output.

use super::theme::EnvcheckTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes unstyled lines and never animates, so transcripts read the same
/// in a CI log as they would on a terminal.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: EnvcheckTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: EnvcheckTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn failure(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", hint);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            println!("\n{}", self.theme.format_header(title));
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }
}

struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish(&mut self) {}
}
