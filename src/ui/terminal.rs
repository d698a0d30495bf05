//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, EnvcheckTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: EnvcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvcheckTheme::new()
        } else {
            EnvcheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            self.line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn failure(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        Term::stderr().write_line(&text).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        let text = self.theme.format_hint(hint);
        self.line(&text);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            let text = format!("\n{}", self.theme.format_header(title));
            self.line(&text);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
