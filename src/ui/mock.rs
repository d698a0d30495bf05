//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("✅ numpy: 1.26.4");
//! ui.success("Default Python 3 environment: All packages working");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("numpy"));
//! assert!(ui.has_success("All packages working"));
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Kind of line captured by [`MockUI`], in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    Message(String),
    Success(String),
    Failure(String),
    Warning(String),
    Error(String),
    Hint(String),
    Header(String),
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    transcript: Vec<Captured>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured failure lines.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Everything captured, in order.
    pub fn transcript(&self) -> &[Captured] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific failure was shown.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific header was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }

    /// Position of the first header containing `title` in the transcript.
    pub fn header_position(&self, title: &str) -> Option<usize> {
        self.transcript
            .iter()
            .position(|c| matches!(c, Captured::Header(h) if h.contains(title)))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(Captured::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(Captured::Success(msg.to_string()));
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
        self.transcript.push(Captured::Failure(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(Captured::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(Captured::Error(msg.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.transcript.push(Captured::Hint(hint.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(Captured::Header(title.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner that records whether it was finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_lines_in_order() {
        let mut ui = MockUI::new();
        ui.show_header("Testing python3 environment");
        ui.message("Python version: Python 3.12.3");
        ui.failure("Python 3.10 ML/AI environment: Some packages failed");

        assert_eq!(ui.transcript().len(), 3);
        assert_eq!(ui.header_position("python3"), Some(0));
        assert!(ui.has_message("3.12.3"));
        assert!(ui.has_failure("Some packages failed"));
    }

    #[test]
    fn mock_ui_records_spinners() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking torch");
        spinner.finish();
        assert_eq!(ui.spinners(), ["Checking torch"]);
    }

    #[test]
    fn mock_spinner_tracks_finish() {
        let mut spinner = MockSpinner::new();
        assert!(!spinner.is_finished());
        spinner.finish();
        assert!(spinner.is_finished());
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
