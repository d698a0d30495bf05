//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait so the verifier can be driven without a terminal
//! - [`TerminalUI`] for interactive terminals (colors, spinners)
//! - [`NonInteractiveUI`] for pipes, CI logs and `--no-color` runs
//! - [`MockUI`] which records everything for tests
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("FINAL SUMMARY");
//! ui.success("All environments are ready for use!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{Captured, MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvcheckTheme};

/// Width of the `=` rules framing section headers.
pub const HEADER_WIDTH: usize = 50;

/// Trait for user interface interactions.
///
/// Report lines (success, failure, warning, hints) always go to stdout.
/// `error` is reserved for problems with envcheck itself.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line, such as probe output copied verbatim.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a failure line.
    fn failure(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error about the tool itself (stderr).
    fn error(&mut self, msg: &str);

    /// Display a follow-up hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Start a spinner while a probe is waiting on a subprocess.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Remove the spinner; the caller prints the outcome itself.
    fn finish(&mut self);
}
