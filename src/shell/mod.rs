//! External process execution.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, ProcessRunner, SystemRunner};
pub use platform::is_ci;
