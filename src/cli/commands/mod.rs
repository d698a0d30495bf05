//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Running `envcheck` with no subcommand is the same
//! as `envcheck verify`.

pub mod completions;
pub mod dispatcher;
pub mod packages;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
