//! Verification orchestration.
//!
//! - [`verifier`] - runs every probe in order
//! - [`summary`] - the closing `FINAL SUMMARY` block

pub mod summary;
pub mod verifier;

pub use summary::{print_final_summary, EnvironmentStatus, VerificationSummary};
pub use verifier::{VerificationOutcome, Verifier};
