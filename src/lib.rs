//! envcheck - Verify the Python ML environments of a development image.
//!
//! envcheck imports a fixed set of packages under each configured
//! interpreter, one subprocess per package, then probes CUDA through PyTorch,
//! lists the registered Jupyter kernels and prints a readiness summary.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `envcheck.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`probes`] - Version, import, GPU and kernel probes
//! - [`runner`] - Probe sequencing and the final summary
//! - [`shell`] - Subprocess execution with timeouts
//! - [`ui`] - Terminal output, spinners and test doubles
//!
//! # Example
//!
//! ```
//! use envcheck::config::VerifierConfig;
//! use envcheck::runner::{EnvironmentStatus, VerificationSummary};
//!
//! let config = VerifierConfig::default();
//! assert_eq!(config.environments.len(), 2);
//!
//! let summary = VerificationSummary {
//!     environments: vec![EnvironmentStatus {
//!         label: "python3".to_string(),
//!         ready: true,
//!     }],
//! };
//! assert!(summary.all_ready());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnvcheckError, Result};
