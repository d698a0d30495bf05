//! Environment probes.
//!
//! Each probe shells out to one external program and turns whatever happens
//! (success, import error, missing binary, timeout) into a value plus the
//! lines printed for the user. No probe failure is ever fatal.
//!
//! - [`version`] - interpreter `--version`
//! - [`package`] - one isolated import per package
//! - [`environment`] - every package against one interpreter
//! - [`accelerator`] - CUDA availability through PyTorch
//! - [`kernels`] - registered notebook kernels
//!
//! # Example
//!
//! ```
//! use envcheck::probes::{import_snippet, PackageCheck};
//!
//! let snippet = import_snippet(&PackageCheck::new("numpy", Some("__version__")));
//! assert!(snippet.contains("import numpy"));
//! ```

use std::time::Duration;

pub mod accelerator;
pub mod environment;
pub mod kernels;
pub mod package;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use accelerator::{parse_cuda_available, probe_accelerator, AcceleratorReport};
pub use environment::{test_environment, EnvironmentReport};
pub use kernels::{list_kernels, parse_kernelspecs, KernelSpec};
pub use package::{
    default_packages, import_snippet, probe_package, validate_package_name,
    validate_version_attr, CheckResult, PackageCheck,
};
pub use version::probe_version;

/// Upper bound on how long any single probe may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
