//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envcheck::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let config = parse_config("timeout_secs: 60", Path::new("envcheck.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.timeout_secs, 60);
//! assert_eq!(config.packages.len(), 11);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{AcceleratorConfig, EnvironmentConfig, KernelsConfig, VerifierConfig};
pub use validator::{validate, validate_config, ValidationError};
