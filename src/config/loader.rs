//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. An explicit `--config` path (must exist)
//! 2. `envcheck.yml` in the working directory, if present
//! 3. Built-in defaults

use crate::config::schema::VerifierConfig;
use crate::config::validator::validate;
use crate::error::{EnvcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "envcheck.yml";

/// Find the config file to use, if any.
///
/// An explicit path is returned as-is (existence is checked on load).
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let path = cwd.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and validate the effective configuration.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<VerifierConfig> {
    let config = match discover_config(explicit, cwd) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
            VerifierConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<VerifierConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`VerifierConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifierConfig> {
    if content.trim().is_empty() {
        return Ok(VerifierConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn discovers_file_in_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "timeout_secs: 5\n").unwrap();

        let config = load_config(None, temp.path()).unwrap();

        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn explicit_path_wins_over_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "timeout_secs: 5\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "timeout_secs: 7\n").unwrap();

        let config = load_config(Some(&other), temp.path()).unwrap();

        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config(Some(&missing), temp.path()).unwrap_err();

        assert!(matches!(err, EnvcheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_config("environments: [", Path::new("envcheck.yml")).unwrap_err();
        assert!(matches!(err, EnvcheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains("envcheck.yml"));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("\n", Path::new("envcheck.yml")).unwrap();
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "timeout_secs: 0\n").unwrap();

        let err = load_config(None, temp.path()).unwrap_err();

        assert!(matches!(err, EnvcheckError::ConfigValidationError { .. }));
    }
}
