//! Configuration validation rules.
//!
//! - At least one environment, each with a non-empty interpreter
//! - At least one package, each a valid dotted module name
//! - A non-zero timeout

use crate::config::schema::VerifierConfig;
use crate::error::{EnvcheckError, Result};
use crate::probes::{validate_package_name, validate_version_attr};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first.
pub fn validate_config(config: &VerifierConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "timeout_secs must be greater than zero".to_string(),
        ));
    }

    if config.environments.is_empty() {
        errors.push(ValidationError::new(
            "no-environments",
            "at least one environment is required".to_string(),
        ));
    }
    for (i, env) in config.environments.iter().enumerate() {
        if env.interpreter.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-interpreter",
                format!("environment #{} has an empty interpreter", i + 1),
            ));
        }
    }

    if config.packages.is_empty() {
        errors.push(ValidationError::new(
            "no-packages",
            "at least one package is required".to_string(),
        ));
    }
    for package in &config.packages {
        if validate_package_name(&package.name).is_err() {
            errors.push(ValidationError::new(
                "invalid-package",
                format!("'{}' is not a valid module name", package.name),
            ));
        }
        if let Some(attr) = &package.version_attr {
            if validate_version_attr(&package.name, attr).is_err() {
                errors.push(ValidationError::new(
                    "invalid-version-attr",
                    format!(
                        "'{}' is not a valid attribute name for '{}'",
                        attr, package.name
                    ),
                ));
            }
        }
    }

    if config.accelerator.enabled && config.accelerator.interpreter.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-interpreter",
            "accelerator.interpreter is empty".to_string(),
        ));
    }

    if config.kernels.enabled && config.kernels.command.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-command",
            "kernels.command is empty".to_string(),
        ));
    }

    errors
}

/// Validate, joining every error into one [`EnvcheckError`].
pub fn validate(config: &VerifierConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(EnvcheckError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EnvironmentConfig;
    use crate::probes::PackageCheck;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&VerifierConfig::default()).is_empty());
        assert!(validate(&VerifierConfig::default()).is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = VerifierConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "zero-timeout");
    }

    #[test]
    fn empty_lists_are_rejected() {
        let config = VerifierConfig {
            environments: vec![],
            packages: vec![],
            ..Default::default()
        };
        let rules: Vec<_> = validate_config(&config)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert!(rules.contains(&"no-environments".to_string()));
        assert!(rules.contains(&"no-packages".to_string()));
    }

    #[test]
    fn injected_package_name_is_rejected() {
        let config = VerifierConfig {
            packages: vec![PackageCheck::new("os; os.system('id')", None)],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("not a valid module name"));
    }

    #[test]
    fn keyword_package_name_is_rejected() {
        let config = VerifierConfig {
            packages: vec![PackageCheck::new("class", None)],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-package");
    }

    #[test]
    fn dotted_version_attr_is_rejected() {
        let config = VerifierConfig {
            packages: vec![PackageCheck::new("torch", Some("version.cuda"))],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "invalid-version-attr");
    }

    #[test]
    fn blank_interpreter_is_rejected() {
        let config = VerifierConfig {
            environments: vec![EnvironmentConfig::new("  ", None)],
            ..Default::default()
        };
        assert_eq!(validate_config(&config)[0].rule, "empty-interpreter");
    }

    #[test]
    fn disabled_accelerator_may_be_blank() {
        let mut config = VerifierConfig::default();
        config.accelerator.enabled = false;
        config.accelerator.interpreter = String::new();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn errors_are_joined() {
        let config = VerifierConfig {
            timeout_secs: 0,
            packages: vec![],
            ..Default::default()
        };
        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("timeout_secs"));
        assert!(msg.contains("at least one package"));
    }
}
