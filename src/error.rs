//! Error types for the configurator
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Policy findings are never errors here: they live in `ValidationReport`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configurator operations
pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

/// Main error type for configurator I/O and rendering
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// Policy directory is missing
    #[error("policy directory does not exist: {path}")]
    PolicyDirNotFound { path: PathBuf },

    /// A policy or config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Policy file is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    InvalidYaml { file: PathBuf, message: String },

    /// Policy file parsed, but its top level is not a mapping
    #[error("{file} must contain a mapping at the top level")]
    NotAMapping { file: PathBuf },

    /// Repository name cannot be used as an output directory
    #[error("invalid repository name '{name}' - must be a single path component")]
    InvalidRepositoryName { name: String },

    /// YAML serialization failed
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_yaml_ng::Error),

    /// Tool configuration file is invalid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_policy_dir_not_found() {
        let err = ConfiguratorError::PolicyDirNotFound {
            path: PathBuf::from("policies"),
        };
        assert_eq!(err.to_string(), "policy directory does not exist: policies");
    }

    #[test]
    fn test_error_display_not_a_mapping() {
        let err = ConfiguratorError::NotAMapping {
            file: PathBuf::from("policies/repositories/api.yml"),
        };
        assert_eq!(
            err.to_string(),
            "policies/repositories/api.yml must contain a mapping at the top level"
        );
    }

    #[test]
    fn test_error_display_invalid_repository_name() {
        let err = ConfiguratorError::InvalidRepositoryName {
            name: "../etc".to_string(),
        };
        assert!(err.to_string().contains("'../etc'"));
    }
}
