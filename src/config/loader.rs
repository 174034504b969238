//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfiguratorError, ConfiguratorResult};

use super::env_validator::{suggest, EnvVarValidator, EnvWarning};
use super::types::{Config, Verbosity};

pub const PROJECT_CONFIG_FILE: &str = "socket-configurator.toml";
/// Directory under the platform config dir holding `config.toml`
pub const USER_CONFIG_DIR: &str = "socket-configurator";
const USER_CONFIG_FILE: &str = "config.toml";

pub const ENV_POLICY_DIR: &str = "SOCKET_CONFIGURATOR_POLICY_DIR";
pub const ENV_OUTPUT_DIR: &str = "SOCKET_CONFIGURATOR_OUTPUT_DIR";
pub const ENV_VERBOSITY: &str = "SOCKET_CONFIGURATOR_VERBOSITY";

const KNOWN_KEYS: &[&str] = &[
    "paths",
    "policy_dir",
    "output_dir",
    "output_file",
    "validation",
    "strict_warnings",
    "output",
    "verbosity",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Result of walking the configuration hierarchy
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    pub env_warnings: Vec<EnvWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfiguratorResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfiguratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfiguratorError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, KNOWN_KEYS),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Walk the file hierarchy, then apply environment overrides.
///
/// An explicit path must exist. Otherwise the project file in `cwd` wins
/// over the user file in `user_config_dir`; with neither, defaults are used.
pub fn load_layered(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> ConfiguratorResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(cwd.join(PROJECT_CONFIG_FILE)),
            user_config_dir.map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE)),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.is_file()),
    };

    let (config, warnings) = match &candidate {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };
    let (config, env_warnings) = with_env_overrides(config);

    Ok(LoadedConfig {
        config,
        source: candidate,
        warnings,
        env_warnings,
    })
}

/// Apply SOCKET_CONFIGURATOR_* overrides from the process environment
pub fn with_env_overrides(config: Config) -> (Config, Vec<EnvWarning>) {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<EnvWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(dir) = lookup(ENV_POLICY_DIR).filter(|v| !v.is_empty()) {
        config.paths.policy_dir = PathBuf::from(dir);
    }

    if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
        config.paths.output_dir = PathBuf::from(dir);
    }

    if let Some(value) = lookup(ENV_VERBOSITY) {
        match EnvVarValidator::new(ENV_VERBOSITY, &Verbosity::NAMES).parse(&value, Verbosity::parse) {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(warning) => warnings.push(warning),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
