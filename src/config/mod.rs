//! Tool configuration
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SOCKET_CONFIGURATOR_*)
//! 3. Project config (./socket-configurator.toml, or `--config`)
//! 4. User config (<config dir>/socket-configurator/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator, EnvWarning};
pub use loader::{
    apply_env_overrides, load_layered, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_OUTPUT_DIR, ENV_POLICY_DIR, ENV_VERBOSITY, PROJECT_CONFIG_FILE, USER_CONFIG_DIR,
};
pub use types::{Config, OutputConfig, PathsConfig, ValidationConfig, Verbosity};
