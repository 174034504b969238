//! Socket Configurator - centralized Socket security policy management
//!
//! Loads organization defaults and per-repository overrides, validates them,
//! merges them into one effective policy per repository and renders the
//! result as `socket.yml` for the Socket dependency scanner.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateUseCase, SocketConfigurator, ValidateUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{IssuePolicy, OrgPolicy, PackageRule, PolicySet, SocketPolicy};
pub use domain::policies::{Finding, PolicyValidator, Severity, ValidationReport};
pub use domain::value_objects::{Action, IssueType};
pub use error::{ConfiguratorError, ConfiguratorResult};
pub use infrastructure::{FsConfigSink, FsPolicyRepository, YamlRenderer};
