//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod fs_policy;

pub use fs_policy::{read_yaml_mapping, FsPolicyRepository, ORG_DEFAULTS_FILE, REPOSITORIES_DIR};
