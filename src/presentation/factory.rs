//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{DiffUseCase, GenerateUseCase, ValidateUseCase};
use crate::config::PathsConfig;
use crate::infrastructure::{FsConfigSink, FsPolicyRepository, YamlRenderer};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<FsPolicyRepository, FsConfigSink, YamlRenderer>;

/// Type alias for the concrete DiffUseCase with all dependencies
pub type ConcreteDiffUseCase = DiffUseCase<FsPolicyRepository, FsConfigSink, YamlRenderer>;

/// Resolved input and output locations after CLI flags are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyPaths {
    pub policy_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl PolicyPaths {
    /// Flags win over the loaded configuration.
    pub fn resolve(
        config: &PathsConfig,
        policy_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            policy_dir: policy_dir.unwrap_or_else(|| config.policy_dir.clone()),
            output_dir: output_dir.unwrap_or_else(|| config.output_dir.clone()),
            output_file: config.output_file.clone(),
        }
    }

    fn sink(&self) -> FsConfigSink {
        FsConfigSink::new(&self.output_dir).with_file_name(&self.output_file)
    }
}

pub fn create_generate_use_case(paths: &PolicyPaths) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(
        FsPolicyRepository::new(&paths.policy_dir),
        paths.sink(),
        YamlRenderer::new(),
    )
}

pub fn create_diff_use_case(paths: &PolicyPaths) -> ConcreteDiffUseCase {
    DiffUseCase::new(
        FsPolicyRepository::new(&paths.policy_dir),
        paths.sink(),
        YamlRenderer::new(),
    )
}

pub fn create_validate_use_case(paths: &PolicyPaths) -> ValidateUseCase<FsPolicyRepository> {
    ValidateUseCase::new(FsPolicyRepository::new(&paths.policy_dir))
}
