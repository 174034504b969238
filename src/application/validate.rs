//! Validate Use Case
//!
//! Validation only: load the policy set and report findings without
//! generating anything.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::policies::{PolicyValidator, ValidationReport};
use crate::domain::ports::PolicySource;

/// Options for the validate operation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Treat warnings as errors
    pub strict_warnings: bool,
}

/// Result of the validate operation
#[derive(Debug, Clone, Default)]
pub struct ValidateResult {
    pub report: ValidationReport,
    pub repository_count: usize,
    pub strict_warnings: bool,
}

impl ValidateResult {
    pub fn is_success(&self) -> bool {
        if self.strict_warnings {
            self.report.is_clean()
        } else {
            self.report.is_valid()
        }
    }
}

pub struct ValidateUseCase<S: PolicySource> {
    source: S,
}

impl<S: PolicySource> ValidateUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: ValidateOptions) -> Result<ValidateResult> {
        info!("Loading policies from: {}", self.source.describe());
        let policies = self
            .source
            .load()
            .with_context(|| format!("failed to load policies from {}", self.source.describe()))?;
        info!("Loaded {} repository policies", policies.repository_count());

        let report = PolicyValidator::new().validate_all(&policies);
        for warning in report.iter_warnings() {
            warn!("{warning}");
        }

        Ok(ValidateResult {
            report,
            repository_count: policies.repository_count(),
            strict_warnings: options.strict_warnings,
        })
    }
}
