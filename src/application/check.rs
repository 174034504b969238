//! Check Use Case
//!
//! Validates a single, already rendered `socket.yml`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::domain::policies::{PolicyValidator, ValidationReport};
use crate::infrastructure::repositories::read_yaml_mapping;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckUseCase;

impl CheckUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, path: &Path) -> Result<ValidationReport> {
        debug!(path = %path.display(), "checking rendered configuration");
        let content = read_yaml_mapping(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        let report = PolicyValidator::new().validate_socket_yml(&content);
        for warning in report.iter_warnings() {
            warn!("{warning}");
        }
        Ok(report)
    }
}
