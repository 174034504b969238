//! Policy pipeline
//!
//! Shared front half of `generate` and `diff`.
//!
//! ## Flow
//!
//! 1. Load the raw policy set from a `PolicySource`
//! 2. Validate it; stop before rendering if there are errors
//! 3. Merge organization defaults with repository overrides
//! 4. Flag expired package rules and render every configuration

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::application::configurator::SocketConfigurator;
use crate::domain::policies::{PolicyValidator, ValidationReport};
use crate::domain::ports::{ConfigRenderer, PolicySource};
use crate::domain::services::expired_rules;
use crate::error::ConfiguratorResult;

/// A package rule whose `expires` date has passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiredRule {
    pub repo: String,
    pub package: String,
    pub expires: String,
}

/// What the pipeline produced
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub report: ValidationReport,
    pub repository_count: usize,
    /// Repository name -> rendered file content; empty when validation failed
    pub rendered: BTreeMap<String, String>,
    pub expired: Vec<ExpiredRule>,
}

impl PipelineOutput {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

pub struct PolicyPipeline<'a> {
    source: &'a dyn PolicySource,
    renderer: &'a dyn ConfigRenderer,
    today: NaiveDate,
}

impl<'a> PolicyPipeline<'a> {
    pub fn new(source: &'a dyn PolicySource, renderer: &'a dyn ConfigRenderer) -> Self {
        Self {
            source,
            renderer,
            today: Utc::now().date_naive(),
        }
    }

    /// Reference date for expiry checks.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn run(&self, repo: Option<&str>) -> ConfiguratorResult<PipelineOutput> {
        info!("Loading policies from: {}", self.source.describe());
        let policies = self.source.load()?;
        info!("Loaded {} repository policies", policies.repository_count());

        let report = PolicyValidator::new().validate_all(&policies);
        for warning in report.iter_warnings() {
            warn!("{warning}");
        }

        let mut output = PipelineOutput {
            repository_count: policies.repository_count(),
            report,
            ..PipelineOutput::default()
        };
        if !output.is_valid() {
            return Ok(output);
        }
        info!("Policy validation passed");

        let configurator = SocketConfigurator::from_policy_set(&policies);
        for (name, policy) in configurator.effective_policies(repo) {
            for rule in expired_rules(&policy, self.today) {
                let expires = rule.expires.clone().unwrap_or_default();
                warn!(
                    repo = %name,
                    package = %rule.name,
                    expires = %expires,
                    "package rule has expired"
                );
                output.expired.push(ExpiredRule {
                    repo: name.clone(),
                    package: rule.name.clone(),
                    expires,
                });
            }
            let content = self.renderer.render(&policy.to_dict())?;
            output.rendered.insert(name, content);
        }

        Ok(output)
    }
}
