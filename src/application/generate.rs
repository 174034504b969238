//! Generate Use Case
//!
//! Load, validate, merge and render policies, then write one `socket.yml`
//! per repository (or hand the rendered text back on a dry run).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::application::pipeline::{ExpiredRule, PolicyPipeline};
use crate::domain::policies::ValidationReport;
use crate::domain::ports::{ConfigRenderer, ConfigSink, PolicySource};

/// Options for the generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Only this repository; stored or not
    pub repo: Option<String>,
    /// Render without writing
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// One rendered configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    pub repo: String,
    pub content: String,
    /// Where it was written; `None` on a dry run
    pub path: Option<PathBuf>,
}

/// Result of the generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub report: ValidationReport,
    pub repository_count: usize,
    pub configs: Vec<GeneratedConfig>,
    pub expired: Vec<ExpiredRule>,
}

impl GenerateResult {
    /// Validation passed (warnings allowed)
    pub fn is_success(&self) -> bool {
        self.report.is_valid()
    }

    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.configs.iter().filter_map(|c| c.path.as_ref())
    }
}

/// Generate Use Case
///
/// Dependencies are injected so tests can run against in-memory sources and
/// sinks.
pub struct GenerateUseCase<S, K, R>
where
    S: PolicySource,
    K: ConfigSink,
    R: ConfigRenderer,
{
    source: S,
    sink: K,
    renderer: R,
    today: Option<NaiveDate>,
}

impl<S, K, R> GenerateUseCase<S, K, R>
where
    S: PolicySource,
    K: ConfigSink,
    R: ConfigRenderer,
{
    pub fn new(source: S, sink: K, renderer: R) -> Self {
        Self {
            source,
            sink,
            renderer,
            today: None,
        }
    }

    /// Fix the reference date used for expiry warnings
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn execute(&self, options: &GenerateOptions) -> Result<GenerateResult> {
        let mut pipeline = PolicyPipeline::new(&self.source, &self.renderer);
        if let Some(today) = self.today {
            pipeline = pipeline.with_today(today);
        }
        let output = pipeline
            .run(options.repo.as_deref())
            .with_context(|| format!("failed to load policies from {}", self.source.describe()))?;

        let mut result = GenerateResult {
            report: output.report,
            repository_count: output.repository_count,
            configs: Vec::new(),
            expired: output.expired,
        };

        if !options.dry_run {
            // Every target must resolve before the first write
            for repo in output.rendered.keys() {
                self.sink
                    .target_path(repo)
                    .with_context(|| format!("failed to write configuration for {repo}"))?;
            }
        }

        for (repo, content) in output.rendered {
            let path = if options.dry_run {
                None
            } else {
                let path = self
                    .sink
                    .write(&repo, &content)
                    .with_context(|| format!("failed to write configuration for {repo}"))?;
                info!("Written: {}", path.display());
                Some(path)
            };
            result.configs.push(GeneratedConfig {
                repo,
                content,
                path,
            });
        }

        Ok(result)
    }
}
