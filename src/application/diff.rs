//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Run the policy pipeline (load, validate, merge, render)
//! 2. Compare each rendered file with what the sink currently holds
//! 3. Return what would change
//!
//! This is essentially a dry-run of the generate use case.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::pipeline::PolicyPipeline;
use crate::domain::policies::ValidationReport;
use crate::domain::ports::{ConfigRenderer, ConfigSink, PolicySource};
use crate::domain::services::{Differ, TextChange};

/// Type of change for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// File does not exist yet
    Create,
    /// File exists with different content
    Update,
    /// File already matches
    Unchanged,
}

/// One repository's pending change
#[derive(Debug, Clone)]
pub struct DiffEntry {
    pub repo: String,
    pub path: PathBuf,
    pub change_type: ChangeType,
    pub change: TextChange,
}

/// Result of the diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub report: ValidationReport,
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn is_success(&self) -> bool {
        self.report.is_valid()
    }

    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change_type != ChangeType::Unchanged)
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .count()
    }
}

pub struct DiffUseCase<S, K, R>
where
    S: PolicySource,
    K: ConfigSink,
    R: ConfigRenderer,
{
    source: S,
    sink: K,
    renderer: R,
}

impl<S, K, R> DiffUseCase<S, K, R>
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
        }
    }

    /// Returns what would change without making any modifications.
    pub fn execute(&self, repo: Option<&str>) -> Result<DiffResult> {
        let output = PolicyPipeline::new(&self.source, &self.renderer)
            .run(repo)
            .with_context(|| format!("failed to load policies from {}", self.source.describe()))?;

        let differ = Differ::new();
        let mut entries = Vec::with_capacity(output.rendered.len());

        for (name, content) in output.rendered {
            let path = self.sink.target_path(&name)?;
            let existing = self
                .sink
                .read_existing(&name)
                .with_context(|| format!("failed to read {}", path.display()))?;

            let label = format!("{name}/{}", file_name(&path));
            let (change_type, change) = match existing {
                None => (
                    ChangeType::Create,
                    differ.diff(&label, "", &content),
                ),
                Some(old) => {
                    let change = differ.diff(&label, &old, &content);
                    let change_type = if change.has_changes() {
                        ChangeType::Update
                    } else {
                        ChangeType::Unchanged
                    };
                    (change_type, change)
                }
            };

            entries.push(DiffEntry {
                repo: name,
                path,
                change_type,
                change,
            });
        }

        Ok(DiffResult {
            report: output.report,
            entries,
        })
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
