//! JSON output for CI.
//!
//! Every command prints exactly one object; the `event` field names the
//! command that produced it.

use std::io::{self, Write};

use serde::Serialize;
use socket_configurator::application::{
    ChangeType, DiffResult, ExpiredRule, GenerateResult, ValidateResult,
};
use socket_configurator::{Finding, ValidationReport};

/// Write a single event as one line of JSON.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

#[derive(Debug, Serialize)]
pub struct GeneratedEntry<'a> {
    pub repo: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct GenerateEvent<'a> {
    pub event: &'static str,
    pub success: bool,
    pub dry_run: bool,
    pub repositories: usize,
    pub findings: &'a [Finding],
    pub configs: Vec<GeneratedEntry<'a>>,
    pub expired: &'a [ExpiredRule],
}

impl<'a> GenerateEvent<'a> {
    pub fn new(result: &'a GenerateResult, dry_run: bool) -> Self {
        let configs = result
            .configs
            .iter()
            .map(|config| GeneratedEntry {
                repo: &config.repo,
                path: config.path.as_ref().map(|p| p.display().to_string()),
                content: dry_run.then_some(config.content.as_str()),
            })
            .collect();

        Self {
            event: "generate",
            success: result.is_success(),
            dry_run,
            repositories: result.repository_count,
            findings: &result.report.findings,
            configs,
            expired: &result.expired,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateEvent<'a> {
    pub event: &'static str,
    pub success: bool,
    pub strict_warnings: bool,
    pub repositories: usize,
    pub errors: usize,
    pub warnings: usize,
    pub findings: &'a [Finding],
}

impl<'a> ValidateEvent<'a> {
    pub fn new(result: &'a ValidateResult) -> Self {
        Self {
            event: "validate",
            success: result.is_success(),
            strict_warnings: result.strict_warnings,
            repositories: result.repository_count,
            errors: result.report.error_count(),
            warnings: result.report.warning_count(),
            findings: &result.report.findings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub file: String,
    pub success: bool,
    pub findings: &'a [Finding],
}

impl<'a> CheckEvent<'a> {
    pub fn new(file: &std::path::Path, report: &'a ValidationReport) -> Self {
        Self {
            event: "check",
            file: file.display().to_string(),
            success: report.is_valid(),
            findings: &report.findings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiffFileEntry<'a> {
    pub repo: &'a str,
    pub path: String,
    pub change: ChangeType,
    pub additions: usize,
    pub deletions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct DiffEvent<'a> {
    pub event: &'static str,
    pub success: bool,
    pub has_changes: bool,
    pub findings: &'a [Finding],
    pub files: Vec<DiffFileEntry<'a>>,
}

impl<'a> DiffEvent<'a> {
    pub fn new(result: &'a DiffResult) -> Self {
        let files = result
            .entries
            .iter()
            .map(|entry| DiffFileEntry {
                repo: &entry.repo,
                path: entry.path.display().to_string(),
                change: entry.change_type,
                additions: entry.change.additions,
                deletions: entry.change.deletions,
                diff: entry
                    .change
                    .has_changes()
                    .then_some(entry.change.unified.as_str()),
            })
            .collect();

        Self {
            event: "diff",
            success: result.is_success(),
            has_changes: result.has_changes(),
            findings: &result.report.findings,
            files,
        }
    }
}

/// Emitted when a command fails before producing a result.
#[derive(Debug, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, error: &anyhow::Error) -> Self {
        Self {
            event: "error",
            command,
            message: format!("{error:#}"),
        }
    }
}
