//! Plain-text rendering for human output.

use std::fmt::Write as _;

use socket_configurator::application::{ChangeType, DiffResult};
use socket_configurator::ValidationReport;

/// Header plus one `  - <finding>` line per error.
pub fn render_failure(header: &str, report: &ValidationReport, include_warnings: bool) -> String {
    let mut out = format!("{header}\n");
    for finding in report.iter_errors() {
        let _ = writeln!(out, "  - {finding}");
    }
    if include_warnings {
        for finding in report.iter_warnings() {
            let _ = writeln!(out, "  - warning: {finding}");
        }
    }
    out
}

/// Section printed for each repository in a dry run.
pub fn render_dry_run(repo: &str, file_name: &str, content: &str) -> String {
    let mut out = format!("\n--- {repo}/{file_name} ---\n{content}");
    if !content.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn render_diff(result: &DiffResult) -> String {
    let mut out = String::new();
    for entry in &result.entries {
        let label = match entry.change_type {
            ChangeType::Create => "new",
            ChangeType::Update => "modified",
            ChangeType::Unchanged => "unchanged",
        };
        let _ = writeln!(out, "{label}: {}", entry.path.display());
        if entry.change_type == ChangeType::Update {
            let _ = writeln!(out, "  ({})", entry.change.summary());
            out.push_str(&entry.change.unified);
        }
    }

    let _ = writeln!(
        out,
        "{} new, {} modified, {} unchanged",
        result.count(ChangeType::Create),
        result.count(ChangeType::Update),
        result.count(ChangeType::Unchanged)
    );
    out
}
