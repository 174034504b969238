//! Validation findings and the report that collects them.

use std::fmt;

use serde::Serialize;

/// How serious a finding is. Only errors fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single problem found in a policy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Where the problem is, e.g. `repository:api:deferredPackageRules[0]`
    pub source: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Ordered findings from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, source.into(), message.into());
    }

    pub fn add_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, source.into(), message.into());
    }

    fn push(&mut self, severity: Severity, source: String, message: String) {
        self.findings.push(Finding {
            severity,
            source,
            message,
        });
    }

    /// Append every finding of `other`, keeping order.
    pub fn extend(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    pub fn iter_errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn iter_warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Errors rendered as `<source>: <message>`
    pub fn errors(&self) -> Vec<String> {
        self.iter_errors().map(ToString::to_string).collect()
    }

    /// Warnings rendered as `<source>: <message>`
    pub fn warnings(&self) -> Vec<String> {
        self.iter_warnings().map(ToString::to_string).collect()
    }

    pub fn error_count(&self) -> usize {
        self.iter_errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.iter_warnings().count()
    }

    /// No errors; warnings are allowed
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
