//! Policy validator
//!
//! Checks raw policy mappings before they are converted into entities.
//! Every check reads the untyped mapping so that problems the lenient
//! `from_dict` parsers would silently drop are still reported.

use serde_yaml_ng::{Mapping, Value};

use super::report::ValidationReport;
use crate::domain::entities::PolicySet;
use crate::domain::raw::{self, describe};
use crate::domain::schema::{org, rule, socket, SUPPORTED_VERSIONS};
use crate::domain::value_objects::{parse_expiry_date, Action, IssueType};

const ORG_SOURCE: &str = "org-defaults";
const SOCKET_YML_SOURCE: &str = "socket.yml";

/// Stateless validator; every entry point returns a fresh report.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyValidator;

impl PolicyValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate organization defaults (when non-empty) and every repository.
    pub fn validate_all(&self, policies: &PolicySet) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !policies.org.is_empty() {
            report.extend(self.validate_org(&policies.org));
        }

        for (name, policy) in &policies.repositories {
            report.extend(self.validate_repository(name, policy));
        }

        report
    }

    pub fn validate_org(&self, policy: &Mapping) -> ValidationReport {
        let mut report = ValidationReport::new();
        let source = ORG_SOURCE;

        if let Some(rules) = section_mapping(policy, org::DEFAULT_ISSUE_RULES, source, &mut report) {
            check_issue_rules(rules, source, &mut report);
        }

        if let Some(rules) = section_sequence(policy, org::BANNED_PACKAGES, source, &mut report) {
            check_package_rules(rules, source, org::BANNED_PACKAGES, &mut report);
        }

        if let Some(rules) = section_sequence(policy, org::ALLOWED_PACKAGES, source, &mut report) {
            check_package_rules(rules, source, org::ALLOWED_PACKAGES, &mut report);
            for entry in rules.iter().filter_map(Value::as_mapping) {
                check_allowed_malware(entry, source, &mut report);
            }
        }

        if let Some(paths) = section_sequence(policy, org::DEFAULT_IGNORE_PATHS, source, &mut report) {
            check_ignore_paths(paths, source, org::DEFAULT_IGNORE_PATHS, &mut report);
        }

        report
    }

    pub fn validate_repository(&self, name: &str, policy: &Mapping) -> ValidationReport {
        let mut report = ValidationReport::new();
        let source = format!("repository:{name}");

        check_enabled(policy, &source, &mut report);

        if let Some(rules) = section_mapping(policy, socket::ISSUE_RULES, &source, &mut report) {
            check_issue_rules(rules, &source, &mut report);
        }

        for key in [socket::PACKAGE_RULES, socket::DEFERRED_PACKAGE_RULES] {
            if let Some(rules) = section_sequence(policy, key, &source, &mut report) {
                check_package_rules(rules, &source, key, &mut report);
            }
        }

        if let Some(paths) = section_sequence(policy, socket::IGNORE, &source, &mut report) {
            check_ignore_paths(paths, &source, socket::IGNORE, &mut report);
        }

        report
    }

    /// Validate one rendered `socket.yml`.
    pub fn validate_socket_yml(&self, content: &Mapping) -> ValidationReport {
        let mut report = ValidationReport::new();
        let source = SOCKET_YML_SOURCE;

        if let Some(version) = raw::present(content, socket::VERSION) {
            let supported = version
                .as_i64()
                .is_some_and(|v| SUPPORTED_VERSIONS.contains(&v));
            if !supported {
                report.add_error(
                    source,
                    format!("Unsupported version '{}'", describe(version)),
                );
            }
        }

        check_enabled(content, source, &mut report);

        if let Some(rules) = section_mapping(content, socket::ISSUE_RULES, source, &mut report) {
            check_issue_rules(rules, source, &mut report);
        }

        if let Some(rules) =
            section_sequence(content, socket::DEFERRED_PACKAGE_RULES, source, &mut report)
        {
            check_package_rules(rules, source, socket::DEFERRED_PACKAGE_RULES, &mut report);
        }

        if let Some(paths) = section_sequence(content, socket::IGNORE, source, &mut report) {
            check_ignore_paths(paths, source, socket::IGNORE, &mut report);
        }

        report
    }
}

/// A mapping-valued section; `null` or absent reads as empty.
fn section_mapping<'a>(
    map: &'a Mapping,
    key: &str,
    source: &str,
    report: &mut ValidationReport,
) -> Option<&'a Mapping> {
    match raw::present(map, key)? {
        Value::Mapping(inner) => Some(inner),
        _ => {
            report.add_error(source, format!("'{key}' must be a mapping"));
            None
        }
    }
}

/// A list-valued section; `null` or absent reads as empty.
fn section_sequence<'a>(
    map: &'a Mapping,
    key: &str,
    source: &str,
    report: &mut ValidationReport,
) -> Option<&'a [Value]> {
    match raw::present(map, key)? {
        Value::Sequence(items) => Some(items),
        _ => {
            report.add_error(source, format!("'{key}' must be a list"));
            None
        }
    }
}

fn check_enabled(map: &Mapping, source: &str, report: &mut ValidationReport) {
    if let Some(enabled) = map.get(socket::ENABLED) {
        if !enabled.is_bool() {
            report.add_error(source, "'enabled' must be a boolean");
        }
    }
}

fn check_issue_rules(rules: &Mapping, source: &str, report: &mut ValidationReport) {
    for (issue, action) in rules {
        check_issue_rule(issue, action, source, report);
    }
}

fn check_issue_rule(issue: &Value, action: &Value, source: &str, report: &mut ValidationReport) {
    let issue_name = describe(issue);
    let action = action.as_str().and_then(Action::parse).ok_or(action);

    if let Err(raw_action) = action {
        report.add_error(
            source,
            format!(
                "Invalid action '{}' for issue '{issue_name}'",
                describe(raw_action)
            ),
        );
    }

    let known = issue.as_str().and_then(IssueType::parse);
    if known.is_none() {
        report.add_warning(
            source,
            format!("Unknown issue type '{issue_name}' - may be a new Socket feature"),
        );
    }

    if action == Ok(Action::Ignore) && known.is_some_and(|issue| issue.is_critical()) {
        report.add_warning(
            source,
            format!("Ignoring critical issue type '{issue_name}' is not recommended"),
        );
    }
}

fn check_package_rules(rules: &[Value], source: &str, key: &str, report: &mut ValidationReport) {
    for (i, entry) in rules.iter().enumerate() {
        let entry_source = format!("{source}:{key}[{i}]");
        match entry.as_mapping() {
            Some(entry) => check_package_rule(entry, &entry_source, report),
            None => report.add_error(entry_source, "package rule must be a mapping"),
        }
    }
}

fn check_package_rule(entry: &Mapping, source: &str, report: &mut ValidationReport) {
    let name = raw::present(entry, rule::NAME);
    match name {
        Some(value) if !raw::is_truthy(value) => {
            report.add_error(source, "Missing required field 'name'");
        }
        Some(value) if !value.is_string() => {
            report.add_error(source, "'name' must be a string");
        }
        Some(_) => {}
        None => report.add_error(source, "Missing required field 'name'"),
    }

    if let Some(action) = raw::present(entry, rule::ACTION).filter(|a| raw::is_truthy(a)) {
        if action.as_str().and_then(Action::parse).is_none() {
            report.add_error(source, format!("Invalid action '{}'", describe(action)));
        }
    }

    if let Some(version) = entry.get(rule::VERSION) {
        if !version.is_string() {
            report.add_error(source, "'version' must be a string");
        }
    }

    if let Some(expires) = raw::present(entry, rule::EXPIRES).filter(|e| raw::is_truthy(e)) {
        if expires.as_str().and_then(parse_expiry_date).is_none() {
            report.add_error(
                source,
                "Invalid 'expires' date format. Use ISO 8601 (YYYY-MM-DD)",
            );
        }
    }

    let has_reason = raw::present(entry, rule::REASON).is_some_and(raw::is_truthy);
    if !has_reason {
        let shown = name.map(describe).unwrap_or_else(|| "?".to_string());
        report.add_warning(
            source,
            format!("Package rule for '{shown}' has no reason"),
        );
    }
}

fn check_allowed_malware(entry: &Mapping, source: &str, report: &mut ValidationReport) {
    let Some(name) = raw::present(entry, rule::NAME).filter(|n| raw::is_truthy(n)) else {
        return;
    };
    let mentions_malware = raw::str_at(entry, rule::REASON)
        .is_some_and(|reason| reason.to_lowercase().contains("malware"));
    if mentions_malware {
        report.add_warning(
            source,
            format!(
                "Allowing package '{}' with malware in reason",
                describe(name)
            ),
        );
    }
}

fn check_ignore_paths(paths: &[Value], source: &str, key: &str, report: &mut ValidationReport) {
    for (i, path) in paths.iter().enumerate() {
        if !path.is_string() {
            report.add_error(format!("{source}:{key}[{i}]"), "must be a string");
        }
    }
}
