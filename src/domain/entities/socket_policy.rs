//! Socket policy entity - the effective `socket.yml` for one repository

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde_yaml_ng::{Mapping, Value};

use super::issue_policy::{issue_rules_from_mapping, issue_rules_to_mapping};
use super::package_rule::{package_rules_from_sequence, package_rules_to_sequence, PackageRule};
use crate::domain::raw::{self, string_value};
use crate::domain::schema::{socket as keys, DEFAULT_VERSION};
use crate::domain::value_objects::{Action, IssueType};

/// Complete Socket policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketPolicy {
    pub version: i64,
    pub enabled: bool,
    /// Issue-level policies
    pub issue_rules: BTreeMap<IssueType, Action>,
    /// Package-level allow/deny rules; order is significant downstream
    pub package_rules: Vec<PackageRule>,
    /// Glob patterns Socket should not scan
    pub ignore_paths: BTreeSet<String>,
    pub project_name: String,
}

impl Default for SocketPolicy {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            enabled: true,
            issue_rules: BTreeMap::new(),
            package_rules: Vec::new(),
            ignore_paths: BTreeSet::new(),
            project_name: String::new(),
        }
    }
}

impl SocketPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_issue_rule(mut self, issue: IssueType, action: Action) -> Self {
        self.issue_rules.insert(issue, action);
        self
    }

    pub fn with_package_rule(mut self, rule: PackageRule) -> Self {
        self.package_rules.push(rule);
        self
    }

    pub fn with_ignore_path(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_paths.insert(pattern.into());
        self
    }

    /// Convert to `socket.yml` shape. Empty sections are omitted.
    pub fn to_dict(&self) -> Mapping {
        let mut config = Mapping::new();
        config.insert(string_value(keys::VERSION), Value::from(self.version));
        config.insert(string_value(keys::ENABLED), Value::Bool(self.enabled));

        if !self.project_name.is_empty() {
            config.insert(
                string_value(keys::PROJECT_NAME),
                string_value(&self.project_name),
            );
        }

        if !self.issue_rules.is_empty() {
            config.insert(
                string_value(keys::ISSUE_RULES),
                Value::Mapping(issue_rules_to_mapping(&self.issue_rules)),
            );
        }

        if !self.package_rules.is_empty() {
            config.insert(
                string_value(keys::DEFERRED_PACKAGE_RULES),
                package_rules_to_sequence(&self.package_rules),
            );
        }

        if !self.ignore_paths.is_empty() {
            config.insert(
                string_value(keys::IGNORE),
                string_sequence(&self.ignore_paths),
            );
        }

        config
    }

    /// Build from a raw repository mapping. Never fails.
    ///
    /// Rules under the legacy `packageRules` key are appended after the
    /// `deferredPackageRules` entries without deduplication.
    pub fn from_dict(data: &Mapping) -> Self {
        let defaults = Self::default();

        let mut package_rules =
            package_rules_from_sequence(raw::sequence_at(data, keys::DEFERRED_PACKAGE_RULES));
        package_rules.extend(package_rules_from_sequence(raw::sequence_at(
            data,
            keys::PACKAGE_RULES,
        )));

        Self {
            version: raw::present(data, keys::VERSION)
                .and_then(Value::as_i64)
                .unwrap_or(defaults.version),
            enabled: raw::present(data, keys::ENABLED)
                .and_then(Value::as_bool)
                .unwrap_or(defaults.enabled),
            issue_rules: issue_rules_from_mapping(raw::mapping_at(data, keys::ISSUE_RULES)),
            package_rules,
            ignore_paths: string_set(raw::sequence_at(data, keys::IGNORE)),
            project_name: raw::str_at(data, keys::PROJECT_NAME)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Merge `other` over `self`, producing a new policy; `other` takes
    /// precedence.
    ///
    /// Package rules from `other` come first in their original order,
    /// followed by rules from `self` whose `(name, version)` is not already
    /// covered by `other`.
    pub fn merge(&self, other: &SocketPolicy) -> SocketPolicy {
        let mut issue_rules = self.issue_rules.clone();
        issue_rules.extend(other.issue_rules.iter().map(|(k, v)| (*k, *v)));

        let seen: HashSet<(&str, &str)> = other.package_rules.iter().map(PackageRule::key).collect();
        let package_rules = other
            .package_rules
            .iter()
            .chain(
                self.package_rules
                    .iter()
                    .filter(|rule| !seen.contains(&rule.key())),
            )
            .cloned()
            .collect();

        SocketPolicy {
            version: self.version.max(other.version),
            enabled: other.enabled,
            issue_rules,
            package_rules,
            ignore_paths: self.ignore_paths.union(&other.ignore_paths).cloned().collect(),
            project_name: if other.project_name.is_empty() {
                self.project_name.clone()
            } else {
                other.project_name.clone()
            },
        }
    }
}

pub(crate) fn string_set(items: Option<&[Value]>) -> BTreeSet<String> {
    items
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

pub(crate) fn string_sequence<'a>(items: impl IntoIterator<Item = &'a String>) -> Value {
    Value::Sequence(items.into_iter().map(string_value).collect())
}
