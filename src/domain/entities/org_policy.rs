//! Organization policy - defaults every repository inherits

use std::collections::{BTreeMap, BTreeSet};

use serde_yaml_ng::{Mapping, Value};

use super::issue_policy::{issue_rules_from_mapping, issue_rules_to_mapping};
use super::package_rule::{package_rules_from_sequence, package_rules_to_sequence, PackageRule};
use super::socket_policy::{string_sequence, string_set, SocketPolicy};
use crate::domain::raw::{self, string_value};
use crate::domain::schema::{org as keys, DEFAULT_ORG_NAME};
use crate::domain::value_objects::{Action, IssueType};

/// Organization-wide default policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPolicy {
    pub name: String,
    pub description: String,
    pub default_issue_rules: BTreeMap<IssueType, Action>,
    /// Always `Action::Error` once parsed
    pub banned_packages: Vec<PackageRule>,
    /// Always `Action::Ignore` once parsed
    pub allowed_packages: Vec<PackageRule>,
    pub default_ignore_paths: BTreeSet<String>,
}

impl Default for OrgPolicy {
    fn default() -> Self {
        Self {
            name: DEFAULT_ORG_NAME.to_string(),
            description: String::new(),
            default_issue_rules: BTreeMap::new(),
            banned_packages: Vec::new(),
            allowed_packages: Vec::new(),
            default_ignore_paths: BTreeSet::new(),
        }
    }
}

impl OrgPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting point for merging repository overrides.
    ///
    /// Banned packages precede allowed packages.
    pub fn to_socket_policy(&self) -> SocketPolicy {
        SocketPolicy {
            issue_rules: self.default_issue_rules.clone(),
            package_rules: self
                .banned_packages
                .iter()
                .chain(&self.allowed_packages)
                .cloned()
                .collect(),
            ignore_paths: self.default_ignore_paths.clone(),
            ..SocketPolicy::default()
        }
    }

    pub fn from_dict(data: &Mapping) -> Self {
        let forced = |key: &str, action: Action| -> Vec<PackageRule> {
            package_rules_from_sequence(raw::sequence_at(data, key))
                .into_iter()
                .map(|rule| rule.with_action(action))
                .collect()
        };

        Self {
            name: raw::str_at(data, keys::NAME)
                .unwrap_or(DEFAULT_ORG_NAME)
                .to_string(),
            description: raw::str_at(data, keys::DESCRIPTION)
                .unwrap_or_default()
                .to_string(),
            default_issue_rules: issue_rules_from_mapping(raw::mapping_at(
                data,
                keys::DEFAULT_ISSUE_RULES,
            )),
            banned_packages: forced(keys::BANNED_PACKAGES, Action::Error),
            allowed_packages: forced(keys::ALLOWED_PACKAGES, Action::Ignore),
            default_ignore_paths: string_set(raw::sequence_at(data, keys::DEFAULT_IGNORE_PATHS)),
        }
    }

    /// Sparse form of `org-defaults.yml`; empty fields are omitted.
    pub fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        if !self.name.is_empty() {
            map.insert(string_value(keys::NAME), string_value(&self.name));
        }
        if !self.description.is_empty() {
            map.insert(string_value(keys::DESCRIPTION), string_value(&self.description));
        }
        if !self.default_issue_rules.is_empty() {
            map.insert(
                string_value(keys::DEFAULT_ISSUE_RULES),
                Value::Mapping(issue_rules_to_mapping(&self.default_issue_rules)),
            );
        }
        if !self.banned_packages.is_empty() {
            map.insert(
                string_value(keys::BANNED_PACKAGES),
                package_rules_to_sequence(&self.banned_packages),
            );
        }
        if !self.allowed_packages.is_empty() {
            map.insert(
                string_value(keys::ALLOWED_PACKAGES),
                package_rules_to_sequence(&self.allowed_packages),
            );
        }
        if !self.default_ignore_paths.is_empty() {
            map.insert(
                string_value(keys::DEFAULT_IGNORE_PATHS),
                string_sequence(&self.default_ignore_paths),
            );
        }
        map
    }
}
