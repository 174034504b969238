//! Issue policy - one (issue type, action) pair
//!
//! Only used as a serialization unit; policies keep their issue rules as a
//! map.

use std::collections::BTreeMap;

use serde_yaml_ng::{Mapping, Value};

use crate::domain::raw::string_value;
use crate::domain::value_objects::{Action, IssueType};

/// Policy for a specific issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuePolicy {
    pub issue_type: IssueType,
    pub action: Action,
}

impl IssuePolicy {
    pub fn new(issue_type: IssueType, action: Action) -> Self {
        Self { issue_type, action }
    }

    /// Defaults to deferring to the organization setting.
    pub fn deferred(issue_type: IssueType) -> Self {
        Self::new(issue_type, Action::Defer)
    }

    /// `{<issueType>: <action>}`
    pub fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert(
            string_value(self.issue_type.as_str()),
            string_value(self.action.as_str()),
        );
        map
    }

    /// Build from external strings; `None` when either is unknown.
    pub fn from_pair(issue_type: &str, action: &str) -> Option<Self> {
        Some(Self::new(IssueType::parse(issue_type)?, Action::parse(action)?))
    }

    fn from_raw_entry(issue_type: &Value, action: &Value) -> Option<Self> {
        Self::from_pair(issue_type.as_str()?, action.as_str()?)
    }
}

/// Parse an issue-rule mapping, silently skipping entries with unknown
/// issue types or actions. Later keys win on collision.
pub(crate) fn issue_rules_from_mapping(map: Option<&Mapping>) -> BTreeMap<IssueType, Action> {
    map.into_iter()
        .flat_map(Mapping::iter)
        .filter_map(|(issue, action)| IssuePolicy::from_raw_entry(issue, action))
        .map(|policy| (policy.issue_type, policy.action))
        .collect()
}

pub(crate) fn issue_rules_to_mapping(rules: &BTreeMap<IssueType, Action>) -> Mapping {
    rules
        .iter()
        .flat_map(|(issue, action)| IssuePolicy::new(*issue, *action).to_dict())
        .collect()
}
