//! Package rule entity - an allow/deny decision for one package

use chrono::NaiveDate;
use serde_yaml_ng::{Mapping, Value};

use crate::domain::raw::{self, string_value};
use crate::domain::schema::{rule as keys, ANY_VERSION};
use crate::domain::value_objects::{parse_expiry_date, Action};

/// Rule for a specific package.
///
/// `name` may be empty after parsing; the validator reports that as an
/// error instead of the loader failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRule {
    pub name: String,
    /// Version constraint or `*` for all versions (not interpreted here)
    pub version: String,
    /// Usually `Ignore` (allow) or `Error` (deny)
    pub action: Action,
    /// Why this rule exists
    pub reason: String,
    /// Optional expiration date, ISO-8601
    pub expires: Option<String>,
}

impl Default for PackageRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: ANY_VERSION.to_string(),
            action: Action::Ignore,
            reason: String::new(),
            expires: None,
        }
    }
}

impl PackageRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    /// Identity used when merging rule lists
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.version)
    }

    /// Parsed expiration date, if `expires` is set and well formed
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expires.as_deref().and_then(parse_expiry_date)
    }

    /// A rule is expired the day after its expiration date.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|expiry| expiry < today)
    }

    pub fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert(string_value(keys::NAME), string_value(&self.name));
        map.insert(string_value(keys::VERSION), string_value(&self.version));
        map.insert(string_value(keys::ACTION), string_value(self.action.as_str()));
        if !self.reason.is_empty() {
            map.insert(string_value(keys::REASON), string_value(&self.reason));
        }
        if let Some(expires) = self.expires.as_deref().filter(|e| !e.is_empty()) {
            map.insert(string_value(keys::EXPIRES), string_value(expires));
        }
        map
    }

    /// Never fails: wrong or missing values fall back to defaults.
    pub fn from_dict(data: &Mapping) -> Self {
        let defaults = Self::default();
        Self {
            name: raw::str_at(data, keys::NAME).unwrap_or_default().to_string(),
            version: raw::str_at(data, keys::VERSION)
                .map(str::to_string)
                .unwrap_or(defaults.version),
            action: raw::str_at(data, keys::ACTION)
                .and_then(Action::parse)
                .unwrap_or(defaults.action),
            reason: raw::str_at(data, keys::REASON).unwrap_or_default().to_string(),
            expires: raw::str_at(data, keys::EXPIRES)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        }
    }
}

/// Parse a rule list, skipping entries that are not mappings.
pub(crate) fn package_rules_from_sequence(items: Option<&[Value]>) -> Vec<PackageRule> {
    items
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_mapping)
        .map(PackageRule::from_dict)
        .collect()
}

pub(crate) fn package_rules_to_sequence(rules: &[PackageRule]) -> Value {
    Value::Sequence(
        rules
            .iter()
            .map(|rule| Value::Mapping(rule.to_dict()))
            .collect(),
    )
}
