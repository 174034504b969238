//! Policy set - the raw input boundary
//!
//! Holds policy files exactly as loaded: one organization mapping and one
//! mapping per repository. Both the validator and the configurator start
//! from here.

use std::collections::BTreeMap;

use serde_yaml_ng::Mapping;

use crate::domain::ports::PolicySource;
use crate::error::ConfiguratorResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicySet {
    /// Organization defaults; empty when `org-defaults.yml` is absent
    pub org: Mapping,
    /// Repository name -> raw override mapping
    pub repositories: BTreeMap<String, Mapping>,
}

impl PolicySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org(mut self, org: Mapping) -> Self {
        self.org = org;
        self
    }

    pub fn with_repository(mut self, name: impl Into<String>, policy: Mapping) -> Self {
        self.repositories.insert(name.into(), policy);
        self
    }

    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }
}

/// An in-memory set is its own source.
impl PolicySource for PolicySet {
    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }

    fn load(&self) -> ConfiguratorResult<PolicySet> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_repositories_sorted() {
        let set = PolicySet::new()
            .with_repository("web", Mapping::new())
            .with_repository("api", Mapping::new());

        let names: Vec<_> = set.repositories.keys().cloned().collect();
        assert_eq!(names, vec!["api", "web"]);
        assert_eq!(set.repository_count(), 2);
        assert!(set.org.is_empty());
    }

    #[test]
    fn in_memory_source_returns_copy() {
        let set = PolicySet::new().with_repository("api", Mapping::new());
        assert_eq!(set.load().unwrap(), set);
    }
}
