//! Socket configurator
//!
//! Turns a raw `PolicySet` into one effective `socket.yml` per repository:
//! organization defaults first, repository overrides merged on top.

use std::collections::BTreeMap;

use serde_yaml_ng::Mapping;
use tracing::debug;

use crate::domain::entities::{OrgPolicy, PolicySet, SocketPolicy};
use crate::domain::ports::ConfigRenderer;
use crate::error::ConfiguratorResult;

#[derive(Debug, Clone, Default)]
pub struct SocketConfigurator {
    org: OrgPolicy,
    repositories: BTreeMap<String, SocketPolicy>,
}

impl SocketConfigurator {
    pub fn new(org: OrgPolicy, repositories: BTreeMap<String, SocketPolicy>) -> Self {
        Self { org, repositories }
    }

    pub fn from_policy_set(policies: &PolicySet) -> Self {
        let repositories = policies
            .repositories
            .iter()
            .map(|(name, raw)| (name.clone(), SocketPolicy::from_dict(raw)))
            .collect();
        Self::new(OrgPolicy::from_dict(&policies.org), repositories)
    }

    pub fn org_policy(&self) -> &OrgPolicy {
        &self.org
    }

    pub fn repo_policies(&self) -> &BTreeMap<String, SocketPolicy> {
        &self.repositories
    }

    /// Organization defaults merged with the stored override for `repo`.
    ///
    /// A repository without a stored policy gets the organization defaults
    /// unchanged.
    pub fn effective_policy(&self, repo: &str) -> SocketPolicy {
        let base = self.org.to_socket_policy();
        match self.repositories.get(repo) {
            Some(overrides) => base.merge(overrides),
            None => {
                debug!(repo, "no repository policy, using organization defaults");
                base
            }
        }
    }

    /// Effective policies for `repo` only, or for every stored repository.
    pub fn effective_policies(&self, repo: Option<&str>) -> BTreeMap<String, SocketPolicy> {
        match repo {
            Some(name) => BTreeMap::from([(name.to_string(), self.effective_policy(name))]),
            None => self
                .repositories
                .keys()
                .map(|name| (name.clone(), self.effective_policy(name)))
                .collect(),
        }
    }

    /// Rendered `socket.yml` mappings keyed by repository name.
    pub fn generate(&self, repo: Option<&str>) -> BTreeMap<String, Mapping> {
        self.effective_policies(repo)
            .into_iter()
            .map(|(name, policy)| (name, policy.to_dict()))
            .collect()
    }

    /// `generate` followed by text rendering.
    pub fn render_all(
        &self,
        renderer: &dyn ConfigRenderer,
        repo: Option<&str>,
    ) -> ConfiguratorResult<BTreeMap<String, String>> {
        self.generate(repo)
            .into_iter()
            .map(|(name, config)| Ok((name, renderer.render(&config)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::YamlRenderer;
    use serde_yaml_ng::Value;

    fn policy_set() -> PolicySet {
        let org: Mapping = serde_yaml_ng::from_str(
            r#"
name: Test Org
defaultIssueRules:
  knownMalware: error
  criticalCVE: error
  deprecated: warn
bannedPackages:
  - name: bad-pkg
    reason: Known malicious
defaultIgnorePaths: ["**/test/**"]
"#,
        )
        .unwrap();
        let repo: Mapping = serde_yaml_ng::from_str(
            r#"
version: 2
enabled: true
projectName: api-gateway
issueRules:
  deprecated: error
deferredPackageRules:
  - name: express
    action: ignore
    reason: Core framework
"#,
        )
        .unwrap();
        PolicySet::new()
            .with_org(org)
            .with_repository("api-gateway", repo)
    }

    fn generated(repo: Option<&str>) -> BTreeMap<String, Mapping> {
        SocketConfigurator::from_policy_set(&policy_set()).generate(repo)
    }

    #[test]
    fn generate_for_repo_with_policy() {
        let configs = generated(Some("api-gateway"));
        let config = &configs["api-gateway"];

        assert_eq!(config["projectName"].as_str(), Some("api-gateway"));
        assert_eq!(config["enabled"].as_bool(), Some(true));
    }

    #[test]
    fn merges_org_and_repo_issue_rules() {
        let config = &generated(Some("api-gateway"))["api-gateway"];

        assert_eq!(config["issueRules"]["knownMalware"].as_str(), Some("error"));
        assert_eq!(config["issueRules"]["deprecated"].as_str(), Some("error"));
    }

    #[test]
    fn repo_without_policy_gets_org_defaults() {
        let configs = generated(Some("unknown-repo"));
        let config = &configs["unknown-repo"];

        assert_eq!(config["issueRules"]["knownMalware"].as_str(), Some("error"));
        assert_eq!(config["issueRules"]["deprecated"].as_str(), Some("warn"));
        assert!(!config.contains_key("projectName"));
    }

    #[test]
    fn generate_all_covers_stored_repositories() {
        let set = policy_set().with_repository("web", Mapping::new());
        let configs = SocketConfigurator::from_policy_set(&set).generate(None);

        let names: Vec<_> = configs.keys().cloned().collect();
        assert_eq!(names, vec!["api-gateway", "web"]);
    }

    #[test]
    fn generate_all_without_repositories_is_empty() {
        let set = PolicySet::new().with_org(policy_set().org);
        assert!(SocketConfigurator::from_policy_set(&set)
            .generate(None)
            .is_empty());
    }

    #[test]
    fn banned_packages_included() {
        let config = &generated(Some("api-gateway"))["api-gateway"];

        let names: Vec<_> = config["deferredPackageRules"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|rule| rule["name"].as_str())
            .collect();
        assert_eq!(names, vec!["express", "bad-pkg"]);
    }

    #[test]
    fn org_ignore_paths_merged() {
        let config = &generated(Some("api-gateway"))["api-gateway"];
        let ignore = config["ignore"].as_sequence().unwrap();
        assert!(ignore.contains(&Value::String("**/test/**".to_string())));
    }

    #[test]
    fn render_all_produces_parseable_yaml() {
        let configurator = SocketConfigurator::from_policy_set(&policy_set());
        let rendered = configurator
            .render_all(&YamlRenderer::new(), Some("api-gateway"))
            .unwrap();

        let parsed: Mapping = serde_yaml_ng::from_str(&rendered["api-gateway"]).unwrap();
        assert_eq!(parsed, configurator.generate(Some("api-gateway"))["api-gateway"]);
    }
}
