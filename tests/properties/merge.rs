//! Property tests for `SocketPolicy::merge`.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::strategies::socket_policy;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The override's issue rules always win; base-only rules survive.
    #[test]
    fn property_issue_rules_override_wins(base in socket_policy(), over in socket_policy()) {
        let merged = base.merge(&over);

        for (issue, action) in &over.issue_rules {
            prop_assert_eq!(merged.issue_rules.get(issue), Some(action));
        }
        for (issue, action) in &base.issue_rules {
            if !over.issue_rules.contains_key(issue) {
                prop_assert_eq!(merged.issue_rules.get(issue), Some(action));
            }
        }
        prop_assert_eq!(
            merged.issue_rules.len(),
            base.issue_rules.keys().chain(over.issue_rules.keys()).collect::<HashSet<_>>().len()
        );
    }

    /// PROPERTY: Override rules come first, then base rules not shadowed by key.
    #[test]
    fn property_package_rules_order(base in socket_policy(), over in socket_policy()) {
        let merged = base.merge(&over);
        let over_keys: HashSet<_> = over.package_rules.iter().map(|r| r.key()).collect();

        let expected: Vec<_> = over
            .package_rules
            .iter()
            .chain(base.package_rules.iter().filter(|r| !over_keys.contains(&r.key())))
            .cloned()
            .collect();

        prop_assert_eq!(merged.package_rules, expected);
    }

    /// PROPERTY: Ignore paths are the union of both sides.
    #[test]
    fn property_ignore_paths_union(base in socket_policy(), over in socket_policy()) {
        let merged = base.merge(&over);
        let union: std::collections::BTreeSet<_> =
            base.ignore_paths.union(&over.ignore_paths).cloned().collect();
        prop_assert_eq!(merged.ignore_paths, union);
    }

    /// PROPERTY: Scalar fields follow the documented precedence.
    #[test]
    fn property_scalar_fields(base in socket_policy(), over in socket_policy()) {
        let merged = base.merge(&over);

        prop_assert_eq!(merged.version, base.version.max(over.version));
        prop_assert_eq!(merged.enabled, over.enabled);
        let expected_name = if over.project_name.is_empty() {
            &base.project_name
        } else {
            &over.project_name
        };
        prop_assert_eq!(&merged.project_name, expected_name);
    }

    /// PROPERTY: Merging over a fresh default keeps every rule and the project name.
    #[test]
    fn property_merge_with_default(policy in socket_policy()) {
        let merged = policy.merge(&socket_configurator::SocketPolicy::default());

        prop_assert_eq!(&merged.issue_rules, &policy.issue_rules);
        prop_assert_eq!(&merged.package_rules, &policy.package_rules);
        prop_assert_eq!(&merged.ignore_paths, &policy.ignore_paths);
        prop_assert_eq!(&merged.project_name, &policy.project_name);
        prop_assert!(merged.enabled);
    }
}
