//! Property tests for the validator on arbitrary input.

use proptest::prelude::*;

use socket_configurator::{PolicySet, PolicyValidator, Severity};

use crate::strategies::{socket_policy, yaml_mapping};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation is total and never mutates its input.
    #[test]
    fn property_validator_never_panics(org in yaml_mapping(), repo in yaml_mapping()) {
        let set = PolicySet::new().with_org(org.clone()).with_repository("fuzz", repo.clone());
        let before = set.clone();

        let validator = PolicyValidator::new();
        let report = validator.validate_all(&set);
        let _ = validator.validate_socket_yml(&repo);

        prop_assert_eq!(set, before);
        prop_assert_eq!(report.is_valid(), report.error_count() == 0);
        prop_assert_eq!(
            report.error_count() + report.warning_count(),
            report.findings.len()
        );
    }

    /// PROPERTY: Validation is deterministic.
    #[test]
    fn property_validator_deterministic(repo in yaml_mapping()) {
        let validator = PolicyValidator::new();
        prop_assert_eq!(
            validator.validate_repository("r", &repo),
            validator.validate_repository("r", &repo)
        );
    }

    /// PROPERTY: Anything `to_dict` produces passes `socket.yml` validation.
    #[test]
    fn property_serialized_policy_is_valid(policy in socket_policy()) {
        let report = PolicyValidator::new().validate_socket_yml(&policy.to_dict());
        prop_assert!(
            report.findings.iter().all(|f| f.severity == Severity::Warning),
            "{:?}",
            report.errors()
        );
    }
}
