//! Property tests for `from_dict` / `to_dict`.

use proptest::prelude::*;

use socket_configurator::{OrgPolicy, SocketPolicy};

use crate::strategies::{socket_policy, yaml_mapping};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Serializing then parsing a policy yields the same policy.
    #[test]
    fn property_socket_policy_round_trip(policy in socket_policy()) {
        prop_assert_eq!(SocketPolicy::from_dict(&policy.to_dict()), policy);
    }

    /// PROPERTY: Rendered YAML text parses back to the same mapping.
    #[test]
    fn property_rendered_yaml_round_trip(policy in socket_policy()) {
        let mapping = policy.to_dict();
        let text = serde_yaml_ng::to_string(&mapping).unwrap();
        let parsed: serde_yaml_ng::Mapping = serde_yaml_ng::from_str(&text).unwrap();
        prop_assert_eq!(parsed, mapping);
    }

    /// PROPERTY: Parsing never panics and is stable after one normalisation.
    #[test]
    fn property_from_dict_is_total_and_stable(raw in yaml_mapping()) {
        let policy = SocketPolicy::from_dict(&raw);
        prop_assert_eq!(SocketPolicy::from_dict(&policy.to_dict()), policy);

        let org = OrgPolicy::from_dict(&raw);
        prop_assert_eq!(
            OrgPolicy::from_dict(&org.to_dict()).to_socket_policy(),
            org.to_socket_policy()
        );
    }
}
