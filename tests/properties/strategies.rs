//! Shared generators.

use proptest::prelude::*;
use proptest::sample::select;
use serde_yaml_ng::{Mapping, Value};
use socket_configurator::{Action, IssueType, PackageRule, SocketPolicy};

pub fn action() -> impl Strategy<Value = Action> {
    select(vec![Action::Error, Action::Warn, Action::Ignore, Action::Defer])
}

pub fn issue_type() -> impl Strategy<Value = IssueType> {
    select(IssueType::ALL.to_vec())
}

fn short_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,6}").unwrap()
}

pub fn package_rule() -> impl Strategy<Value = PackageRule> {
    (
        select(vec!["lodash", "express", "react", "left-pad", "colors"]),
        select(vec!["*", "1.x", "2.0.0"]),
        action(),
        proptest::option::of("[A-Za-z ]{1,12}"),
        proptest::option::of(select(vec!["2020-01-01", "2030-12-31"])),
    )
        .prop_map(|(name, version, action, reason, expires)| {
            let mut rule = PackageRule::new(name)
                .with_version(version)
                .with_action(action);
            if let Some(reason) = reason {
                rule = rule.with_reason(reason);
            }
            if let Some(expires) = expires {
                rule = rule.with_expires(expires);
            }
            rule
        })
}

pub fn socket_policy() -> impl Strategy<Value = SocketPolicy> {
    (
        1i64..=2,
        any::<bool>(),
        proptest::collection::btree_map(issue_type(), action(), 0..6),
        proptest::collection::vec(package_rule(), 0..6),
        proptest::collection::btree_set("[a-z*/]{1,10}", 0..4),
        proptest::option::of(short_name()),
    )
        .prop_map(
            |(version, enabled, issue_rules, package_rules, ignore_paths, project)| SocketPolicy {
                version,
                enabled,
                issue_rules,
                package_rules,
                ignore_paths,
                project_name: project.unwrap_or_default(),
            },
        )
}

/// Arbitrary YAML values a few levels deep.
pub fn yaml_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 :*-]{0,12}".prop_map(Value::String),
        select(vec!["error", "warn", "ignore", "defer", "knownMalware", "name", "malware"])
            .prop_map(|s| Value::String(s.to_string())),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            proptest::collection::vec((key(), inner), 0..4)
                .prop_map(|pairs| Value::Mapping(pairs.into_iter().collect())),
        ]
    })
}

/// Keys biased towards the ones policies actually use.
fn key() -> impl Strategy<Value = Value> {
    prop_oneof![
        select(vec![
            "version",
            "enabled",
            "projectName",
            "issueRules",
            "deferredPackageRules",
            "packageRules",
            "ignore",
            "defaultIssueRules",
            "bannedPackages",
            "allowedPackages",
            "defaultIgnorePaths",
            "name",
            "action",
            "reason",
            "expires",
            "knownMalware",
        ])
        .prop_map(|s| Value::String(s.to_string())),
        any::<i64>().prop_map(Value::from),
    ]
}

pub fn yaml_mapping() -> impl Strategy<Value = Mapping> {
    proptest::collection::vec((key(), yaml_value()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}
