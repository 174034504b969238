//! Expired package rules
//!
//! Rules past their `expires` date are still rendered; the caller decides
//! how loudly to report them.

use chrono::NaiveDate;

use crate::domain::entities::{PackageRule, SocketPolicy};

/// Rules of `policy` whose expiration date is before `today`, in order.
pub fn expired_rules(policy: &SocketPolicy, today: NaiveDate) -> Vec<&PackageRule> {
    policy
        .package_rules
        .iter()
        .filter(|rule| rule.is_expired_on(today))
        .collect()
}
