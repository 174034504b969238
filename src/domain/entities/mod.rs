//! Domain Entities
//!
//! - `SocketPolicy` - effective configuration for one repository
//! - `OrgPolicy` - organization defaults
//! - `PackageRule` / `IssuePolicy` - individual rules
//! - `PolicySet` - raw policy files as loaded

mod issue_policy;
mod org_policy;
mod package_rule;
mod policy_set;
mod socket_policy;

pub use issue_policy::IssuePolicy;
pub use org_policy::OrgPolicy;
pub use package_rule::PackageRule;
pub use policy_set::PolicySet;
pub use socket_policy::SocketPolicy;
