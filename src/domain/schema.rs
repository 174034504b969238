//! External key vocabulary shared by the model and the validator.
//!
//! These names are consumed by the Socket enforcement system and must not
//! change.

/// `socket.yml` format version written when none is given
pub const DEFAULT_VERSION: i64 = 2;

/// Versions accepted in a rendered `socket.yml`
pub const SUPPORTED_VERSIONS: [i64; 2] = [1, 2];

/// Organization name used when `org-defaults.yml` omits one
pub const DEFAULT_ORG_NAME: &str = "Organization Default";

/// Version constraint matching every release of a package
pub const ANY_VERSION: &str = "*";

/// Keys of a repository policy / rendered `socket.yml`
pub mod socket {
    pub const VERSION: &str = "version";
    pub const ENABLED: &str = "enabled";
    pub const PROJECT_NAME: &str = "projectName";
    pub const ISSUE_RULES: &str = "issueRules";
    pub const DEFERRED_PACKAGE_RULES: &str = "deferredPackageRules";
    /// Legacy alias for `deferredPackageRules`
    pub const PACKAGE_RULES: &str = "packageRules";
    pub const IGNORE: &str = "ignore";
}

/// Keys of `org-defaults.yml`
pub mod org {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DEFAULT_ISSUE_RULES: &str = "defaultIssueRules";
    pub const BANNED_PACKAGES: &str = "bannedPackages";
    pub const ALLOWED_PACKAGES: &str = "allowedPackages";
    pub const DEFAULT_IGNORE_PATHS: &str = "defaultIgnorePaths";
}

/// Keys of a single package rule
pub mod rule {
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const ACTION: &str = "action";
    pub const REASON: &str = "reason";
    pub const EXPIRES: &str = "expires";
}
