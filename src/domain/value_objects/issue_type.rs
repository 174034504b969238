//! Issue type value object - categories of risk Socket reports on a dependency

use serde::{Deserialize, Serialize};

/// Socket issue types for dependency analysis.
///
/// Declaration order is the order used when rendering `issueRules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueType {
    // Supply chain risks
    #[serde(rename = "criticalCVE")]
    CriticalCve,
    #[serde(rename = "highCVE")]
    HighCve,
    #[serde(rename = "mediumCVE")]
    MediumCve,
    #[serde(rename = "lowCVE")]
    LowCve,
    #[serde(rename = "knownMalware")]
    KnownMalware,
    #[serde(rename = "protestware")]
    Protestware,
    #[serde(rename = "highEntropyStrings")]
    HighEntropyStrings,
    #[serde(rename = "potentialTyposquat")]
    PotentialTyposquat,
    #[serde(rename = "installScripts")]
    InstallScripts,

    // Quality issues
    #[serde(rename = "deprecated")]
    Deprecated,
    #[serde(rename = "unmaintained")]
    Unmaintained,
    #[serde(rename = "noLicense")]
    NoLicense,
    #[serde(rename = "copyleftLicense")]
    CopyleftLicense,
    #[serde(rename = "nonOssLicense")]
    NonOssLicense,
    #[serde(rename = "unstableOwnership")]
    UnstableOwnership,

    // Behavior risks
    #[serde(rename = "networkAccess")]
    NetworkAccess,
    #[serde(rename = "filesystemAccess")]
    FilesystemAccess,
    #[serde(rename = "shellAccess")]
    ShellAccess,
    #[serde(rename = "environmentAccess")]
    EnvironmentAccess,
    #[serde(rename = "nativeCode")]
    NativeCode,
    #[serde(rename = "obfuscatedCode")]
    ObfuscatedCode,
    #[serde(rename = "minifiedCode")]
    MinifiedCode,

    // Dependency issues
    #[serde(rename = "trivialPackage")]
    TrivialPackage,
    #[serde(rename = "floatingDependency")]
    FloatingDependency,
    #[serde(rename = "unpopularPackage")]
    UnpopularPackage,
    #[serde(rename = "newAuthor")]
    NewAuthor,
}

impl IssueType {
    pub const ALL: [IssueType; 26] = [
        IssueType::CriticalCve,
        IssueType::HighCve,
        IssueType::MediumCve,
        IssueType::LowCve,
        IssueType::KnownMalware,
        IssueType::Protestware,
        IssueType::HighEntropyStrings,
        IssueType::PotentialTyposquat,
        IssueType::InstallScripts,
        IssueType::Deprecated,
        IssueType::Unmaintained,
        IssueType::NoLicense,
        IssueType::CopyleftLicense,
        IssueType::NonOssLicense,
        IssueType::UnstableOwnership,
        IssueType::NetworkAccess,
        IssueType::FilesystemAccess,
        IssueType::ShellAccess,
        IssueType::EnvironmentAccess,
        IssueType::NativeCode,
        IssueType::ObfuscatedCode,
        IssueType::MinifiedCode,
        IssueType::TrivialPackage,
        IssueType::FloatingDependency,
        IssueType::UnpopularPackage,
        IssueType::NewAuthor,
    ];

    /// Issue types that should not be ignored
    pub const CRITICAL: [IssueType; 3] = [
        IssueType::KnownMalware,
        IssueType::CriticalCve,
        IssueType::Protestware,
    ];

    /// External identifier used in policy files
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::CriticalCve => "criticalCVE",
            IssueType::HighCve => "highCVE",
            IssueType::MediumCve => "mediumCVE",
            IssueType::LowCve => "lowCVE",
            IssueType::KnownMalware => "knownMalware",
            IssueType::Protestware => "protestware",
            IssueType::HighEntropyStrings => "highEntropyStrings",
            IssueType::PotentialTyposquat => "potentialTyposquat",
            IssueType::InstallScripts => "installScripts",
            IssueType::Deprecated => "deprecated",
            IssueType::Unmaintained => "unmaintained",
            IssueType::NoLicense => "noLicense",
            IssueType::CopyleftLicense => "copyleftLicense",
            IssueType::NonOssLicense => "nonOssLicense",
            IssueType::UnstableOwnership => "unstableOwnership",
            IssueType::NetworkAccess => "networkAccess",
            IssueType::FilesystemAccess => "filesystemAccess",
            IssueType::ShellAccess => "shellAccess",
            IssueType::EnvironmentAccess => "environmentAccess",
            IssueType::NativeCode => "nativeCode",
            IssueType::ObfuscatedCode => "obfuscatedCode",
            IssueType::MinifiedCode => "minifiedCode",
            IssueType::TrivialPackage => "trivialPackage",
            IssueType::FloatingDependency => "floatingDependency",
            IssueType::UnpopularPackage => "unpopularPackage",
            IssueType::NewAuthor => "newAuthor",
        }
    }

    /// Look up an identifier. Unknown identifiers (for example issue types
    /// Socket added after this list was written) yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn is_critical(&self) -> bool {
        Self::CRITICAL.contains(self)
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
