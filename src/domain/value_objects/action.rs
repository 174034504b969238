//! Action value object - the disposition applied when a rule matches

use serde::{Deserialize, Serialize};

/// Action Socket takes when an issue type or package rule matches.
///
/// No precedence between variants is implied; the label is interpreted by
/// the Socket enforcement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Fail the check, block the dependency
    Error,
    /// Allow but warn
    Warn,
    /// Silently allow
    Ignore,
    /// Defer to org/default settings
    Defer,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Error, Action::Warn, Action::Ignore, Action::Defer];

    /// External string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Error => "error",
            Action::Warn => "warn",
            Action::Ignore => "ignore",
            Action::Defer => "defer",
        }
    }

    /// Exact lookup of the external string; `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
