//! Differ Domain Service
//!
//! Line diff between the configuration on disk and the one that would be
//! generated.

use similar::{ChangeTag, TextDiff};

/// Outcome of comparing two versions of a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextChange {
    /// Unified diff with three lines of context; empty when unchanged
    pub unified: String,
    pub additions: usize,
    pub deletions: usize,
}

impl TextChange {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Compare `old` and `new`; `label` names both sides of the header.
    pub fn diff(&self, label: &str, old: &str, new: &str) -> TextChange {
        let text_diff = TextDiff::from_lines(old, new);

        let (additions, deletions) =
            text_diff
                .iter_all_changes()
                .fold((0, 0), |(add, del), change| match change.tag() {
                    ChangeTag::Insert => (add + 1, del),
                    ChangeTag::Delete => (add, del + 1),
                    ChangeTag::Equal => (add, del),
                });

        let unified = if additions + deletions == 0 {
            String::new()
        } else {
            text_diff
                .unified_diff()
                .header(&format!("a/{label}"), &format!("b/{label}"))
                .to_string()
        };

        TextChange {
            unified,
            additions,
            deletions,
        }
    }
}
