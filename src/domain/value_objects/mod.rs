//! Domain Value Objects
//!
//! Closed vocabularies shared with the Socket enforcement system.

mod action;
mod expiry;
mod issue_type;

pub use action::Action;
pub use expiry::parse_expiry_date;
pub use issue_type::IssueType;
