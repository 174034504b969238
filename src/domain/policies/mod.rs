//! Domain Policies
//!
//! Validation rules over raw policy mappings. Pure functions, no I/O.

mod report;
mod validator;

pub use report::{Finding, Severity, ValidationReport};
pub use validator::PolicyValidator;
