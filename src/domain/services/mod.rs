//! Domain Services
//!
//! Stateless helpers over domain entities.

mod differ;
mod expiry_audit;

pub use differ::{Differ, TextChange};
pub use expiry_audit::expired_rules;
