//! Command handlers. Each returns `Ok(false)` when the command ran but
//! the outcome should fail the process.

pub mod check;
pub mod diff;
pub mod generate;
pub mod validate;

pub use check::cmd_check;
pub use diff::cmd_diff;
pub use generate::cmd_generate;
pub use validate::cmd_validate;
