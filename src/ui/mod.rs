//! Terminal and CI output for the binary.

pub mod json;
pub mod logging;
pub mod text;
