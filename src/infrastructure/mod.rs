//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - policy directory loader
//! - `fs/` - output directory writer
//! - `render` - YAML rendering

pub mod fs;
pub mod render;
pub mod repositories;

// Re-export for convenience
pub use fs::FsConfigSink;
pub use render::YamlRenderer;
pub use repositories::FsPolicyRepository;
