//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_renderer;
pub mod config_sink;
pub mod policy_source;

pub use config_renderer::ConfigRenderer;
pub use config_sink::ConfigSink;
pub use policy_source::PolicySource;
