//! File System Implementations
//!
//! Output side of the configurator: writing rendered files.

mod local;

pub use local::{atomic_write, FsConfigSink, DEFAULT_OUTPUT_FILE};
