//! Config sink port - where rendered `socket.yml` files go.

use std::path::PathBuf;

use crate::error::ConfiguratorResult;

/// Destination for one rendered configuration per repository.
pub trait ConfigSink {
    /// Path the configuration for `repo` would be written to
    fn target_path(&self, repo: &str) -> ConfiguratorResult<PathBuf>;

    /// Currently written configuration, `None` when nothing exists yet
    fn read_existing(&self, repo: &str) -> ConfiguratorResult<Option<String>>;

    /// Write `content`, returning the path written
    fn write(&self, repo: &str, content: &str) -> ConfiguratorResult<PathBuf>;
}
