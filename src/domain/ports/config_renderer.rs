//! Config renderer port - mapping to text.

use serde_yaml_ng::Mapping;

use crate::error::ConfiguratorResult;

/// Turns a rendered policy mapping into file content.
///
/// Implementations must keep the key order of the mapping.
pub trait ConfigRenderer {
    fn render(&self, config: &Mapping) -> ConfiguratorResult<String>;
}
