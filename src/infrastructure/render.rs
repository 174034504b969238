//! YAML renderer for `socket.yml`.

use serde_yaml_ng::Mapping;

use crate::domain::ports::ConfigRenderer;
use crate::error::ConfiguratorResult;

/// Block-style YAML, keys in mapping order.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRenderer;

impl YamlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRenderer for YamlRenderer {
    fn render(&self, config: &Mapping) -> ConfiguratorResult<String> {
        Ok(serde_yaml_ng::to_string(config)?)
    }
}
