//! File System Policy Repository
//!
//! Loads `org-defaults.yml` and `repositories/*.yml` from a policy
//! directory.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml_ng::value::{Tag, TaggedValue};
use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::domain::entities::PolicySet;
use crate::domain::ports::PolicySource;
use crate::error::{ConfiguratorError, ConfiguratorResult};

pub const ORG_DEFAULTS_FILE: &str = "org-defaults.yml";
pub const REPOSITORIES_DIR: &str = "repositories";
const POLICY_EXTENSION: &str = "yml";

/// Policy source backed by a directory tree.
///
/// Repository names are file stems; only `.yml` files are read.
#[derive(Debug, Clone)]
pub struct FsPolicyRepository {
    root: PathBuf,
}

impl FsPolicyRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_org(&self) -> ConfiguratorResult<Mapping> {
        let path = self.root.join(ORG_DEFAULTS_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no organization defaults");
            return Ok(Mapping::new());
        }
        read_yaml_mapping(&path)
    }

    fn load_repositories(&self) -> ConfiguratorResult<BTreeMap<String, Mapping>> {
        let dir = self.root.join(REPOSITORIES_DIR);
        let mut repositories = BTreeMap::new();
        if !dir.is_dir() {
            return Ok(repositories);
        }

        let entries = fs::read_dir(&dir).map_err(|source| ConfiguratorError::Read {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(POLICY_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!(path = %path.display(), "skipping policy file with non UTF-8 name");
                continue;
            };
            debug!(repo = name, path = %path.display(), "loading repository policy");
            repositories.insert(name.to_string(), read_yaml_mapping(&path)?);
        }

        Ok(repositories)
    }
}

impl PolicySource for FsPolicyRepository {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn load(&self) -> ConfiguratorResult<PolicySet> {
        if !self.root.is_dir() {
            return Err(ConfiguratorError::PolicyDirNotFound {
                path: self.root.clone(),
            });
        }

        Ok(PolicySet {
            org: self.load_org()?,
            repositories: self.load_repositories()?,
        })
    }
}

/// Read a YAML file whose top level must be a mapping.
///
/// Empty (or `null`) documents load as an empty mapping. A key repeated
/// within one mapping keeps its last value.
pub fn read_yaml_mapping(path: &Path) -> ConfiguratorResult<Mapping> {
    let text = fs::read_to_string(path).map_err(|source| ConfiguratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_yaml_mapping(&text, path)
}

fn parse_yaml_mapping(text: &str, path: &Path) -> ConfiguratorResult<Mapping> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let LastWins(value) =
        serde_yaml_ng::from_str(text).map_err(|e| ConfiguratorError::InvalidYaml {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        _ => Err(ConfiguratorError::NotAMapping {
            file: path.to_path_buf(),
        }),
    }
}

/// `Value` whose mappings are built with `insert`, so a repeated key
/// overwrites the earlier entry instead of failing the whole document.
struct LastWins(Value);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LastWinsVisitor).map(LastWins)
    }
}

struct LastWinsVisitor;

impl<'de> Visitor<'de> for LastWinsVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        LastWins::deserialize(deserializer).map(|LastWins(value)| value)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(LastWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((LastWins(key), LastWins(value))) = map.next_entry()? {
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, variant) = data.variant::<String>()?;
        let LastWins(value) = variant.newtype_variant()?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}
