//! Local output directory sink
//!
//! Writes `<output_dir>/<repo>/<file_name>` atomically.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::ports::ConfigSink;
use crate::error::{ConfiguratorError, ConfiguratorResult};

pub const DEFAULT_OUTPUT_FILE: &str = "socket.yml";

/// Config sink rooted at an output directory
#[derive(Debug, Clone)]
pub struct FsConfigSink {
    output_dir: PathBuf,
    file_name: String,
}

impl FsConfigSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Repository names become directory names; reject anything that is not a
/// single normal path component.
fn check_repo_name(repo: &str) -> ConfiguratorResult<()> {
    let mut components = Path::new(repo).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if repo.is_empty() || !single_normal || repo.contains(['/', '\\']) {
        return Err(ConfiguratorError::InvalidRepositoryName {
            name: repo.to_string(),
        });
    }
    Ok(())
}

impl ConfigSink for FsConfigSink {
    fn target_path(&self, repo: &str) -> ConfiguratorResult<PathBuf> {
        check_repo_name(repo)?;
        Ok(self.output_dir.join(repo).join(&self.file_name))
    }

    fn read_existing(&self, repo: &str) -> ConfiguratorResult<Option<String>> {
        let path = self.target_path(repo)?;
        if !path.is_file() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| ConfiguratorError::Read { path, source })
    }

    fn write(&self, repo: &str, content: &str) -> ConfiguratorResult<PathBuf> {
        let path = self.target_path(repo)?;
        atomic_write(&path, content.as_bytes())?;
        debug!(path = %path.display(), bytes = content.len(), "wrote configuration");
        Ok(path)
    }
}

/// Write via a temp file in the target directory, then rename over the
/// target. Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> ConfiguratorResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
