//! Shared fixtures for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const ORG_DEFAULTS: &str = r#"name: Acme Security
defaultIssueRules:
  knownMalware: error
  criticalCVE: error
  deprecated: warn
bannedPackages:
  - name: event-stream
    reason: Compromised in 2018
allowedPackages:
  - name: lodash
    reason: Audited internally
defaultIgnorePaths:
  - "**/test/**"
"#;

pub const API_REPO: &str = r#"projectName: api-gateway
issueRules:
  deprecated: ignore
deferredPackageRules:
  - name: express
    reason: Core framework
ignore:
  - "docs/**"
"#;

pub const WEB_REPO: &str = "projectName: web\n";

/// Isolated working directory holding `policies/`.
///
/// Commands run with the temp directory as cwd so no project or user
/// configuration leaks in.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(env.policy_dir().join("repositories")).unwrap();
        env
    }

    /// Org defaults plus `api` and `web` repositories.
    pub fn with_fixtures() -> Self {
        let env = Self::new();
        env.write_org(ORG_DEFAULTS);
        env.write_repo("api", API_REPO);
        env.write_repo("web", WEB_REPO);
        env
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn policy_dir(&self) -> PathBuf {
        self.root().join("policies")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("output")
    }

    pub fn write_org(&self, content: &str) {
        fs::write(self.policy_dir().join("org-defaults.yml"), content).unwrap();
    }

    pub fn write_repo(&self, name: &str, content: &str) {
        fs::write(
            self.policy_dir().join("repositories").join(format!("{name}.yml")),
            content,
        )
        .unwrap();
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_output(&self, repo: &str) -> String {
        fs::read_to_string(self.output_dir().join(repo).join("socket.yml")).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_socket-configurator"))
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("SOCKET_CONFIGURATOR_POLICY_DIR")
            .env_remove("SOCKET_CONFIGURATOR_OUTPUT_DIR")
            .env_remove("SOCKET_CONFIGURATOR_VERBOSITY")
            .env("XDG_CONFIG_HOME", self.root().join("xdg"))
            .env("HOME", self.root())
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn parse_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
