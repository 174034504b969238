//! Tests for the config module

use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.paths.policy_dir, PathBuf::from("policies"));
    assert_eq!(config.paths.output_dir, PathBuf::from("output"));
    assert_eq!(config.paths.output_file, "socket.yml");
    assert!(!config.validation.strict_warnings);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[paths]
policy_dir = "security/policies"
output_dir = "dist"

[validation]
strict_warnings = true

[output]
verbosity = "verbose"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.paths.policy_dir, PathBuf::from("security/policies"));
    assert_eq!(config.paths.output_dir, PathBuf::from("dist"));
    assert_eq!(config.paths.output_file, "socket.yml");
    assert!(config.validation.strict_warnings);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(Verbosity::Quiet.level_directive(), "error");
    assert_eq!(Verbosity::Normal.level_directive(), "info");
    assert_eq!(Verbosity::Verbose.level_directive(), "debug");
    assert_eq!(Verbosity::Debug.level_directive(), "trace");
    assert_eq!(Verbosity::parse(" DEBUG "), Some(Verbosity::Debug));
    assert_eq!(Verbosity::parse("loud"), None);
}

#[test]
fn test_unknown_keys_warn_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("socket-configurator.toml");
    fs::write(&path, "[paths]\npolicy_dri = \"p\"\n\n[output]\ncolour = true\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.paths.policy_dir, PathBuf::from("policies"));
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].key, "policy_dri");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("policy_dir"));
    assert_eq!(warnings[1].key, "colour");
    assert_eq!(warnings[1].suggestion, None);
    assert!(warnings[0]
        .to_string()
        .ends_with(":2 (did you mean 'policy_dir'?)"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[output]\nverbosity = \"loud\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_project_config_wins_over_user_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "[paths]\npolicy_dir = \"project\"\n",
    )
    .unwrap();
    fs::create_dir_all(user.path().join(USER_CONFIG_DIR)).unwrap();
    fs::write(
        user.path().join(USER_CONFIG_DIR).join("config.toml"),
        "[paths]\npolicy_dir = \"user\"\n",
    )
    .unwrap();

    let loaded = load_layered(None, project.path(), Some(user.path())).unwrap();

    assert_eq!(loaded.config.paths.policy_dir, PathBuf::from("project"));
    assert_eq!(
        loaded.source.as_deref(),
        Some(project.path().join(PROJECT_CONFIG_FILE).as_path())
    );
}

#[test]
fn test_user_config_used_without_project_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::create_dir_all(user.path().join(USER_CONFIG_DIR)).unwrap();
    fs::write(
        user.path().join(USER_CONFIG_DIR).join("config.toml"),
        "[validation]\nstrict_warnings = true\n",
    )
    .unwrap();

    let loaded = load_layered(None, project.path(), Some(user.path())).unwrap();

    assert!(loaded.config.validation.strict_warnings);
}

#[test]
fn test_defaults_without_any_file() {
    let project = tempdir().unwrap();
    let loaded = load_layered(None, project.path(), None).unwrap();
    assert!(loaded.source.is_none());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_explicit_config_must_exist() {
    let project = tempdir().unwrap();
    let missing = project.path().join("missing.toml");
    assert!(load_layered(Some(&missing), project.path(), None).is_err());
}

#[test]
fn test_explicit_config_skips_hierarchy() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        "[paths]\npolicy_dir = \"project\"\n",
    )
    .unwrap();
    let explicit = project.path().join("ci.toml");
    fs::write(&explicit, "[paths]\npolicy_dir = \"ci\"\n").unwrap();

    let loaded = load_layered(Some(Path::new(&explicit)), project.path(), None).unwrap();

    assert_eq!(loaded.config.paths.policy_dir, PathBuf::from("ci"));
}

#[test]
fn test_env_overrides() {
    let (config, warnings) = apply_env_overrides(
        Config::default(),
        env(&[
            (ENV_POLICY_DIR, "/srv/policies"),
            (ENV_OUTPUT_DIR, "/srv/out"),
            (ENV_VERBOSITY, "quiet"),
        ]),
    );

    assert!(warnings.is_empty());
    assert_eq!(config.paths.policy_dir, PathBuf::from("/srv/policies"));
    assert_eq!(config.paths.output_dir, PathBuf::from("/srv/out"));
    assert_eq!(config.output.verbosity, Verbosity::Quiet);
}

#[test]
fn test_invalid_env_verbosity_keeps_current_value() {
    let mut base = Config::default();
    base.output.verbosity = Verbosity::Verbose;

    let (config, warnings) = apply_env_overrides(base, env(&[(ENV_VERBOSITY, "verbos")]));

    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("verbose"));
}

#[test]
fn test_empty_env_paths_ignored() {
    let (config, _) = apply_env_overrides(Config::default(), env(&[(ENV_POLICY_DIR, "")]));
    assert_eq!(config.paths.policy_dir, PathBuf::from("policies"));
}
