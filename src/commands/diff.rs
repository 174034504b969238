use std::path::PathBuf;

use anyhow::Result;
use socket_configurator::presentation::{create_diff_use_case, PolicyPaths};
use socket_configurator::Config;

use crate::ui::{json, text};

pub fn cmd_diff(
    config: &Config,
    policy_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    repo: Option<String>,
    json: bool,
) -> Result<bool> {
    let paths = PolicyPaths::resolve(&config.paths, policy_dir, output_dir);
    let result = create_diff_use_case(&paths).execute(repo.as_deref())?;

    if json {
        json::emit(&json::DiffEvent::new(&result))?;
        return Ok(result.is_success());
    }

    if !result.is_success() {
        eprint!(
            "{}",
            text::render_failure("Policy validation failed:", &result.report, false)
        );
        return Ok(false);
    }

    print!("{}", text::render_diff(&result));
    Ok(true)
}
