use std::path::PathBuf;

use anyhow::Result;
use socket_configurator::application::ValidateOptions;
use socket_configurator::presentation::{create_validate_use_case, PolicyPaths};
use socket_configurator::Config;

use crate::ui::{json, text};

pub fn cmd_validate(
    config: &Config,
    policy_dir: Option<PathBuf>,
    strict_warnings: bool,
    json: bool,
) -> Result<bool> {
    let paths = PolicyPaths::resolve(&config.paths, policy_dir, None);
    let options = ValidateOptions {
        strict_warnings: strict_warnings || config.validation.strict_warnings,
    };

    let result = create_validate_use_case(&paths).execute(options)?;

    if json {
        json::emit(&json::ValidateEvent::new(&result))?;
        return Ok(result.is_success());
    }

    if !result.is_success() {
        let header = if result.report.is_valid() {
            "Policy validation failed (warnings treated as errors):"
        } else {
            "Policy validation failed:"
        };
        eprint!(
            "{}",
            text::render_failure(header, &result.report, result.strict_warnings)
        );
        return Ok(false);
    }

    println!(
        "Policy validation passed ({} repositories, {} warnings)",
        result.repository_count,
        result.report.warning_count()
    );
    Ok(true)
}
