use std::path::PathBuf;

use anyhow::Result;
use socket_configurator::presentation::{create_generate_use_case, PolicyPaths};
use socket_configurator::{Config, GenerateOptions};
use tracing::info;

use crate::ui::{json, text};

pub struct GenerateArgs {
    pub policy_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub repo: Option<String>,
    pub dry_run: bool,
}

pub fn cmd_generate(config: &Config, args: GenerateArgs, json: bool) -> Result<bool> {
    let paths = PolicyPaths::resolve(&config.paths, args.policy_dir, args.output_dir);

    let mut options = GenerateOptions::new().with_dry_run(args.dry_run);
    if let Some(repo) = args.repo {
        options = options.with_repo(repo);
    }

    let result = create_generate_use_case(&paths).execute(&options)?;

    if json {
        json::emit(&json::GenerateEvent::new(&result, args.dry_run))?;
        return Ok(result.is_success());
    }

    if !result.is_success() {
        eprint!(
            "{}",
            text::render_failure("Policy validation failed:", &result.report, false)
        );
        return Ok(false);
    }

    if result.configs.is_empty() {
        info!("No configurations to generate");
        return Ok(true);
    }

    if args.dry_run {
        for config in &result.configs {
            print!(
                "{}",
                text::render_dry_run(&config.repo, &paths.output_file, &config.content)
            );
        }
    }

    Ok(true)
}
