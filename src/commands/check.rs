use std::path::Path;

use anyhow::Result;
use socket_configurator::application::CheckUseCase;

use crate::ui::{json, text};

pub fn cmd_check(file: &Path, json: bool) -> Result<bool> {
    let report = CheckUseCase::new().execute(file)?;

    if json {
        json::emit(&json::CheckEvent::new(file, &report))?;
        return Ok(report.is_valid());
    }

    if !report.is_valid() {
        let header = format!("{} is invalid:", file.display());
        eprint!("{}", text::render_failure(&header, &report, false));
        return Ok(false);
    }

    println!("{} is valid", file.display());
    Ok(true)
}
