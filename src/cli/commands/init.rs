use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    let created = !path.exists();

    if created {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path, created }),
        issues: Vec::new(),
        exit_on_findings: true,
    })
}
