use std::env;

use anyhow::{Context, Result};

use super::super::args::CheckArgs;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    config::{Config, load_config},
    core::{DuplicatePolicy, analyze, load_project},
    issues::Issue,
};

pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let config = apply_overrides(loaded.config, &args);
    config.validate()?;

    let root = match &args.source_root {
        Some(root) => cwd.join(root),
        None => cwd.join(&config.source_root),
    };
    let project = load_project(&root, &config.includes, &config.ignores)?;
    if project.skipped_count > 0 {
        tracing::warn!(skipped = project.skipped_count, "some paths could not be accessed");
    }
    let analysis = analyze(&project, &config);

    let mut issues = analysis.issues();
    issues.extend(project.parse_errors.iter().cloned().map(Issue::ParseError));

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            format: args.format,
            entries: analysis.entries,
            references: analysis.references,
            source_files_checked: analysis.source_module_count,
            locale_files_checked: analysis.locale_module_count,
        }),
        issues,
        exit_on_findings: config.fail_on_findings,
    })
}

/// CLI arguments take priority over the config file.
fn apply_overrides(mut config: Config, args: &CheckArgs) -> Config {
    if let Some(marker) = &args.locale_dir_marker {
        config.locale_dir_marker = marker.clone();
    }
    if let Some(namespace) = &args.default_namespace {
        config.default_namespace = namespace.clone();
    }
    if let Some(name) = &args.translation_fn_name {
        config.translation_fn_name = name.clone();
    }
    if args.collapse_duplicates {
        config.duplicates = DuplicatePolicy::Collapse;
    }
    if args.no_fail {
        config.fail_on_findings = false;
    }
    config
}
