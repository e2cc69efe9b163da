use std::path::PathBuf;

use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{TranslationEntry, TranslationReference};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub format: OutputFormat,
    /// Every extracted entry (listed in verbose mode).
    pub entries: Vec<TranslationEntry>,
    /// Every extracted reference (listed in verbose mode).
    pub references: Vec<TranslationReference>,
    pub source_files_checked: usize,
    pub locale_files_checked: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when the file already existed and was left untouched.
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Missing translations, then unused translations, then parse errors.
    pub issues: Vec<Issue>,
    /// If true, findings turn the exit status into `Failure`.
    pub exit_on_findings: bool,
}

impl CommandResult {
    pub fn finding_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_finding()).count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            CommandSummary::Init(_) => ExitStatus::Success,
            CommandSummary::Check(_) if self.exit_on_findings && self.finding_count() > 0 => {
                ExitStatus::Failure
            }
            CommandSummary::Check(_) => ExitStatus::Success,
        }
    }
}
