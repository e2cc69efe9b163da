//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check` (default when no command is given): report missing and unused translations
//! - `init`: write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Options for the implicit `check` command.
    #[command(flatten)]
    pub check: CheckArgs,
}

impl Arguments {
    /// The command to run; a bare invocation runs `check`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Check(self.check))
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(args)) => args.verbose,
            Some(Command::Init) => false,
            None => self.check.verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Path substring identifying locale modules (overrides config file)
    #[arg(long)]
    pub locale_dir_marker: Option<String>,

    /// Namespace for keys without a separator (overrides config file)
    #[arg(long)]
    pub default_namespace: Option<String>,

    /// Name of the translation function (overrides config file)
    #[arg(long = "translation-fn")]
    pub translation_fn_name: Option<String>,

    /// Report each key once instead of once per call-site or definition
    #[arg(long)]
    pub collapse_duplicates: bool,

    /// Exit with status 0 even when missing or unused translations are found
    #[arg(long)]
    pub no_fail: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output (lists every entry and reference)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys that are missing from locale modules or never used
    Check(CheckArgs),
    /// Initialize a new .i18nkeysrc.json configuration file
    Init,
}
