//! Command-line layer: argument parsing, command dispatch, reporting.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, CheckArgs, Command, OutputFormat};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init};

/// Run the parsed command, print its report, and return the exit status.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let result = match args.into_command() {
        Command::Check(check_args) => check(check_args)?,
        Command::Init => init()?,
    };

    report::print(&result, verbose)?;

    Ok(result.exit_status())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "i18n_keys=debug"
    } else {
        "i18n_keys=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
