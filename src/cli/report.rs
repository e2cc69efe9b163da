//! Report formatting and printing.
//!
//! Kept separate from the engine so the crate can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{TranslationEntry, TranslationReference};
use crate::issues::{Issue, ParseErrorIssue, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout (and parse warnings to stderr).
///
/// Text output ignores write failures; the JSON report propagates them.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Check(summary) => match summary.format {
            OutputFormat::Text => {
                report_check_to(summary, &result.issues, verbose, &mut io::stdout().lock());
                print_parse_warnings_to(&result.issues, &mut io::stderr().lock());
            }
            OutputFormat::Json => {
                report_json_to(summary, &result.issues, &mut io::stdout().lock())?;
            }
        },
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

/// Render the text report.
///
/// ```text
/// Found 3 translation entries
/// Found 2 translation references
/// Missing translations:
/// common.missingKey src/app.tsx:4
/// Unused translations:
/// en page.footer
/// ```
pub fn report_check_to<W: Write>(
    summary: &CheckSummary,
    issues: &[Issue],
    verbose: bool,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "Found {} translation {}",
        summary.entries.len(),
        plural(summary.entries.len(), "entry", "entries")
    );
    if verbose {
        for entry in &summary.entries {
            let _ = writeln!(writer, "{}", entry.to_string().dimmed());
        }
    }

    let _ = writeln!(
        writer,
        "Found {} translation {}",
        summary.references.len(),
        plural(summary.references.len(), "reference", "references")
    );
    if verbose {
        for reference in &summary.references {
            let _ = writeln!(writer, "{}", reference.to_string().dimmed());
        }
    }

    let missing: Vec<&Issue> = issues
        .iter()
        .filter(|i| matches!(i, Issue::MissingTranslation(_)))
        .collect();
    let unused: Vec<&Issue> = issues
        .iter()
        .filter(|i| matches!(i, Issue::UnusedTranslation(_)))
        .collect();

    print_section("Missing translations:", &missing, writer);
    print_section("Unused translations:", &unused, writer);

    let line = if missing.is_empty() && unused.is_empty() {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {}, {} locale {} - no issues found",
                summary.source_files_checked,
                plural(summary.source_files_checked, "file", "files"),
                summary.locale_files_checked,
                plural(summary.locale_files_checked, "file", "files"),
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} missing, {} unused translations",
                missing.len(),
                unused.len(),
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", line);
}

fn print_section<W: Write>(title: &str, issues: &[&Issue], writer: &mut W) {
    let _ = writeln!(writer, "{}", title.bold().underline().green());
    for issue in issues {
        let _ = writeln!(writer, "{}", issue.summary_line().red());
    }
}

/// Print one warning line per parse error.
pub fn print_parse_warnings_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues.iter().filter(|i| matches!(i, Issue::ParseError(_))) {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            issue.summary_line()
        );
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    source_files: usize,
    locale_files: usize,
    entries: usize,
    references: usize,
    missing: Vec<&'a TranslationReference>,
    unused: Vec<&'a TranslationEntry>,
    parse_errors: Vec<&'a ParseErrorIssue>,
}

/// Render the machine-readable report.
pub fn report_json_to<W: Write>(
    summary: &CheckSummary,
    issues: &[Issue],
    writer: &mut W,
) -> Result<()> {
    let mut report = JsonReport {
        source_files: summary.source_files_checked,
        locale_files: summary.locale_files_checked,
        entries: summary.entries.len(),
        references: summary.references.len(),
        missing: Vec::new(),
        unused: Vec::new(),
        parse_errors: Vec::new(),
    };
    for issue in issues {
        match issue {
            Issue::MissingTranslation(i) => report.missing.push(&i.reference),
            Issue::UnusedTranslation(i) => report.unused.push(&i.entry),
            Issue::ParseError(i) => report.parse_errors.push(i),
        }
    }

    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to write JSON report")?;
    writeln!(writer).context("Failed to write JSON report")?;
    Ok(())
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
