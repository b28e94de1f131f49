use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use linkcheck_core::{AuditOptions, AuditSummary, ReportFormat, execute_audit, render_report};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{Level, debug, info};

use crate::commands::DEFAULT_DIRECTORY;

/// Install the stderr log subscriber. Stdout is reserved for the report.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Expand a leading `~` in the directory argument
pub fn expand_directory(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn parse_format(raw: &str) -> Result<ReportFormat> {
    ReportFormat::from_str(raw).ok_or_else(|| anyhow!("Unknown report format '{}'", raw))
}

/// Broken links only affect the exit status when explicitly asked for.
pub fn exit_code(summary: &AuditSummary, fail_on_broken: bool) -> i32 {
    if fail_on_broken && summary.has_broken_links() {
        1
    } else {
        0
    }
}

/// Audit the requested directory, print the report to stdout and return the
/// process exit code.
pub fn handle_check(args: &ArgMatches) -> Result<i32> {
    let raw_directory = args
        .get_one::<String>("DIR")
        .map(String::as_str)
        .unwrap_or(DEFAULT_DIRECTORY);
    let format = parse_format(
        args.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("text"),
    )?;
    let fail_on_broken = args.get_flag("fail-on-broken");
    let quiet = args.get_flag("quiet");

    let directory = expand_directory(raw_directory);
    info!("Checking {} ({:?} report)", directory.display(), format);

    let options = AuditOptions::new(directory).with_progress(!quiet);
    let summary = execute_audit(options, None)?;
    debug!(
        "{} documents, {} internal links",
        summary.documents_scanned, summary.links_checked
    );

    let report = render_report(&summary, format)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(exit_code(&summary, fail_on_broken))
}
