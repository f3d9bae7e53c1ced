//! The lookup run: input → credentials → batch → CSV.
//!
//! Input is resolved before any credential is touched, so a run with
//! nothing to do never needs an API key.

use std::io::{self, IsTerminal, Write};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use maclookup_config::Settings;
use maclookup_core::{InputSource, Resolver, read_input, run_batch, write_report};

use crate::cli::Cli;
use crate::config;
use crate::error::CliError;

/// `--mac` wins over `--file` when both are given.
pub fn input_source(cli: &Cli) -> InputSource {
    match cli.mac {
        Some(ref mac) => InputSource::Single(mac.clone()),
        None => InputSource::File(cli.file.clone()),
    }
}

pub async fn run(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    // 1. Input
    let source = input_source(cli);
    let list = read_input(&source);
    if list.is_empty() {
        if let InputSource::Single(ref raw) = source {
            writeln!(io::stdout(), "Invalid MAC address format: {raw}")?;
        }
        info!("No valid MAC addresses to process.");
        return Err(CliError::NoInput {
            source_desc: describe(&source),
        });
    }
    info!(count = list.len(), skipped = list.rejected.len(), "MAC addresses loaded");

    // 2. Client
    let lookup_config = config::resolve_lookup_config(settings)?;
    let mut resolver = Resolver::connect(&lookup_config)?;

    // 3. Lookups
    let progress = progress_bar(list.len(), cli.quiet);
    let report = run_batch(&mut resolver, &list.addresses, |_| progress.inc(1)).await;
    progress.finish_and_clear();

    // 4. Write
    if report.rows.is_empty() {
        warn!("No device information found for the provided MAC addresses.");
        let line = format!(
            "0 of {} devices resolved; no report written",
            report.attempted()
        );
        print_summary(cli.quiet, &line)?;
        return Ok(());
    }

    write_report(&settings.output, &report.rows).map_err(|source| CliError::WriteFailed {
        path: settings.output.clone(),
        source,
    })?;

    print_summary(
        cli.quiet,
        &format!(
            "{} of {} devices written to {}",
            report.rows.len(),
            report.attempted(),
            settings.output.display()
        ),
    )?;
    Ok(())
}

fn describe(source: &InputSource) -> String {
    match source {
        InputSource::Single(_) => "--mac".into(),
        InputSource::File(path) => path.display().to_string(),
    }
}

fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(u64::try_from(len).unwrap_or(u64::MAX));
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("looking up");
    bar
}

fn print_summary(quiet: bool, line: &str) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(io::stdout().lock(), "{line}")
}
