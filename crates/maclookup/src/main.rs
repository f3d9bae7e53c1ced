mod cli;
mod config;
mod error;
mod lookup;

use std::io::{self, Write};
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::{CliError, exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "maclookup", &mut io::stdout());
        return;
    }

    let settings = config::load_settings(&cli);
    let log_file = settings
        .as_ref()
        .map_or_else(|_| config::fallback_log_file(&cli), |s| s.log_file.clone());
    let guard = init_tracing(cli.verbose, &log_file);

    let result = match settings {
        Ok(settings) => run(&cli, &settings).await,
        Err(err) => Err(err),
    };

    let code = match result {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            if !err.logged_at_source() {
                tracing::error!("{err}");
            }
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    // Flush the log file before exiting; `exit` skips destructors.
    drop(guard);
    std::process::exit(code);
}

async fn run(cli: &Cli, settings: &maclookup_config::Settings) -> Result<(), CliError> {
    if cli.show_config {
        let rendered = maclookup_config::render_settings(settings)?;
        write!(io::stdout(), "{rendered}")?;
        return Ok(());
    }
    lookup::run(cli, settings).await
}

/// Stderr at a verbosity-driven level, plus the append-mode log file at `info`.
fn init_tracing(verbosity: u8, log_file: &Path) -> Option<WorkerGuard> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)));

    let (file_layer, guard) = match open_log_file(log_file) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn open_log_file(path: &Path) -> Option<RollingFileAppender> {
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("warning: cannot open log file {}: {e}", path.display());
            None
        }
    }
}
