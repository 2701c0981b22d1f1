//! movierec-validate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use movierec_validate::cli::Cli;
use movierec_validate::config::ValidatorConfig;
use movierec_validate::ui::ReportTheme;
use movierec_validate::validator::run_report;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("movierec_validate=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("movierec_validate=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("movierec-validate starting with args: {:?}", cli);

    let config = ValidatorConfig::from(&cli);
    let theme = ReportTheme::for_stdout(!config.color);

    match run_report(&config, std::io::stdout().lock(), theme) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}
