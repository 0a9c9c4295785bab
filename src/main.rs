//! nasctl - runs one NAS action against a modem device and prints its report.
//!
//! Exits with status 0 when the action succeeds or when no action was
//! requested, and with status 1 after printing a single diagnostic line
//! otherwise.

use std::{error::Error, process};

use clap::{CommandFactory, Parser};
use nasctl::{
    cli::{Cli, CliService, formatting::format_error},
    config::Config,
    tracing_config,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e.to_string(), !cli.no_color),
    };

    tracing_config::init_cli_mode(config.general.log_level, cli.verbose)?;

    let service = CliService::new(&cli, &config);

    match service.selector().options_enabled() {
        Ok(true) => {}
        Ok(false) => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(e) => fail(&e.to_string(), service.color()),
    }

    let cancellation = CancellationToken::new();
    watch_interrupt(cancellation.clone());

    match service.run(cancellation).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => fail(&e.to_string(), service.color()),
    }
}

/// Cancels the in-flight operation on Ctrl-C.
fn watch_interrupt(cancellation: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                debug!("Interrupted, cancelling operation");
                cancellation.cancel();
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {e}"),
        }
    });
}

fn fail(message: &str, color: bool) -> ! {
    eprintln!("{}", format_error(message, color));
    process::exit(1);
}
