use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Initialize tracing for a command-line invocation
///
/// Diagnostics go to stderr so stdout carries only the report. Uses
/// `RUST_LOG` if set, otherwise the configured level, raised to `debug`
/// when `verbose` is set. `NASCTL_LOG_FORMAT=json` switches to JSON lines.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init_cli_mode(level: LogLevel, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LogLevel::Debug.max_verbosity(level)
    } else {
        level
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let format = env::var("NASCTL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
