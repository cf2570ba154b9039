//! Operator command line for the MenuFlow manifest.
//!
//! Wires configuration, structured logging and the file-backed manifest
//! store together and exposes the menu operations as subcommands.

pub mod cli;
pub mod commands;
pub mod config;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::Config;

/// Builds the log filter from the configured directive, falling back to
/// `info` when it does not parse.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes tracing. Logs go to stderr so stdout carries only JSON output.
pub fn init_tracing(config: &Config) {
    let filter = env_filter(config);

    let (text, json) = if config.log_json {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}
