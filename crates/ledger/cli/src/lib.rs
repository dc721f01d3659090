//! ttp-ledger library
//!
//! Host-side pieces of the `ttp-ledger` binary:
//! - configuration loading
//! - tracing initialization
//! - subcommand execution against a file-backed state store

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{execute, Command};
pub use config::{CliConfig, LoggingConfig};
pub use error::{CliError, CliResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr. `RUST_LOG` wins over the configured level.
pub fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    let result = if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(err) = result {
        eprintln!("tracing already initialized: {err}");
    }
}
