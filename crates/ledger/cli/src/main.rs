//! ttp-ledger - command-line host for the TTP token ledger
//!
//! Resolves the caller from flags or configuration, opens the local state
//! file and runs one ledger command against it.

use clap::Parser;
use ledger_cli::{execute, init_tracing, CliConfig, Command};
use ledger_engine::JsonFileStateStore;
use std::path::PathBuf;

/// TTP ledger CLI
#[derive(Parser)]
#[command(name = "ttp-ledger")]
#[command(about = "Permissioned token ledger administered by a trusted third party", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TTP_LEDGER_CONFIG")]
    config: Option<String>,

    /// State file path
    #[arg(short, long, env = "TTP_LEDGER_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Caller identity, as already authenticated by the host
    #[arg(long, env = "TTP_LEDGER_CALLER")]
    caller: Option<String>,

    /// Log level
    #[arg(long, env = "TTP_LEDGER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "TTP_LEDGER_LOG_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(state_file) = cli.state_file {
        config.state_file = state_file;
    }
    if let Some(caller) = cli.caller {
        config.caller = Some(caller);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    init_tracing(&config.logging);

    let store = JsonFileStateStore::open(&config.state_file)?;
    if let Some(output) = execute(
        &cli.command,
        &store,
        config.caller.as_deref(),
        &config.ledger,
    )? {
        println!("{output}");
    }

    Ok(())
}
