//! CLI error types

use ledger_engine::LedgerError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("a caller identity is required for `{0}` (use --caller or TTP_LEDGER_CALLER)")]
    MissingCaller(&'static str),

    #[error("ledger already bootstrapped by {0}")]
    AlreadyBootstrapped(String),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("storage error: {0}")]
    Storage(#[from] ledger_store::StorageError),

    #[error("invocation failed: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
