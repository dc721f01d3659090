use ledger_store::StorageError;
use thiserror::Error;

/// Errors from caller resolution and administrator checks.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("caller identity unavailable: {0}")]
    Unavailable(String),

    #[error("this method can only be invoked by the TTP (caller: {caller})")]
    Unauthorized { caller: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
