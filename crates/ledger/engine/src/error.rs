use ledger_identity::IdentityError;
use ledger_store::StorageError;
use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors from ledger operations. Every variant is terminal for the
/// invocation that raised it and leaves the store untouched.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("this method can only be invoked by the TTP")]
    Unauthorized,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("error when fetching token balance: no balance recorded for {0}")]
    NotFound(String),

    #[error("store failure: {0}")]
    StoreFailure(#[from] StorageError),

    #[error("caller identity unavailable: {0}")]
    IdentityUnavailable(String),

    #[error("balance overflow: {balance} + {amount} exceeds the maximum balance")]
    Overflow { balance: u64, amount: u64 },

    #[error("received unknown function invocation: {0}")]
    UnknownFunction(String),
}

/// Coarse classification of a [`LedgerError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidArgument,
    NotFound,
    StoreFailure,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Unauthorized => ErrorKind::Unauthorized,
            LedgerError::InvalidArgument(_)
            | LedgerError::Overflow { .. }
            | LedgerError::UnknownFunction(_) => ErrorKind::InvalidArgument,
            LedgerError::IdentityUnavailable(_) => ErrorKind::Unauthorized,
            LedgerError::NotFound(_) => ErrorKind::NotFound,
            LedgerError::StoreFailure(_) => ErrorKind::StoreFailure,
        }
    }
}

impl From<IdentityError> for LedgerError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Unauthorized { .. } => LedgerError::Unauthorized,
            IdentityError::Unavailable(reason) => LedgerError::IdentityUnavailable(reason),
            IdentityError::Storage(e) => LedgerError::StoreFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_errors_map_onto_ledger_kinds() {
        let denied: LedgerError = IdentityError::Unauthorized {
            caller: "Household1".into(),
        }
        .into();
        assert_eq!(denied.kind(), ErrorKind::Unauthorized);

        let storage: LedgerError =
            IdentityError::Storage(StorageError::Backend("down".into())).into();
        assert_eq!(storage.kind(), ErrorKind::StoreFailure);
    }

    #[test]
    fn overflow_display_names_operands() {
        let err = LedgerError::Overflow {
            balance: u64::MAX,
            amount: 1,
        };
        let s = err.to_string();
        assert!(s.contains(&u64::MAX.to_string()));
        assert!(s.contains("+ 1"));
    }
}
