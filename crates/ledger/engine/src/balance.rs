//! Balance representation and its encoding at the store boundary.
//!
//! Balances are `u64` in memory and decimal ASCII in the store. An absent or
//! empty record decodes to zero. Credits that would exceed `u64::MAX` are
//! rejected, never saturated or wrapped.

use ledger_store::StorageError;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Token count held by one principal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Balance(u64);

impl Balance {
    pub const ZERO: Balance = Balance(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Decode a stored record. `None` and empty bytes are zero.
    pub fn decode(record: Option<&[u8]>) -> LedgerResult<Self> {
        let bytes = match record {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Ok(Self::ZERO),
        };

        std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| {
                LedgerError::StoreFailure(StorageError::Serialization(format!(
                    "corrupt balance record: {:?}",
                    String::from_utf8_lossy(bytes)
                )))
            })
    }

    pub fn encode(&self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }

    pub fn checked_credit(self, amount: u64) -> LedgerResult<Self> {
        self.0
            .checked_add(amount)
            .map(Self)
            .ok_or(LedgerError::Overflow {
                balance: self.0,
                amount,
            })
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a mint amount argument.
///
/// Accepts an optionally signed decimal integer. Negative amounts and values
/// above `u64::MAX` are invalid arguments.
pub fn parse_amount(arg: &str) -> LedgerResult<u64> {
    let parsed: i128 = arg.parse().map_err(|_| {
        LedgerError::InvalidArgument(format!("amount {arg:?} is not a decimal integer"))
    })?;

    if parsed < 0 {
        return Err(LedgerError::InvalidArgument(format!(
            "amount must not be negative, got {parsed}"
        )));
    }

    u64::try_from(parsed).map_err(|_| {
        LedgerError::InvalidArgument(format!("amount {parsed} exceeds the maximum balance"))
    })
}
