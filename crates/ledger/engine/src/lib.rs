//! # ledger-engine
//!
//! Access-controlled state-transition engine for a permissioned token ledger.
//!
//! A single trusted third party (TTP), recorded at bootstrap, may register
//! its account and mint tokens to itself; any caller may read any balance.
//! The engine consumes two host capabilities and nothing else:
//!
//! - an [`IdentityOracle`](ledger_identity::IdentityOracle) naming the caller
//! - a [`StateStore`](ledger_store::StateStore) of opaque byte keys and values
//!
//! ## State layout
//!
//! - `admin_key` (default `"ttp"`) → administrator identifier bytes
//! - `<principal>` → balance as decimal ASCII
//!
//! ## Operations
//!
//! | Operation | Gate | Payload |
//! |---|---|---|
//! | [`bootstrap`](LedgerEngine::bootstrap) | none | administrator identifier |
//! | [`register_account`](LedgerEngine::register_account) | administrator | none |
//! | [`mint_and_credit`](LedgerEngine::mint_and_credit) | administrator | none |
//! | [`get_balance`](LedgerEngine::get_balance) | none | balance bytes |
//!
//! Serialising same-key writes across concurrent invocations is the host's
//! job; the engine does a plain read-modify-write.

#![deny(unsafe_code)]

pub mod balance;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod response;

pub use balance::{parse_amount, Balance};
pub use config::LedgerConfig;
pub use dispatch::{Invocation, Operation};
pub use engine::LedgerEngine;
pub use error::{ErrorKind, LedgerError, LedgerResult};
pub use response::Response;

pub use ledger_identity::{FixedCaller, IdentityOracle, Principal};
pub use ledger_store::{InMemoryStateStore, JsonFileStateStore, StateStore};
