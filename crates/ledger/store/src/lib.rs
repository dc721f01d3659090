//! Host state contract for the TTP token ledger.
//!
//! The ledger engine never owns persistence. It reads and writes opaque
//! byte values under opaque byte keys through [`StateStore`], which the host
//! provides. Two adapters ship with this crate:
//! - [`InMemoryStateStore`]: deterministic and test-friendly
//! - [`JsonFileStateStore`]: a single JSON document on disk, used by the CLI
//!
//! Atomicity and isolation across concurrent invocations are the host's
//! responsibility; every call here is a single-key point read or write.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![warn(rust_2018_idioms)]

mod error;
pub mod file;
pub mod memory;
mod traits;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
