//! Identity gate for the TTP token ledger.
//!
//! Callers arrive pre-authenticated: the host resolves who is invoking the
//! ledger and hands the engine an opaque [`Principal`] through an
//! [`IdentityOracle`]. The [`IdentityGate`] decides whether that principal is
//! the administrator (the trusted third party) recorded at bootstrap.

#![deny(unsafe_code)]

pub mod error;
pub mod gate;
pub mod oracle;
pub mod principal;

pub use error::IdentityError;
pub use gate::{IdentityGate, DEFAULT_ADMIN_KEY};
pub use oracle::{FixedCaller, IdentityOracle};
pub use principal::Principal;
