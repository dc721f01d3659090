use ledger_store::StateStore;
use tracing::{debug, warn};

use crate::{IdentityError, Principal};

/// State key the administrator record is stored under unless configured
/// otherwise.
pub const DEFAULT_ADMIN_KEY: &str = "ttp";

/// Authorizes callers against the administrator record.
///
/// The gate holds no state of its own; the administrator lives in the host
/// store under `admin_key` and is read on every check.
pub struct IdentityGate<'a, S: StateStore + ?Sized> {
    store: &'a S,
    admin_key: &'a [u8],
}

impl<'a, S: StateStore + ?Sized> IdentityGate<'a, S> {
    pub fn new(store: &'a S, admin_key: &'a [u8]) -> Self {
        Self { store, admin_key }
    }

    /// Record `caller` as the administrator and return the stored identifier.
    ///
    /// Initialization is assumed to happen once per ledger; whether a second
    /// call may reach this point is decided by the host.
    pub fn bootstrap(&self, caller: &Principal) -> Result<Principal, IdentityError> {
        self.store.put_state(self.admin_key, caller.as_bytes())?;
        debug!(administrator = %caller, "Administrator recorded");
        Ok(caller.clone())
    }

    /// The current administrator, if one has been recorded.
    pub fn administrator(&self) -> Result<Option<Principal>, IdentityError> {
        let record = self.store.get_state(self.admin_key)?;
        Ok(record
            .filter(|bytes| !bytes.is_empty())
            .map(Principal::from))
    }

    /// True iff the administrator record exists and equals `caller` byte for
    /// byte. An unset record authorizes nobody.
    pub fn authorize(&self, caller: &Principal) -> Result<bool, IdentityError> {
        let record = self.store.get_state(self.admin_key)?;
        Ok(same_identity(record.as_deref(), caller.as_bytes()))
    }

    /// [`authorize`](Self::authorize), turning a denial into
    /// [`IdentityError::Unauthorized`].
    pub fn require_administrator(&self, caller: &Principal) -> Result<(), IdentityError> {
        if self.authorize(caller)? {
            return Ok(());
        }
        warn!(caller = %caller, "Rejected non-administrator caller");
        Err(IdentityError::Unauthorized {
            caller: caller.to_string(),
        })
    }
}

/// An absent or empty record matches no caller.
fn same_identity(record: Option<&[u8]>, caller: &[u8]) -> bool {
    match record {
        Some(record) if !record.is_empty() => record == caller,
        _ => false,
    }
}
