use ledger_identity::DEFAULT_ADMIN_KEY;
use serde::{Deserialize, Serialize};

/// Ledger configuration injected when an engine is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// State key holding the administrator record.
    #[serde(default = "default_admin_key")]
    pub admin_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            admin_key: default_admin_key(),
        }
    }
}

fn default_admin_key() -> String {
    DEFAULT_ADMIN_KEY.to_string()
}
