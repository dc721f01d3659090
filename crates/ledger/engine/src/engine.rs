use ledger_identity::{IdentityGate, IdentityOracle, Principal};
use ledger_store::StateStore;
use tracing::{debug, info};

use crate::balance::{parse_amount, Balance};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};

/// Access-controlled state transitions over account balances.
///
/// An engine borrows the host store and identity oracle for one invocation.
/// Each operation performs at most one write, issued only after every
/// precondition has passed, so a failed operation never leaves partial state.
pub struct LedgerEngine<'a, S: StateStore + ?Sized, O: IdentityOracle + ?Sized> {
    store: &'a S,
    oracle: &'a O,
    config: LedgerConfig,
}

impl<'a, S: StateStore + ?Sized, O: IdentityOracle + ?Sized> LedgerEngine<'a, S, O> {
    pub fn new(store: &'a S, oracle: &'a O, config: LedgerConfig) -> Self {
        Self {
            store,
            oracle,
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn gate(&self) -> IdentityGate<'_, S> {
        IdentityGate::new(self.store, self.config.admin_key.as_bytes())
    }

    fn caller(&self) -> LedgerResult<Principal> {
        Ok(self.oracle.caller_identity()?)
    }

    /// Balance records share the key space with the administrator record;
    /// an account named like the admin key would overwrite it.
    fn balance_key<'k>(&self, account: &'k [u8]) -> LedgerResult<&'k [u8]> {
        if account == self.config.admin_key.as_bytes() {
            return Err(LedgerError::InvalidArgument(format!(
                "{:?} is a reserved key, not an account",
                self.config.admin_key
            )));
        }
        Ok(account)
    }

    /// Record the invoking principal as the administrator.
    pub fn bootstrap(&self) -> LedgerResult<Principal> {
        let caller = self.caller()?;
        let admin = self.gate().bootstrap(&caller)?;
        info!(administrator = %admin, "Ledger bootstrapped");
        Ok(admin)
    }

    /// The administrator recorded at bootstrap, if any.
    pub fn administrator(&self) -> LedgerResult<Option<Principal>> {
        Ok(self.gate().administrator()?)
    }

    /// Whether the current caller is the administrator.
    pub fn caller_is_administrator(&self) -> LedgerResult<bool> {
        let caller = self.caller()?;
        Ok(self.gate().authorize(&caller)?)
    }

    /// Register the calling administrator's own account with a zero balance.
    ///
    /// Any existing balance under that key is overwritten.
    pub fn register_account(&self) -> LedgerResult<()> {
        let caller = self.caller()?;
        self.gate().require_administrator(&caller)?;

        let key = self.balance_key(caller.as_bytes())?;
        self.store.put_state(key, &Balance::ZERO.encode())?;

        info!(account = %caller, "Registered account");
        Ok(())
    }

    /// Mint `args[0]` tokens and credit them to the calling administrator.
    ///
    /// A missing balance record counts as zero.
    pub fn mint_and_credit<A: AsRef<str>>(&self, args: &[A]) -> LedgerResult<()> {
        let caller = self.caller()?;
        self.gate().require_administrator(&caller)?;

        let [amount_arg] = args else {
            return Err(LedgerError::InvalidArgument(format!(
                "expecting a single argument, the number of tokens to mint (got {})",
                args.len()
            )));
        };
        let amount = parse_amount(amount_arg.as_ref())?;

        let key = self.balance_key(caller.as_bytes())?;
        let old_balance = self.balance_of(&caller)?;
        let new_balance = old_balance.checked_credit(amount)?;
        self.store.put_state(key, &new_balance.encode())?;

        info!(
            account = %caller,
            amount,
            balance = new_balance.value(),
            "Minting tokens"
        );
        Ok(())
    }

    /// Raw balance record of the account named by `args[0]`. Open to every
    /// caller.
    pub fn get_balance<A: AsRef<str>>(&self, args: &[A]) -> LedgerResult<Vec<u8>> {
        let [account] = args else {
            return Err(LedgerError::InvalidArgument(format!(
                "expecting a single argument, the identifier of the account being queried (got {})",
                args.len()
            )));
        };
        let account = account.as_ref();
        let key = self.balance_key(account.as_bytes())?;

        let value = self
            .store
            .get_state(key)?
            .ok_or_else(|| LedgerError::NotFound(account.to_string()))?;

        debug!(account, "Balance queried");
        Ok(value)
    }

    /// Decoded balance of `account`; zero when no record exists.
    pub fn balance_of(&self, account: &Principal) -> LedgerResult<Balance> {
        let key = self.balance_key(account.as_bytes())?;
        let record = self.store.get_state(key)?;
        Balance::decode(record.as_deref())
    }
}
