//! Subcommand execution against a file-backed ledger.

use clap::Subcommand;
use ledger_engine::{FixedCaller, Invocation, JsonFileStateStore, LedgerConfig, LedgerEngine};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Ledger subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record the caller as the ledger administrator (once per ledger)
    Bootstrap,

    /// Register the administrator's own account with a zero balance
    Register,

    /// Mint tokens to the administrator's account
    Mint {
        /// Amount to mint, as a decimal integer
        amount: String,
    },

    /// Print the balance of an account
    Balance {
        /// Account identifier
        account: String,
    },

    /// Invoke a ledger function by name with string arguments
    Invoke {
        /// Function name (e.g. mintEuroToken)
        function: String,

        /// Function arguments
        args: Vec<String>,
    },

    /// Print the recorded administrator
    Status,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Bootstrap => "bootstrap",
            Command::Register => "register",
            Command::Mint { .. } => "mint",
            Command::Balance { .. } => "balance",
            Command::Invoke { .. } => "invoke",
            Command::Status => "status",
        }
    }

    fn needs_caller(&self) -> bool {
        matches!(
            self,
            Command::Bootstrap | Command::Register | Command::Mint { .. } | Command::Invoke { .. }
        )
    }
}

/// Run one command and return what should be printed on stdout.
pub fn execute(
    command: &Command,
    store: &JsonFileStateStore,
    caller: Option<&str>,
    ledger: &LedgerConfig,
) -> CliResult<Option<String>> {
    let caller = match caller {
        Some(caller) => caller,
        None if command.needs_caller() => return Err(CliError::MissingCaller(command.name())),
        None => "",
    };
    let oracle = FixedCaller::new(caller);
    let engine = LedgerEngine::new(store, &oracle, ledger.clone());

    debug!(
        command = command.name(),
        caller,
        state_file = %store.path().display(),
        "Executing command"
    );

    match command {
        Command::Bootstrap => {
            // host policy: initialization happens at most once
            if let Some(existing) = engine.administrator()? {
                return Err(CliError::AlreadyBootstrapped(existing.to_string()));
            }
            let admin = engine.bootstrap()?;
            info!(administrator = %admin, "Bootstrapped ledger");
            Ok(Some(admin.to_string()))
        }
        Command::Register => {
            engine.register_account()?;
            Ok(None)
        }
        Command::Mint { amount } => {
            engine.mint_and_credit(&[amount.as_str()])?;
            Ok(None)
        }
        Command::Balance { account } => {
            let value = engine.get_balance(&[account.as_str()])?;
            Ok(Some(String::from_utf8_lossy(&value).into_owned()))
        }
        Command::Invoke { function, args } => {
            let response = engine.invoke(&Invocation::new(function.as_str(), args.iter().cloned()));
            if !response.is_success() {
                return Err(CliError::Rejected(response.message));
            }
            Ok(response
                .payload
                .map(|payload| String::from_utf8_lossy(&payload).into_owned()))
        }
        Command::Status => Ok(Some(match engine.administrator()? {
            Some(admin) => format!("administrator: {admin}"),
            None => "administrator: <not bootstrapped>".to_string(),
        })),
    }
}
