//! Host entry points: `init` for bootstrap and `invoke` for named operations.
//!
//! Bootstrap is deliberately absent from the `invoke` routing table. Only the
//! host's initialization path may record an administrator; a named invocation
//! can never replace it.

use std::str::FromStr;

use ledger_identity::IdentityOracle;
use ledger_store::StateStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::LedgerEngine;
use crate::error::{LedgerError, LedgerResult};
use crate::response::Response;

/// Function name and string arguments of one host invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<F, A, I>(function: F, args: I) -> Self
    where
        F: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = A>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a flat parameter list into function name (first element) and
    /// arguments (the rest). An empty list yields an empty function name.
    pub fn from_parameters(parameters: Vec<String>) -> Self {
        let mut parameters = parameters.into_iter();
        let function = parameters.next().unwrap_or_default();
        Self {
            function,
            args: parameters.collect(),
        }
    }
}

/// Operations reachable through [`LedgerEngine::invoke`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    RegisterAccount,
    MintAndCredit,
    GetBalance,
}

impl FromStr for Operation {
    type Err = LedgerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "registerHousehold" | "register_account" => Ok(Operation::RegisterAccount),
            "mintEuroToken" | "mint_and_credit" => Ok(Operation::MintAndCredit),
            "getEuroTokenBalance" | "get_balance" => Ok(Operation::GetBalance),
            other => Err(LedgerError::UnknownFunction(other.to_string())),
        }
    }
}

impl<'a, S: StateStore + ?Sized, O: IdentityOracle + ?Sized> LedgerEngine<'a, S, O> {
    /// Host initialization: record the caller as administrator and return the
    /// stored identifier as the payload.
    pub fn init(&self) -> Response {
        self.bootstrap()
            .map(|admin| Some(admin.into_bytes()))
            .into()
    }

    /// Route a named invocation to its operation.
    pub fn invoke(&self, invocation: &Invocation) -> Response {
        info!(function = %invocation.function, "Invoke is running");
        let response: Response = self.execute(invocation).into();
        if !response.is_success() {
            warn!(
                function = %invocation.function,
                error = %response.message,
                "Invocation failed"
            );
        }
        response
    }

    /// [`invoke`](Self::invoke) without the response envelope.
    pub fn execute(&self, invocation: &Invocation) -> LedgerResult<Option<Vec<u8>>> {
        match invocation.function.parse::<Operation>()? {
            Operation::RegisterAccount => self.register_account().map(|()| None),
            Operation::MintAndCredit => self
                .mint_and_credit(invocation.args.as_slice())
                .map(|()| None),
            Operation::GetBalance => self.get_balance(invocation.args.as_slice()).map(Some),
        }
    }
}
