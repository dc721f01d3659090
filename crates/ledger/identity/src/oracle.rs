use crate::{IdentityError, Principal};

/// Host capability returning the authenticated principal of the current
/// invocation.
///
/// Implementations must only return identities the host has already
/// verified; the ledger performs no cryptographic checks of its own.
pub trait IdentityOracle {
    fn caller_identity(&self) -> Result<Principal, IdentityError>;
}

impl<T: IdentityOracle + ?Sized> IdentityOracle for &T {
    fn caller_identity(&self) -> Result<Principal, IdentityError> {
        (**self).caller_identity()
    }
}

/// Oracle that always reports the same caller.
///
/// Hosts that resolve the caller before dispatching (the CLI, tests) wrap the
/// resolved principal in this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCaller(Principal);

impl FixedCaller {
    pub fn new(principal: impl Into<Principal>) -> Self {
        Self(principal.into())
    }

    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl IdentityOracle for FixedCaller {
    fn caller_identity(&self) -> Result<Principal, IdentityError> {
        if self.0.is_empty() {
            return Err(IdentityError::Unavailable(
                "host supplied an empty caller identity".to_string(),
            ));
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_caller_reports_its_principal() {
        let oracle = FixedCaller::new("TTPOrg");
        assert_eq!(oracle.caller_identity().unwrap(), Principal::from("TTPOrg"));
    }

    #[test]
    fn empty_caller_is_unavailable() {
        let oracle = FixedCaller::new("");
        assert!(matches!(
            oracle.caller_identity(),
            Err(IdentityError::Unavailable(_))
        ));
    }
}
