use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Status reported for a successful invocation.
pub const OK: u16 = 200;
/// Status reported for a failed invocation.
pub const ERROR: u16 = 500;

/// Outcome of one invocation as handed back to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Response {
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: OK,
            payload,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            payload: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OK
    }
}

impl From<Result<Option<Vec<u8>>, LedgerError>> for Response {
    fn from(result: Result<Option<Vec<u8>>, LedgerError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_their_message() {
        let response: Response = Err(LedgerError::Unauthorized).into();
        assert!(!response.is_success());
        assert_eq!(response.status, ERROR);
        assert_eq!(response.message, "this method can only be invoked by the TTP");
        assert!(response.payload.is_none());
    }

    #[test]
    fn success_carries_payload() {
        let response: Response = Ok(Some(b"75".to_vec())).into();
        assert!(response.is_success());
        assert_eq!(response.payload.as_deref(), Some(b"75".as_slice()));
        assert!(response.message.is_empty());
    }
}
