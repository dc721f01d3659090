use serde::{Deserialize, Serialize};

/// Opaque identifier of an authenticated caller.
///
/// Principals are compared byte-for-byte. They double as the state key of the
/// principal's balance record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(Vec<u8>);

impl Principal {
    pub fn new(id: impl Into<Vec<u8>>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.as_bytes().to_vec())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id.into_bytes())
    }
}

impl From<Vec<u8>> for Principal {
    fn from(id: Vec<u8>) -> Self {
        Self(id)
    }
}

impl From<&[u8]> for Principal {
    fn from(id: &[u8]) -> Self {
        Self(id.to_vec())
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lossy_utf8() {
        assert_eq!(Principal::from("TTPOrg").to_string(), "TTPOrg");
        assert_eq!(Principal::from(vec![0x48, 0xff]).to_string(), "H\u{fffd}");
    }

    #[test]
    fn equality_is_bytewise() {
        assert_eq!(Principal::from("TTPOrg"), Principal::from(b"TTPOrg".as_slice()));
        assert_ne!(Principal::from("TTPOrg"), Principal::from("ttporg"));
        assert_ne!(Principal::from("TTPOrg"), Principal::from("TTPOrg "));
    }

    #[test]
    fn serde_round_trip() {
        let principal = Principal::from("Household1");
        let json = serde_json::to_string(&principal).unwrap();
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, principal);
    }
}
