//! One side of a pairing or session channel.

use serde::{Deserialize, Serialize};

/// A channel participant, identified by its public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Hex-encoded public key identifying this side of the channel.
    pub public_key: String,
}

impl Participant {
    /// A participant for the given public key.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_is_camel_case() {
        let json = serde_json::to_string(&Participant::new("abc")).unwrap();
        assert_eq!(json, r#"{"publicKey":"abc"}"#);
    }
}
