//! # Auth Error Taxonomy
//!
//! The fixed table of protocol-level authentication failures exchanged
//! with a remote peer. Both ends hold the same static code table; the
//! integer code is the wire-stable identity and the message is advisory
//! text, never matched programmatically.
//!
//! | Kind                        | Code  | Message                       |
//! |-----------------------------|-------|-------------------------------|
//! | UserRejected                | 14001 | Auth request rejected by user |
//! | MalformedResponseParams     | 12001 | Response params malformed     |
//! | MalformedRequestParams      | 12002 | Request params malformed      |
//! | MessageCompromised          | 12003 | Original message compromised  |
//! | SignatureVerificationFailed | 12004 | Message verification failed   |
//!
//! Unknown codes decode to `None` rather than an error, so a receiver
//! keeps working when a newer sender introduces codes it has never seen.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Protocol-level authentication failure, wire-stable by code.
///
/// Serializes as a `{code, message}` object. Deserialization matches on
/// the code alone and rejects codes outside the table; use
/// [`AuthError::from_code`] when unknown codes must be tolerated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// The user declined the authentication request.
    #[error("Auth request rejected by user")]
    UserRejected,

    /// The responder's params did not parse.
    #[error("Response params malformed")]
    MalformedResponseParams,

    /// The requester's params did not parse.
    #[error("Request params malformed")]
    MalformedRequestParams,

    /// The signed payload does not match the original request.
    #[error("Original message compromised")]
    MessageCompromised,

    /// The detached signature failed verification.
    #[error("Message verification failed")]
    SignatureVerificationFailed,
}

impl AuthError {
    /// All kinds in the table, in code-table order.
    pub fn all() -> &'static [AuthError] {
        &[
            Self::UserRejected,
            Self::MalformedResponseParams,
            Self::MalformedRequestParams,
            Self::MessageCompromised,
            Self::SignatureVerificationFailed,
        ]
    }

    /// The wire-stable integer code for this kind.
    pub fn code(&self) -> i32 {
        match self {
            Self::UserRejected => 14001,
            Self::MalformedResponseParams => 12001,
            Self::MalformedRequestParams => 12002,
            Self::MessageCompromised => 12003,
            Self::SignatureVerificationFailed => 12004,
        }
    }

    /// The advisory human-readable message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserRejected => "Auth request rejected by user",
            Self::MalformedResponseParams => "Response params malformed",
            Self::MalformedRequestParams => "Request params malformed",
            Self::MessageCompromised => "Original message compromised",
            Self::SignatureVerificationFailed => "Message verification failed",
        }
    }

    /// Reverse lookup by wire code. Unrecognized codes yield `None`.
    pub fn from_code(code: i32) -> Option<AuthError> {
        Self::all().iter().copied().find(|kind| kind.code() == code)
    }
}

/// The `{code, message}` shape crossing the RPC boundary.
#[derive(Serialize, Deserialize)]
struct WireError {
    code: i32,
    message: String,
}

impl Serialize for AuthError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireError {
            code: self.code(),
            message: self.message().to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AuthError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireError::deserialize(deserializer)?;
        AuthError::from_code(wire.code).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown auth error code: {}", wire.code))
        })
    }
}
