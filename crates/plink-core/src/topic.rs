//! # Topic — Sequence Instance Identifier
//!
//! A topic is the opaque key naming exactly one pairing or session
//! sequence. Topics arriving from a peer are accepted as-is; topics
//! minted locally come from [`Topic::generate`] and are 32 random bytes
//! rendered as lowercase hex.
//!
//! ## Security Invariant
//!
//! A topic is a capability: knowing it is enough to address the channel.
//! Locally generated topics are drawn from the OS CSPRNG so they cannot
//! be guessed or enumerated.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Opaque identifier naming one pairing or session sequence.
///
/// Serializes transparently as its inner string, so persisted records
/// and wire payloads see a plain string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Wrap an externally supplied topic string.
    ///
    /// The value is opaque to this stack; no format is enforced beyond
    /// what the peer and the relay already agreed on.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh high-entropy topic: 32 bytes from the OS CSPRNG,
    /// rendered as 64 lowercase hex characters.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// View the topic as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Topic {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Topic {
    fn from(value: String) -> Self {
        Self(value)
    }
}
