//! Relay transport options carried through proposals and sequences.
//!
//! The relay itself is an external transport; this stack only carries
//! its negotiated options opaquely so both peers keep addressing the
//! same relay for the lifetime of the channel.

use serde::{Deserialize, Serialize};

/// Options naming the relay protocol a channel runs over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayProtocolOptions {
    /// Relay protocol identifier (e.g. `waku`).
    pub protocol: String,
    /// Protocol-specific parameters, opaque to this stack.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub params: Option<Vec<String>>,
}

impl RelayProtocolOptions {
    /// Options for `protocol` with no extra parameters.
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            params: None,
        }
    }
}
