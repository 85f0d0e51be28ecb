//! Handshake proposal: what one peer offers the other before settlement.

use serde::{Deserialize, Serialize};

use plink_core::Topic;

use crate::relay::RelayProtocolOptions;
use crate::uri::PairingUri;

/// The proposing side of a handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposer {
    /// Proposer's hex-encoded public key.
    pub public_key: String,
    /// Whether the proposer claims the controller role.
    pub controller: bool,
}

/// A channel proposal: topic, relay, and proposer identity.
///
/// For a pairing this is extracted from the out-of-band URI; for a
/// session it arrives over the already-settled pairing channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Topic the proposed channel will live under.
    pub topic: Topic,
    /// Relay the channel will run over.
    pub relay: RelayProtocolOptions,
    /// Identity of the proposing peer.
    pub proposer: Proposer,
}

impl Proposal {
    /// Extract the proposal carried by a pairing URI.
    pub fn from_uri(uri: &PairingUri) -> Self {
        Self {
            topic: uri.topic.clone(),
            relay: uri.relay.clone(),
            proposer: Proposer {
                public_key: uri.public_key.clone(),
                controller: uri.controller,
            },
        }
    }
}
