//! # Pairing Sequence
//!
//! The lifecycle object of one pairing channel, from a received proposal
//! to a settled channel. A freshly parsed URI yields a
//! `Pending(Proposed)` sequence with a one-hour deadline; responding
//! extends the stage to one day; settlement to thirty days. Every
//! transition is an explicit call by the owning engine, which persists
//! the result through `plink-store` under the sequence topic.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use plink_core::{Expirable, Timestamp, Topic};

use crate::participant::Participant;
use crate::permissions::Permissions;
use crate::proposal::Proposal;
use crate::relay::RelayProtocolOptions;
use crate::state::{SequenceState, SettledStatus};
use crate::uri::PairingUri;

/// Pre-handshake payload of a pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingPending {
    /// The proposal this pairing was opened with.
    pub proposal: Proposal,
    /// Progress within the pending stage.
    pub status: PairingPendingStatus,
}

impl PairingPending {
    /// Whether the responder has already answered the proposal.
    pub fn is_responded(&self) -> bool {
        matches!(self.status, PairingPendingStatus::Responded(_))
    }
}

/// Progress of a pending pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PairingPendingStatus {
    /// Proposal received or minted, no response yet.
    Proposed,
    /// Responder answered; carries the settlement topic the response
    /// was published under.
    Responded(String),
}

/// Post-handshake payload of a pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingSettled {
    /// The other side of the channel.
    pub peer: Participant,
    /// Permissions negotiated during the handshake.
    pub permissions: Permissions,
    /// Opaque pairing state blob (app metadata and the like), owned by
    /// the layers above.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<serde_json::Value>,
    /// Settlement sub-status.
    pub status: SettledStatus,
}

/// One pairing channel keyed by its topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingSequence {
    topic: Topic,
    relay: RelayProtocolOptions,
    self_participant: Participant,
    expiry: Timestamp,
    state: SequenceState<PairingPending, PairingSettled>,
}

impl PairingSequence {
    /// Deadline for a freshly proposed pairing.
    pub fn ttl_proposed() -> Duration {
        Duration::hours(1)
    }

    /// Deadline for a pending (responded) pairing.
    pub fn ttl_pending() -> Duration {
        Duration::days(1)
    }

    /// Deadline for a settled pairing.
    pub fn ttl_settled() -> Duration {
        Duration::days(30)
    }

    /// Build a `Pending(Proposed)` pairing from a parsed URI.
    ///
    /// The self participant takes the proposer's public key and the
    /// expiry is one hour from `now`.
    pub fn build_proposed_from_uri_at(uri: &PairingUri, now: Timestamp) -> Self {
        let proposal = Proposal::from_uri(uri);
        let self_participant = Participant::new(proposal.proposer.public_key.clone());
        Self {
            topic: proposal.topic.clone(),
            relay: proposal.relay.clone(),
            self_participant,
            expiry: now.plus(Self::ttl_proposed()),
            state: SequenceState::Pending(PairingPending {
                proposal,
                status: PairingPendingStatus::Proposed,
            }),
        }
    }

    /// [`PairingSequence::build_proposed_from_uri_at`] against the
    /// current clock.
    pub fn build_proposed_from_uri(uri: &PairingUri) -> Self {
        Self::build_proposed_from_uri_at(uri, Timestamp::now())
    }

    /// A pairing in a known pending state with a caller-supplied expiry.
    pub fn from_pending(
        topic: Topic,
        relay: RelayProtocolOptions,
        self_participant: Participant,
        expiry: Timestamp,
        pending: PairingPending,
    ) -> Self {
        Self {
            topic,
            relay,
            self_participant,
            expiry,
            state: SequenceState::Pending(pending),
        }
    }

    /// A pairing in a known settled state with a caller-supplied expiry.
    pub fn from_settled(
        topic: Topic,
        relay: RelayProtocolOptions,
        self_participant: Participant,
        expiry: Timestamp,
        settled: PairingSettled,
    ) -> Self {
        Self {
            topic,
            relay,
            self_participant,
            expiry,
            state: SequenceState::Settled(settled),
        }
    }

    /// Relay options the channel runs over.
    pub fn relay(&self) -> &RelayProtocolOptions {
        &self.relay
    }

    /// Our side of the channel.
    pub fn self_participant(&self) -> &Participant {
        &self.self_participant
    }

    /// Our public key.
    pub fn public_key(&self) -> &str {
        &self.self_participant.public_key
    }

    /// The pending payload, or `None` once settled.
    pub fn pending(&self) -> Option<&PairingPending> {
        self.state.pending()
    }

    /// The settled payload, or `None` while pending.
    pub fn settled(&self) -> Option<&PairingSettled> {
        self.state.settled()
    }

    /// Whether the handshake has completed.
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// Consume the sequence, yielding its settled payload if the
    /// handshake has completed.
    ///
    /// Filtering a store enumeration down to established pairings is
    /// `get_all().into_iter().filter_map(PairingSequence::into_settled)`.
    pub fn into_settled(self) -> Option<PairingSettled> {
        match self.state {
            SequenceState::Pending(_) => None,
            SequenceState::Settled(settled) => Some(settled),
        }
    }

    /// Whether the peer holds the controller role. Meaningful only when
    /// settled; a pending pairing has no controller yet.
    pub fn peer_is_controller(&self) -> bool {
        self.settled()
            .map(|s| s.peer.public_key == s.permissions.controller.public_key)
            .unwrap_or(false)
    }

    /// Replace the payload with a pending one, clearing any settled
    /// payload. The expiry is untouched; stage deadlines move only
    /// through [`PairingSequence::set_expiry`].
    pub fn set_pending(&mut self, pending: PairingPending) {
        self.state = SequenceState::Pending(pending);
    }

    /// Replace the payload with a settled one, clearing any pending
    /// payload. The expiry is untouched.
    pub fn set_settled(&mut self, settled: PairingSettled) {
        self.state = SequenceState::Settled(settled);
    }

    /// Explicitly move the stage deadline. Called by the owning engine
    /// on a stage transition, never implicitly.
    pub fn set_expiry(&mut self, expiry: Timestamp) {
        self.expiry = expiry;
    }

    /// Rotate the topic (rekey). The engine persists the sequence under
    /// the new key via the store's rekeying update.
    pub fn set_topic(&mut self, topic: Topic) {
        self.topic = topic;
    }
}

impl Expirable for PairingSequence {
    fn topic(&self) -> &Topic {
        &self.topic
    }

    fn expiry(&self) -> Timestamp {
        self.expiry
    }
}
