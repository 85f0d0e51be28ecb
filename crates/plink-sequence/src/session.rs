//! # Session Sequence
//!
//! The session twin of [`crate::pairing`]. A session is proposed over an
//! already-settled pairing rather than out-of-band, so there is no URI
//! constructor here; the proposal arrives as protocol payload and the
//! engine builds the sequence with an explicit expiry. The lifecycle,
//! exclusivity invariant, and TTL table are the same as for pairings.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use plink_core::{Expirable, Timestamp, Topic};

use crate::participant::Participant;
use crate::permissions::Permissions;
use crate::proposal::Proposal;
use crate::relay::RelayProtocolOptions;
use crate::state::{SequenceState, SettledStatus};

/// Pre-handshake payload of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPending {
    /// The proposal this session was opened with.
    pub proposal: Proposal,
    /// Progress within the pending stage.
    pub status: SessionPendingStatus,
}

impl SessionPending {
    /// Whether the responder has already answered the proposal.
    pub fn is_responded(&self) -> bool {
        matches!(self.status, SessionPendingStatus::Responded)
    }
}

/// Progress of a pending session.
///
/// Unlike a pairing response, a session response is published on the
/// proposal topic itself, so the responded status carries no extra
/// settlement topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPendingStatus {
    /// Proposal received, no response yet.
    Proposed,
    /// Responder answered, settlement outstanding.
    Responded,
}

/// Post-handshake payload of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettled {
    /// The other side of the channel.
    pub peer: Participant,
    /// Permissions negotiated during the handshake.
    pub permissions: Permissions,
    /// Opaque session state blob (accounts and the like), owned by the
    /// layers above.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<serde_json::Value>,
    /// Settlement sub-status.
    pub status: SettledStatus,
}

/// One session channel keyed by its topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSequence {
    topic: Topic,
    relay: RelayProtocolOptions,
    self_participant: Participant,
    expiry: Timestamp,
    state: SequenceState<SessionPending, SessionSettled>,
}

impl SessionSequence {
    /// Deadline for a freshly proposed session.
    pub fn ttl_proposed() -> Duration {
        Duration::hours(1)
    }

    /// Deadline for a pending (responded) session.
    pub fn ttl_pending() -> Duration {
        Duration::days(1)
    }

    /// Deadline for a settled session.
    pub fn ttl_settled() -> Duration {
        Duration::days(30)
    }

    /// A session in a known pending state with a caller-supplied expiry.
    pub fn from_pending(
        topic: Topic,
        relay: RelayProtocolOptions,
        self_participant: Participant,
        expiry: Timestamp,
        pending: SessionPending,
    ) -> Self {
        Self {
            topic,
            relay,
            self_participant,
            expiry,
            state: SequenceState::Pending(pending),
        }
    }

    /// A session in a known settled state with a caller-supplied expiry.
    pub fn from_settled(
        topic: Topic,
        relay: RelayProtocolOptions,
        self_participant: Participant,
        expiry: Timestamp,
        settled: SessionSettled,
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
    pub fn pending(&self) -> Option<&SessionPending> {
        self.state.pending()
    }

    /// The settled payload, or `None` while pending.
    pub fn settled(&self) -> Option<&SessionSettled> {
        self.state.settled()
    }

    /// Whether the handshake has completed.
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// Consume the sequence, yielding its settled payload if the
    /// handshake has completed.
    pub fn into_settled(self) -> Option<SessionSettled> {
        match self.state {
            SequenceState::Pending(_) => None,
            SequenceState::Settled(settled) => Some(settled),
        }
    }

    /// Whether the peer holds the controller role. Meaningful only when
    /// settled.
    pub fn peer_is_controller(&self) -> bool {
        self.settled()
            .map(|s| s.peer.public_key == s.permissions.controller.public_key)
            .unwrap_or(false)
    }

    /// Replace the payload with a pending one, clearing any settled
    /// payload.
    pub fn set_pending(&mut self, pending: SessionPending) {
        self.state = SequenceState::Pending(pending);
    }

    /// Replace the payload with a settled one, clearing any pending
    /// payload.
    pub fn set_settled(&mut self, settled: SessionSettled) {
        self.state = SequenceState::Settled(settled);
    }

    /// Explicitly move the stage deadline.
    pub fn set_expiry(&mut self, expiry: Timestamp) {
        self.expiry = expiry;
    }

    /// Rotate the topic (rekey).
    pub fn set_topic(&mut self, topic: Topic) {
        self.topic = topic;
    }
}

impl Expirable for SessionSequence {
    fn topic(&self) -> &Topic {
        &self.topic
    }

    fn expiry(&self) -> Timestamp {
        self.expiry
    }
}
