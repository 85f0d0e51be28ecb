//! # Sequence Payload Sum Type
//!
//! The exclusive Pending/Settled payload shared by both sequence kinds.
//! Modeled as an enum rather than two nullable fields, so "both live at
//! once" and "neither live" are unrepresentable; assigning one variant
//! necessarily clears the other.

use serde::{Deserialize, Serialize};

/// Exactly one live lifecycle payload: pre-handshake or post-handshake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceState<P, S> {
    /// Pre-handshake payload.
    Pending(P),
    /// Post-handshake payload.
    Settled(S),
}

impl<P, S> SequenceState<P, S> {
    /// The pending payload, or `None` when settled.
    pub fn pending(&self) -> Option<&P> {
        match self {
            Self::Pending(pending) => Some(pending),
            Self::Settled(_) => None,
        }
    }

    /// The settled payload, or `None` while pending.
    pub fn settled(&self) -> Option<&S> {
        match self {
            Self::Pending(_) => None,
            Self::Settled(settled) => Some(settled),
        }
    }

    /// Whether the settled variant is live.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }
}

/// Sub-status of a settled sequence.
///
/// Carried as data only; no transition logic hangs off it in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettledStatus {
    /// Settlement written locally, peer acknowledgement outstanding.
    PreSettled,
    /// Peer has acknowledged the settlement.
    Acknowledged,
}
