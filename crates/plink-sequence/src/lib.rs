//! # plink-sequence — Pairing and Session State Machines
//!
//! The lifecycle value types for a peer-to-peer channel keyed by topic.
//! A *pairing* precedes and authorizes one or more *sessions*; both kinds
//! share the same shape and the same lifecycle:
//!
//! ```text
//! Pending(Proposed) ──respond──▶ Pending(Responded) ──settle──▶ Settled
//!        │                              │                          │
//!        └── expiry: 1 hour             └── expiry: 1 day          └── expiry: 30 days
//! ```
//!
//! ## Invariants
//!
//! - Exactly one of Pending/Settled is live per sequence. The payload is
//!   a sum type ([`SequenceState`]), so holding both is unrepresentable.
//! - Expiry moves forward only on an explicit stage transition performed
//!   by the owning engine. Nothing here transitions on its own when a
//!   deadline passes; expiry is a caller-checked predicate and an
//!   expired sequence is removed by a caller-driven delete.
//! - Pending → Settled happens only by explicit assignment once the
//!   handshake material (peer participant, permissions) is known,
//!   optionally under a rotated topic.
//!
//! ## Modules
//!
//! - [`uri`]: the `wc:{topic}@{version}?...` pairing URI parser.
//! - [`proposal`]: the handshake proposal extracted from a URI.
//! - [`pairing`] / [`session`]: the two sequence kinds.
//! - [`state`] / [`permissions`] / [`relay`] / [`participant`]: shared
//!   payload types.

pub mod pairing;
pub mod participant;
pub mod permissions;
pub mod proposal;
pub mod relay;
pub mod session;
pub mod state;
pub mod uri;

pub use pairing::{PairingPending, PairingPendingStatus, PairingSequence, PairingSettled};
pub use participant::Participant;
pub use permissions::{JsonRpcPermissions, Permissions};
pub use proposal::{Proposal, Proposer};
pub use relay::RelayProtocolOptions;
pub use session::{SessionPending, SessionPendingStatus, SessionSequence, SessionSettled};
pub use state::{SequenceState, SettledStatus};
pub use uri::{PairingUri, UriError};
