//! # Expiry Contract
//!
//! Every sequence carries an absolute expiry date computed at a stage
//! transition (creation + TTL). Nothing in this workspace acts on the
//! deadline by itself: expiry is a predicate the owning engine checks,
//! and an expired sequence is removed by that engine through a normal
//! delete, never by a hidden self-transition.

use crate::{Timestamp, Topic};

/// A keyed record with an absolute expiry date.
///
/// Implemented by both sequence kinds so engine-level cleanup can sweep
/// any store of expirable records generically.
pub trait Expirable {
    /// The topic keying this record.
    fn topic(&self) -> &Topic;

    /// The absolute expiry date of the current stage.
    fn expiry(&self) -> Timestamp;

    /// Whether the record is past its expiry date at `now`.
    ///
    /// A record expires strictly after its deadline; `now == expiry`
    /// is still valid.
    fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expiry()
    }
}
