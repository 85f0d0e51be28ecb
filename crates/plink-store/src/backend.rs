//! # Key-Value Backend Contract
//!
//! The byte-level interface a storage medium must satisfy to back a
//! [`crate::SequenceStore`]. Keys are topic strings, values are opaque
//! serialized records.
//!
//! ## Contract
//!
//! - Each operation is individually atomic: a concurrent reader sees
//!   either the old value or the new one, never a torn write.
//! - `remove` of an absent key is a successful no-op.
//! - `entries` enumerates the backend's whole namespace; foreign or
//!   corrupt values may appear and are the caller's problem to skip.
//! - No ordering is implied across keys and no transaction spans keys.

use crate::error::StoreError;

/// A namespace of key → bytes, individually-atomic operations only.
///
/// Implementations must be safe to share across threads; the store holds
/// its backend behind an `Arc`.
pub trait KeyValueBackend: Send + Sync {
    /// Write `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Read the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Remove the value under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Enumerate every (key, value) pair in the namespace.
    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}
