//! # Generic Sequence Store
//!
//! CRUD over one kind of serialized record, keyed by topic. The store is
//! generic over the state type, so pairing and session sequences share
//! one implementation instead of duplicating it per kind.
//!
//! ## Lenient Reads
//!
//! `get` and `get_all` report an unreadable or undecodable record as
//! absent. A store shared with older software versions (or scribbled on
//! by another process) keeps serving the records it can still decode.
//! Every swallowed decode failure increments a counter and emits a
//! `warn` event, so the data loss is observable without changing the
//! read contract.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use plink_core::Topic;

use crate::backend::KeyValueBackend;
use crate::error::StoreError;

/// Persistent store for one record kind, keyed by topic.
///
/// Holds no state beyond the injected backend handle and the diagnostic
/// counter; operations on distinct topics need no coordination.
pub struct SequenceStore<T> {
    backend: Arc<dyn KeyValueBackend>,
    decode_failures: Arc<AtomicU64>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for SequenceStore<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            decode_failures: Arc::clone(&self.decode_failures),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> SequenceStore<T> {
    /// Create a store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            decode_failures: Arc::new(AtomicU64::new(0)),
            _marker: PhantomData,
        }
    }

    /// Serialize `state` and write it under `topic`, silently
    /// overwriting any existing record for that key.
    pub fn create(&self, topic: &Topic, state: &T) -> Result<(), StoreError> {
        debug!(topic = %topic, "storing sequence record");
        let bytes = serde_json::to_vec(state)?;
        self.backend.set(topic.as_str(), &bytes)
    }

    /// Read the record under `topic`.
    ///
    /// Returns `None` when the key is absent, the backend read fails, or
    /// the stored bytes do not decode as `T`. Decode failures are counted
    /// but never surfaced as errors.
    pub fn get(&self, topic: &Topic) -> Option<T> {
        let bytes = match self.backend.get(topic.as_str()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(topic = %topic, error = %e, "backend read failed, treating record as absent");
                return None;
            }
        };
        self.decode(topic.as_str(), &bytes)
    }

    /// Enumerate every record in the namespace that decodes as `T`.
    ///
    /// Corrupt and foreign entries are skipped. A backend that cannot
    /// enumerate at all yields an empty list.
    pub fn get_all(&self) -> Vec<T> {
        let entries = match self.backend.entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "backend enumeration failed, yielding no records");
                return Vec::new();
            }
        };
        entries
            .iter()
            .filter_map(|(key, bytes)| self.decode(key, bytes))
            .collect()
    }

    /// Replace the record, optionally moving it to `new_topic`.
    ///
    /// With `new_topic` this is delete(topic) followed by
    /// create(new_topic); the two steps are **not atomic** and a crash
    /// between them loses the record. Without `new_topic` it behaves as
    /// [`SequenceStore::create`].
    pub fn update(
        &self,
        topic: &Topic,
        new_topic: Option<&Topic>,
        state: &T,
    ) -> Result<(), StoreError> {
        match new_topic {
            Some(new_topic) => {
                self.delete(topic)?;
                self.create(new_topic, state)
            }
            None => self.create(topic, state),
        }
    }

    /// Remove the record under `topic`. Absent records are a no-op.
    pub fn delete(&self, topic: &Topic) -> Result<(), StoreError> {
        debug!(topic = %topic, "deleting sequence record");
        self.backend.remove(topic.as_str())
    }

    /// Number of decode failures swallowed by reads so far.
    pub fn decode_failures(&self) -> u64 {
        self.decode_failures.load(Ordering::Relaxed)
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> Option<T> {
        match serde_json::from_slice(bytes) {
            Ok(state) => Some(state),
            Err(e) => {
                self.decode_failures.fetch_add(1, Ordering::Relaxed);
                warn!(key, error = %e, "undecodable record treated as absent");
                None
            }
        }
    }
}
