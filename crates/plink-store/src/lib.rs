//! # plink-store — Keyed Persistence for Sequences
//!
//! Persists serialized sequence state under its topic. Two layers:
//!
//! - [`KeyValueBackend`]: the byte-level contract a storage medium must
//!   satisfy (set, get, remove, enumerate). [`MemoryBackend`] and
//!   [`FileBackend`] are the interchangeable implementations; platform
//!   secure storage would slot in behind the same trait.
//!
//! - [`SequenceStore`]: generic CRUD over any serde-serializable state
//!   type, one instance per record kind, injected with its backend at
//!   construction. There is no process-wide default store.
//!
//! ## Lenient Reads
//!
//! A record that is absent, unreadable, or undecodable reads as `None`.
//! Corruption never takes the store down; it is counted through
//! [`SequenceStore::decode_failures`] and logged at `warn` so the loss
//! stays observable.
//!
//! ## Atomicity
//!
//! Single-key operations are atomic at the backend boundary; there are
//! no cross-key transactions. A rekeying [`SequenceStore::update`] is
//! delete-then-create and can lose the record if interrupted between
//! the two steps.

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use backend::KeyValueBackend;
pub use error::StoreError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::SequenceStore;
