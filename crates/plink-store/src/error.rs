//! # Store Error Types
//!
//! Errors surfaced by the write path of the store. The read path swallows
//! failures by contract (see the crate docs) and never returns these.

use thiserror::Error;

/// Error in store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing medium rejected or failed the operation.
    #[error("backend error: {0}")]
    Backend(String),

    /// Filesystem IO failed (on-disk backend).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The state value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
