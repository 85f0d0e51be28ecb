//! # Error Types
//!
//! Top-level error type for the foundational crate. Downstream crates
//! define their own error enums (`StoreError`, `SignerError`, `UriError`)
//! and convert into this one only at a boundary that needs a single type.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Top-level error type for the Plink core crate.
#[derive(Error, Debug)]
pub enum PlinkError {
    /// A timestamp string could not be parsed as RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
