//! # plink-auth — Control-Message Authentication
//!
//! Authenticates off-channel control messages with detached signatures
//! bound to an address. Three pieces:
//!
//! - [`Signer`]: the injected low-level capability (byte-level sign and
//!   validity check). This crate never implements curve math itself;
//!   [`Ed25519Signer`] is the default capability over `ed25519-dalek`.
//! - [`MessageSigner`]: the service layer — UTF-8 message bytes in, hex
//!   signature out, and strict boolean verification against an address.
//! - [`AuthError`]: the fixed kind/code/message table shared with the
//!   remote peer. The integer code is the wire identity; the message is
//!   advisory text only.
//!
//! ## Concurrency
//!
//! All operations are stateless with respect to call history; the
//! service is safe to call concurrently whenever the injected signer is.

pub mod ed25519;
pub mod error;
mod hex;
pub mod signer;

pub use ed25519::Ed25519Signer;
pub use error::AuthError;
pub use signer::{MessageSigner, Signer, SignerError};
