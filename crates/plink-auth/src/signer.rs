//! # Message Signer Service
//!
//! Produces and validates detached signatures over UTF-8 text messages.
//! The byte-level cryptography is an injected [`Signer`] capability; this
//! layer owns only the text-to-bytes and bytes-to-hex conversions and the
//! strict verification outcome.
//!
//! Messages are signed as their UTF-8 bytes. A Rust `&str` is UTF-8 by
//! construction, so text encoding cannot fail here; the
//! [`SignerError::Encoding`] variant covers the inputs that can still be
//! malformed: hex signatures, keys, and addresses.

use thiserror::Error;

use crate::hex;

/// Failure of a signing or verification operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// An input could not be decoded into the required byte form
    /// (malformed hex, wrong key or signature length). Non-retryable;
    /// the caller supplied bad data.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The cryptographic validity check returned false: tampered
    /// message, wrong key, or wrong address. Non-retryable.
    #[error("signature validation failed")]
    ValidationFailed,

    /// The underlying signer capability failed internally.
    #[error("signer capability error: {0}")]
    Capability(String),
}

/// Low-level signing capability, injected into [`MessageSigner`].
///
/// Implementations wrap an external cryptographic library; this crate
/// never implements curve math itself.
pub trait Signer {
    /// Produce a detached signature over `message` with `private_key`.
    fn sign(&self, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// Whether `signature` over `message` is valid for `address`.
    fn is_valid(
        &self,
        signature: &[u8],
        message: &[u8],
        address: &str,
    ) -> Result<bool, SignerError>;
}

/// Detached-signature service over an injected [`Signer`].
///
/// Stateless with respect to call history; safe for concurrent use as
/// long as the injected capability is.
#[derive(Debug, Clone, Default)]
pub struct MessageSigner<S> {
    signer: S,
}

impl<S: Signer> MessageSigner<S> {
    /// Build the service over a signer capability.
    pub fn new(signer: S) -> Self {
        Self { signer }
    }

    /// Sign the UTF-8 bytes of `message` and return the signature as
    /// lowercase hex.
    pub fn sign(&self, message: &str, private_key: &[u8]) -> Result<String, SignerError> {
        let signature = self.signer.sign(message.as_bytes(), private_key)?;
        Ok(hex::encode(&signature))
    }

    /// Verify a hex-encoded detached signature over `message` against
    /// `address`.
    ///
    /// Strict boolean outcome: `Ok(())` on validity, otherwise
    /// [`SignerError::ValidationFailed`] (or [`SignerError::Encoding`]
    /// when the signature hex does not decode). There is no partial
    /// trust.
    pub fn verify(
        &self,
        signature: &str,
        message: &str,
        address: &str,
    ) -> Result<(), SignerError> {
        let signature_bytes = hex::decode(signature).map_err(SignerError::Encoding)?;
        if self
            .signer
            .is_valid(&signature_bytes, message.as_bytes(), address)?
        {
            Ok(())
        } else {
            Err(SignerError::ValidationFailed)
        }
    }
}
