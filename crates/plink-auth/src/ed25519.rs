//! # Default Ed25519 Signer Capability
//!
//! Implements the [`Signer`] capability over `ed25519-dalek`.
//!
//! - Private key: the 32-byte Ed25519 seed.
//! - Address: the lowercase hex of the 32-byte verifying key. Verifying
//!   against an address means parsing it back into the verifying key and
//!   checking the signature under it.
//!
//! Private key bytes are never logged or serialized by this module.

use ed25519_dalek::{Signer as DalekSigner, Verifier};
use rand::RngCore;

use crate::hex;
use crate::signer::{Signer, SignerError};

const SEED_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

/// Stateless Ed25519 capability for [`crate::MessageSigner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Signer;

impl Ed25519Signer {
    /// Generate a fresh 32-byte private key seed from the OS CSPRNG.
    pub fn generate_private_key() -> [u8; SEED_LEN] {
        let mut seed = [0u8; SEED_LEN];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        seed
    }

    /// The address bound to `private_key`: lowercase hex of its
    /// verifying key.
    pub fn address(private_key: &[u8]) -> Result<String, SignerError> {
        let signing_key = signing_key_from(private_key)?;
        Ok(hex::encode(signing_key.verifying_key().as_bytes()))
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>, SignerError> {
        let signing_key = signing_key_from(private_key)?;
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    fn is_valid(
        &self,
        signature: &[u8],
        message: &[u8],
        address: &str,
    ) -> Result<bool, SignerError> {
        let signature: [u8; SIGNATURE_LEN] = signature.try_into().map_err(|_| {
            SignerError::Encoding(format!(
                "signature must be {SIGNATURE_LEN} bytes, got {}",
                signature.len()
            ))
        })?;
        let verifying_key = verifying_key_from(address)?;
        let signature = ed25519_dalek::Signature::from_bytes(&signature);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}

fn signing_key_from(private_key: &[u8]) -> Result<ed25519_dalek::SigningKey, SignerError> {
    let seed: [u8; SEED_LEN] = private_key.try_into().map_err(|_| {
        SignerError::Encoding(format!(
            "private key must be {SEED_LEN} bytes, got {}",
            private_key.len()
        ))
    })?;
    Ok(ed25519_dalek::SigningKey::from_bytes(&seed))
}

fn verifying_key_from(address: &str) -> Result<ed25519_dalek::VerifyingKey, SignerError> {
    let bytes = hex::decode(address).map_err(SignerError::Encoding)?;
    let bytes: [u8; SEED_LEN] = bytes.as_slice().try_into().map_err(|_| {
        SignerError::Encoding(format!("address must be {} hex chars", SEED_LEN * 2))
    })?;
    ed25519_dalek::VerifyingKey::from_bytes(&bytes)
        .map_err(|e| SignerError::Encoding(format!("address is not a valid public key: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::MessageSigner;

    #[test]
    fn test_address_is_64_hex_chars() {
        let key = Ed25519Signer::generate_private_key();
        let address = Ed25519Signer::address(&key).unwrap();
        assert_eq!(address.len(), 64);
        assert!(address.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_address_is_deterministic() {
        let seed = [42u8; 32];
        assert_eq!(
            Ed25519Signer::address(&seed).unwrap(),
            Ed25519Signer::address(&seed).unwrap()
        );
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let key = Ed25519Signer::generate_private_key();
        let address = Ed25519Signer::address(&key).unwrap();
        let service = MessageSigner::new(Ed25519Signer);

        let signature = service.sign("session settle request", &key).unwrap();
        assert_eq!(signature.len(), 128);
        service
            .verify(&signature, "session settle request", &address)
            .unwrap();
    }

    #[test]
    fn test_tampered_message_fails() {
        let key = Ed25519Signer::generate_private_key();
        let address = Ed25519Signer::address(&key).unwrap();
        let service = MessageSigner::new(Ed25519Signer);

        let signature = service.sign("original", &key).unwrap();
        assert_eq!(
            service.verify(&signature, "tampered", &address),
            Err(SignerError::ValidationFailed)
        );
    }

    #[test]
    fn test_wrong_address_fails() {
        let key = Ed25519Signer::generate_private_key();
        let other = Ed25519Signer::generate_private_key();
        let other_address = Ed25519Signer::address(&other).unwrap();
        let service = MessageSigner::new(Ed25519Signer);

        let signature = service.sign("message", &key).unwrap();
        assert_eq!(
            service.verify(&signature, "message", &other_address),
            Err(SignerError::ValidationFailed)
        );
    }

    #[test]
    fn test_short_private_key_is_encoding_error() {
        let service = MessageSigner::new(Ed25519Signer);
        assert!(matches!(
            service.sign("message", &[1, 2, 3]),
            Err(SignerError::Encoding(_))
        ));
    }

    #[test]
    fn test_malformed_address_is_encoding_error() {
        let key = Ed25519Signer::generate_private_key();
        let service = MessageSigner::new(Ed25519Signer);
        let signature = service.sign("message", &key).unwrap();
        assert!(matches!(
            service.verify(&signature, "message", "not-an-address"),
            Err(SignerError::Encoding(_))
        ));
    }

    #[test]
    fn test_wrong_length_signature_is_encoding_error() {
        let key = Ed25519Signer::generate_private_key();
        let address = Ed25519Signer::address(&key).unwrap();
        let signer = Ed25519Signer;
        assert!(matches!(
            signer.is_valid(&[0u8; 10], b"message", &address),
            Err(SignerError::Encoding(_))
        ));
    }
}
