//! # Pairing URI
//!
//! Parses and renders the out-of-band pairing URI a proposer hands to a
//! responder (QR code, deep link):
//!
//! ```text
//! wc:{topic}@{version}?controller={bool}&publicKey={hex}&relay-protocol={name}
//! ```
//!
//! Query items beyond the known three are ignored, so an older responder
//! still parses a URI minted by a newer proposer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use plink_core::Topic;

use crate::relay::RelayProtocolOptions;

const SCHEME: &str = "wc";
const PARAM_CONTROLLER: &str = "controller";
const PARAM_PUBLIC_KEY: &str = "publicKey";
const PARAM_RELAY_PROTOCOL: &str = "relay-protocol";

/// Error parsing a pairing URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The URI does not start with `wc:`.
    #[error("pairing uri must use the `wc:` scheme")]
    InvalidScheme,

    /// The `{topic}@{version}` head is malformed.
    #[error("malformed pairing uri head: {0:?}")]
    MalformedHead(String),

    /// The protocol version is not a number.
    #[error("invalid protocol version: {0:?}")]
    InvalidVersion(String),

    /// A required query parameter is absent.
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),

    /// A query parameter is present but unparseable.
    #[error("invalid query parameter {name}: {value:?}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// A parsed pairing URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingUri {
    /// Topic of the proposed pairing.
    pub topic: Topic,
    /// Protocol version (currently 2).
    pub version: u32,
    /// Proposer's hex-encoded public key.
    pub public_key: String,
    /// Whether the proposer claims the controller role.
    pub controller: bool,
    /// Relay the channel will run over.
    pub relay: RelayProtocolOptions,
}

impl PairingUri {
    /// Assemble a URI from its parts.
    pub fn new(
        topic: Topic,
        version: u32,
        public_key: impl Into<String>,
        controller: bool,
        relay: RelayProtocolOptions,
    ) -> Self {
        Self {
            topic,
            version,
            public_key: public_key.into(),
            controller,
            relay,
        }
    }

    /// Parse a `wc:` pairing URI string.
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let rest = uri
            .strip_prefix(SCHEME)
            .and_then(|r| r.strip_prefix(':'))
            .ok_or(UriError::InvalidScheme)?;

        let (head, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (topic, version) = head
            .split_once('@')
            .ok_or_else(|| UriError::MalformedHead(head.to_string()))?;
        if topic.is_empty() {
            return Err(UriError::MalformedHead(head.to_string()));
        }
        let version: u32 = version
            .parse()
            .map_err(|_| UriError::InvalidVersion(version.to_string()))?;

        let mut public_key = None;
        let mut controller = None;
        let mut relay_protocol = None;
        for item in query.split('&').filter(|i| !i.is_empty()) {
            let (name, value) = item.split_once('=').unwrap_or((item, ""));
            match name {
                PARAM_PUBLIC_KEY => public_key = Some(value.to_string()),
                PARAM_CONTROLLER => {
                    controller = Some(value.parse::<bool>().map_err(|_| {
                        UriError::InvalidParameter {
                            name: PARAM_CONTROLLER,
                            value: value.to_string(),
                        }
                    })?);
                }
                PARAM_RELAY_PROTOCOL => relay_protocol = Some(value.to_string()),
                // Unknown items are ignored for forward compatibility.
                _ => {}
            }
        }

        Ok(Self {
            topic: Topic::new(topic),
            version,
            public_key: public_key.ok_or(UriError::MissingParameter(PARAM_PUBLIC_KEY))?,
            controller: controller.ok_or(UriError::MissingParameter(PARAM_CONTROLLER))?,
            relay: RelayProtocolOptions::new(
                relay_protocol.ok_or(UriError::MissingParameter(PARAM_RELAY_PROTOCOL))?,
            ),
        })
    }
}

impl std::fmt::Display for PairingUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SCHEME}:{}@{}?{PARAM_CONTROLLER}={}&{PARAM_PUBLIC_KEY}={}&{PARAM_RELAY_PROTOCOL}={}",
            self.topic, self.version, self.controller, self.public_key, self.relay.protocol
        )
    }
}
