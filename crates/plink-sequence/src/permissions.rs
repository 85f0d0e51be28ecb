//! Negotiated permissions of a settled channel.

use serde::{Deserialize, Serialize};

use crate::participant::Participant;

/// JSON-RPC rules a settled channel permits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcPermissions {
    /// Method names the controller may drive over this channel.
    pub methods: Vec<String>,
}

/// Permissions negotiated during the handshake.
///
/// The controller is the participant authorized to drive permission
/// changes; it is one of the two channel participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    /// Permitted JSON-RPC surface.
    pub jsonrpc: JsonRpcPermissions,
    /// The participant holding the controller role.
    pub controller: Participant,
}

impl Permissions {
    /// Permissions granting `methods` to the given controller.
    pub fn new(controller: Participant, methods: Vec<String>) -> Self {
        Self {
            jsonrpc: JsonRpcPermissions { methods },
            controller,
        }
    }
}
