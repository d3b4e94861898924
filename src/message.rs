//! Inbound intent message contract
//!
//! The dispatch framework delivers validated intent messages; this handler
//! only reads the fields it needs and returns `None` when anything required
//! for the selected operation is missing.

use serde::Deserialize;

/// An intent message delivered by the dispatch framework
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub reply_to: Option<String>,
    pub body: MessageBody,
}

/// Message body fields consumed by this handler
///
/// All fields are optional at this layer; each operation validates the
/// presence of what it needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    /// Operation selector ("BRIDGE", "CLAIM", ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Protocols the sender will accept; empty or absent means any
    #[serde(default)]
    pub protocols: Option<Vec<String>>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub from_token: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub from_chain: Option<String>,
    #[serde(default)]
    pub recipient_chain: Option<String>,
    #[serde(default)]
    pub recipient_address: Option<String>,
    /// Burn transaction hash, required for claims
    #[serde(default)]
    pub transaction_hash: Option<String>,
}
