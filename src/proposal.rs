//! Outward proposal types
//!
//! A proposal is the handler's answer to the dispatch framework: parallel,
//! index-aligned arrays of titles, human-readable call descriptions, and raw
//! transaction objects. Intents are produced once and serialized; nothing
//! mutates them afterwards.

use alloy_primitives::{Address, Bytes};
use serde::Serialize;

/// A raw transaction ready to be signed and submitted by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionObject {
    /// Always "0"; CCTP calls never transfer native value
    pub value: String,
    pub to: Address,
    pub chain_id: u64,
    pub data: Bytes,
}

impl TransactionObject {
    pub fn new(to: Address, chain_id: u64, data: Bytes) -> Self {
        Self {
            value: "0".to_string(),
            to,
            chain_id,
            data,
        }
    }
}

/// A single proposed transaction with its human-readable framing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionIntent {
    pub title: String,
    pub call: String,
    pub transaction: TransactionObject,
}

/// The proposal shape returned to the dispatch framework
///
/// `titles`, `calls`, and `transactions` are index-aligned 1:1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub to_chain: String,
    pub description: String,
    pub titles: Vec<String>,
    pub calls: Vec<String>,
    pub transactions: Vec<TransactionObject>,
}

impl ProposalResponse {
    /// Assembles a proposal from intents, splitting them into the parallel
    /// arrays the framework expects.
    pub fn from_intents(
        to_chain: impl Into<String>,
        description: impl Into<String>,
        intents: Vec<TransactionIntent>,
    ) -> Self {
        let mut titles = Vec::with_capacity(intents.len());
        let mut calls = Vec::with_capacity(intents.len());
        let mut transactions = Vec::with_capacity(intents.len());
        for intent in intents {
            titles.push(intent.title);
            calls.push(intent.call);
            transactions.push(intent.transaction);
        }
        Self {
            to_chain: to_chain.into(),
            description: description.into(),
            titles,
            calls,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address};

    #[test]
    fn test_transaction_object_serialization() {
        let tx = TransactionObject::new(
            address!("28b5a0e9C621a5BadaA536219b3a228C8168cf5d"),
            8453,
            Bytes::from(vec![0xde, 0xad]),
        );

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["value"], "0");
        assert_eq!(json["chainId"], 8453);
        assert_eq!(json["data"], "0xdead");
        assert_eq!(
            json["to"],
            "0x28b5a0e9c621a5badaa536219b3a228c8168cf5d"
        );
    }

    #[test]
    fn test_from_intents_keeps_arrays_aligned() {
        let intents = vec![
            TransactionIntent {
                title: "CCTPv2 Approve".to_string(),
                call: "first".to_string(),
                transaction: TransactionObject::new(Address::ZERO, 1, Bytes::new()),
            },
            TransactionIntent {
                title: "CCTPv2 Burn".to_string(),
                call: "second".to_string(),
                transaction: TransactionObject::new(Address::ZERO, 1, Bytes::new()),
            },
        ];

        let proposal = ProposalResponse::from_intents("avalanche", "Bridge", intents);
        assert_eq!(proposal.titles, vec!["CCTPv2 Approve", "CCTPv2 Burn"]);
        assert_eq!(proposal.calls, vec!["first", "second"]);
        assert_eq!(proposal.transactions.len(), 2);
        assert_eq!(proposal.to_chain, "avalanche");
    }
}
