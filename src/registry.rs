//! Chain registry for CCTP v2 support
//!
//! Maps chain names to CCTP domain IDs and the protocol contract addresses
//! deployed on each chain. The registry is immutable configuration data:
//! built once, injected where needed, never mutated. The set of supported
//! chains is exactly the key set of the table.

use std::collections::HashMap;

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};

use crate::error::{Result, SolverError};
use crate::protocol::DomainId;

/// CCTP v2 TokenMessenger address, unified across all v2 mainnet chains
///
/// <https://developers.circle.com/cctp/evm-smart-contracts>
pub const CCTP_V2_TOKEN_MESSENGER_MAINNET: Address =
    address!("28b5a0e9C621a5BadaA536219b3a228C8168cf5d");

/// CCTP v2 MessageTransmitter address, unified across all v2 mainnet chains
///
/// <https://developers.circle.com/cctp/evm-smart-contracts>
pub const CCTP_V2_MESSAGE_TRANSMITTER_MAINNET: Address =
    address!("81D40F21F12A8F0E3252Bccb954D722d4c464B64");

/// <https://etherscan.io/address/0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48>
pub const ETHEREUM_USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// <https://snowtrace.io/address/0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E>
pub const AVALANCHE_USDC_ADDRESS: Address = address!("B97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E");

/// <https://basescan.org/address/0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913>
pub const BASE_USDC_ADDRESS: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");

/// Per-chain CCTP v2 configuration
///
/// The v2 protocol deploys unified TokenMessenger/MessageTransmitter
/// addresses across mainnet chains, but entries carry their own addresses so
/// a deployment can override them per chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEntry {
    pub chain: NamedChain,
    pub domain: DomainId,
    pub token_messenger: Address,
    pub message_transmitter: Address,
    pub usdc: Address,
}

impl ChainEntry {
    /// The chain's native chain id (distinct from the CCTP domain id)
    pub fn chain_id(&self) -> u64 {
        self.chain as u64
    }
}

/// Registry of chains supported by this handler
///
/// # Example
///
/// ```rust
/// use cctp_solver::ChainRegistry;
///
/// let registry = ChainRegistry::default();
/// assert!(registry.is_supported("base", "avalanche"));
/// assert!(!registry.is_supported("base", "dogechain"));
/// ```
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    entries: HashMap<NamedChain, ChainEntry>,
}

impl ChainRegistry {
    /// Builds a registry from explicit entries
    pub fn new(entries: impl IntoIterator<Item = ChainEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.chain, e)).collect(),
        }
    }

    /// Resolves a chain name to its registry entry
    ///
    /// Unknown or unparseable names resolve to `None`, never an error.
    pub fn resolve(&self, chain: &str) -> Option<&ChainEntry> {
        let chain: NamedChain = chain.parse().ok()?;
        self.entries.get(&chain)
    }

    /// Returns true iff both chains are present in the registry
    pub fn is_supported(&self, source_chain: &str, destination_chain: &str) -> bool {
        self.resolve(source_chain).is_some() && self.resolve(destination_chain).is_some()
    }

    /// Resolves a source/destination pair, failing with [`SolverError::UnsupportedChain`]
    /// (naming both chains) if either side is missing.
    pub fn require_pair(
        &self,
        source_chain: &str,
        destination_chain: &str,
    ) -> Result<(&ChainEntry, &ChainEntry)> {
        match (self.resolve(source_chain), self.resolve(destination_chain)) {
            (Some(source), Some(destination)) => Ok((source, destination)),
            _ => Err(SolverError::UnsupportedChain {
                source_chain: source_chain.to_string(),
                destination: destination_chain.to_string(),
            }),
        }
    }
}

impl Default for ChainRegistry {
    /// The built-in production registry: Ethereum mainnet, Avalanche, and
    /// Base, all with the unified v2 contract addresses.
    fn default() -> Self {
        Self::new([
            ChainEntry {
                chain: NamedChain::Mainnet,
                domain: DomainId::Ethereum,
                token_messenger: CCTP_V2_TOKEN_MESSENGER_MAINNET,
                message_transmitter: CCTP_V2_MESSAGE_TRANSMITTER_MAINNET,
                usdc: ETHEREUM_USDC_ADDRESS,
            },
            ChainEntry {
                chain: NamedChain::Avalanche,
                domain: DomainId::Avalanche,
                token_messenger: CCTP_V2_TOKEN_MESSENGER_MAINNET,
                message_transmitter: CCTP_V2_MESSAGE_TRANSMITTER_MAINNET,
                usdc: AVALANCHE_USDC_ADDRESS,
            },
            ChainEntry {
                chain: NamedChain::Base,
                domain: DomainId::Base,
                token_messenger: CCTP_V2_TOKEN_MESSENGER_MAINNET,
                message_transmitter: CCTP_V2_MESSAGE_TRANSMITTER_MAINNET,
                usdc: BASE_USDC_ADDRESS,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mainnet", "base")]
    #[case("base", "avalanche")]
    #[case("avalanche", "mainnet")]
    #[case("base", "base")]
    fn test_supported_pairs(#[case] source: &str, #[case] destination: &str) {
        let registry = ChainRegistry::default();
        assert!(registry.is_supported(source, destination));
    }

    #[rstest]
    #[case("base", "dogechain")]
    #[case("dogechain", "base")]
    #[case("optimism", "base")] // real chain, not in the default registry
    #[case("", "base")]
    #[case("not a chain", "also not a chain")]
    fn test_unsupported_pairs(#[case] source: &str, #[case] destination: &str) {
        let registry = ChainRegistry::default();
        assert!(!registry.is_supported(source, destination));
    }

    #[test]
    fn test_resolve_maps_domain_not_chain_id() {
        let registry = ChainRegistry::default();
        let base = registry.resolve("base").unwrap();

        assert_eq!(base.domain, DomainId::Base);
        assert_eq!(base.domain.as_u32(), 6);
        assert_eq!(base.chain_id(), 8453);
    }

    #[test]
    fn test_require_pair_names_both_chains() {
        let registry = ChainRegistry::default();
        let err = registry.require_pair("base", "dogechain").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("base"));
        assert!(message.contains("dogechain"));
    }

    #[test]
    fn test_custom_registry_substitution() {
        let registry = ChainRegistry::new([ChainEntry {
            chain: NamedChain::Optimism,
            domain: DomainId::Optimism,
            token_messenger: CCTP_V2_TOKEN_MESSENGER_MAINNET,
            message_transmitter: CCTP_V2_MESSAGE_TRANSMITTER_MAINNET,
            usdc: Address::ZERO,
        }]);

        assert!(registry.is_supported("optimism", "optimism"));
        assert!(!registry.is_supported("base", "optimism"));
    }

    #[test]
    fn test_unified_v2_addresses() {
        let registry = ChainRegistry::default();
        let mainnet = registry.resolve("mainnet").unwrap();
        let base = registry.resolve("base").unwrap();

        assert_eq!(mainnet.token_messenger, base.token_messenger);
        assert_eq!(mainnet.message_transmitter, base.message_transmitter);
        assert_ne!(mainnet.usdc, base.usdc);
    }
}
