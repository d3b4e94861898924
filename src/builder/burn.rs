//! Burn-side transaction construction
//!
//! A burn needs two transactions in a fixed order: an ERC-20 approval
//! authorizing the TokenMessenger, then the `depositForBurn` call itself.
//! On-chain the approval must be mined before the burn executes; the builder
//! guarantees production order only, execution order is the caller's
//! responsibility.

use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::calls;
use crate::error::Result;
use crate::proposal::{TransactionIntent, TransactionObject};
use crate::protocol::FinalityThreshold;
use crate::registry::ChainRegistry;

/// Maximum relayer fee for fast transfers, in USDC atomic units (0.0005 USDC)
pub const MAX_FAST_TRANSFER_FEE: U256 = U256::from_limbs([500, 0, 0, 0]);

/// A validated request to burn USDC on the source chain
///
/// The facade validates field presence, parses the amount and recipient, and
/// checks that the token is USDC before constructing this.
#[derive(Debug, Clone)]
pub struct BurnRequest {
    /// Human decimal amount, kept verbatim for the call descriptions
    pub amount: String,
    /// The same amount in USDC atomic units
    pub amount_units: U256,
    pub source_chain: String,
    pub destination_chain: String,
    pub source_address: String,
    pub recipient_address: Address,
    pub token: String,
}

/// Builds the ordered [approve, depositForBurn] transaction pair
#[derive(Debug, Clone, Copy)]
pub struct BurnTransactionBuilder<'a> {
    registry: &'a ChainRegistry,
}

impl<'a> BurnTransactionBuilder<'a> {
    pub fn new(registry: &'a ChainRegistry) -> Self {
        Self { registry }
    }

    /// Produces exactly two intents: the approval first, then the burn.
    ///
    /// # Errors
    ///
    /// Fails with [`SolverError::UnsupportedChain`] when either chain is
    /// outside the registry; no partial result is returned.
    ///
    /// [`SolverError::UnsupportedChain`]: crate::SolverError::UnsupportedChain
    pub fn build(&self, request: &BurnRequest) -> Result<Vec<TransactionIntent>> {
        let (source, destination) = self
            .registry
            .require_pair(&request.source_chain, &request.destination_chain)?;

        debug!(
            amount = %request.amount,
            source_chain = %request.source_chain,
            destination_domain = %destination.domain,
            event = "building_burn_transactions"
        );

        let approve = TransactionIntent {
            title: "CCTPv2 Approve".to_string(),
            call: format!(
                "Approving {}USDC on {} to be spent by CCTPv2",
                request.amount, request.source_chain
            ),
            transaction: TransactionObject::new(
                source.usdc,
                source.chain_id(),
                calls::encode_approve(source.token_messenger, request.amount_units),
            ),
        };

        // The destination is addressed by its CCTP domain id, never its chain id
        let burn = TransactionIntent {
            title: "CCTPv2 Burn".to_string(),
            call: format!(
                "Burning {}USDC on {} to {}",
                request.amount, request.source_chain, request.destination_chain
            ),
            transaction: TransactionObject::new(
                source.token_messenger,
                source.chain_id(),
                calls::encode_deposit_for_burn(
                    request.amount_units,
                    destination.domain,
                    request.recipient_address,
                    source.usdc,
                    MAX_FAST_TRANSFER_FEE,
                    FinalityThreshold::Fast,
                ),
            ),
        };

        Ok(vec![approve, burn])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use alloy_primitives::address;

    fn request() -> BurnRequest {
        BurnRequest {
            amount: "100".to_string(),
            amount_units: U256::from(100_000_000u64),
            source_chain: "base".to_string(),
            destination_chain: "avalanche".to_string(),
            source_address: "0x1234567890123456789012345678901234567890".to_string(),
            recipient_address: address!("0987654321098765432109876543210987654321"),
            token: "USDC".to_string(),
        }
    }

    #[test]
    fn test_produces_approve_then_burn() {
        let registry = ChainRegistry::default();
        let intents = BurnTransactionBuilder::new(&registry)
            .build(&request())
            .unwrap();

        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0].title, "CCTPv2 Approve");
        assert_eq!(intents[1].title, "CCTPv2 Burn");
    }

    #[test]
    fn test_call_descriptions_verbatim() {
        let registry = ChainRegistry::default();
        let intents = BurnTransactionBuilder::new(&registry)
            .build(&request())
            .unwrap();

        insta::assert_snapshot!(
            intents[0].call,
            @"Approving 100USDC on base to be spent by CCTPv2"
        );
        insta::assert_snapshot!(intents[1].call, @"Burning 100USDC on base to avalanche");
    }

    #[test]
    fn test_transactions_target_source_chain() {
        let registry = ChainRegistry::default();
        let base = *registry.resolve("base").unwrap();
        let intents = BurnTransactionBuilder::new(&registry)
            .build(&request())
            .unwrap();

        // Approval spends against the token, burn against the messenger,
        // both on the source chain
        assert_eq!(intents[0].transaction.to, base.usdc);
        assert_eq!(intents[1].transaction.to, base.token_messenger);
        for intent in &intents {
            assert_eq!(intent.transaction.chain_id, 8453);
            assert_eq!(intent.transaction.value, "0");
        }
    }

    #[test]
    fn test_unsupported_chain_fails_without_partial_result() {
        let registry = ChainRegistry::default();
        let mut bad = request();
        bad.destination_chain = "dogechain".to_string();

        let err = BurnTransactionBuilder::new(&registry)
            .build(&bad)
            .unwrap_err();

        assert!(matches!(err, SolverError::UnsupportedChain { .. }));
        assert!(err.to_string().contains("base"));
        assert!(err.to_string().contains("dogechain"));
    }
}
