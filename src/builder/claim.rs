//! Claim-side transaction construction
//!
//! Claiming waits on the attestation service, then submits the attested
//! message and signature verbatim to the destination chain's
//! MessageTransmitter via `receiveMessage`.

use tracing::debug;

use crate::attestation_client::AttestationClient;
use crate::calls;
use crate::error::Result;
use crate::proposal::{TransactionIntent, TransactionObject};
use crate::registry::ChainRegistry;
use crate::traits::{AttestationApi, Clock};

/// Builds the single claim transaction for an attested burn
#[derive(Debug, Clone, Copy)]
pub struct ClaimTransactionBuilder<'a, A: AttestationApi, C: Clock> {
    registry: &'a ChainRegistry,
    attestation_client: &'a AttestationClient<A, C>,
}

impl<'a, A: AttestationApi, C: Clock> ClaimTransactionBuilder<'a, A, C> {
    pub fn new(
        registry: &'a ChainRegistry,
        attestation_client: &'a AttestationClient<A, C>,
    ) -> Self {
        Self {
            registry,
            attestation_client,
        }
    }

    /// Produces exactly one intent carrying the `receiveMessage` call.
    ///
    /// Blocks (cooperatively) on attestation retrieval, which is bounded by
    /// the client's timeout window.
    ///
    /// # Errors
    ///
    /// Fails with [`SolverError::UnsupportedChain`] when either chain is
    /// outside the registry, or [`SolverError::AttestationTimeout`] when the
    /// attestation window elapses.
    ///
    /// [`SolverError::UnsupportedChain`]: crate::SolverError::UnsupportedChain
    /// [`SolverError::AttestationTimeout`]: crate::SolverError::AttestationTimeout
    pub async fn build(
        &self,
        source_chain: &str,
        destination_chain: &str,
        burn_tx_hash: &str,
    ) -> Result<Vec<TransactionIntent>> {
        let (source, destination) = self.registry.require_pair(source_chain, destination_chain)?;

        debug!(
            source_domain = %source.domain,
            destination_chain = %destination_chain,
            tx_hash = %burn_tx_hash,
            event = "building_claim_transaction"
        );

        let attestation = self
            .attestation_client
            .retrieve_attestation(source.domain, burn_tx_hash)
            .await?;

        Ok(vec![TransactionIntent {
            title: "CCTPv2 Claim".to_string(),
            call: format!("Claiming USDC on {destination_chain}"),
            transaction: TransactionObject::new(
                destination.message_transmitter,
                destination.chain_id(),
                calls::encode_receive_message(&attestation.message, &attestation.attestation),
            ),
        }])
    }
}
