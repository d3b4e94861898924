//! Protocol facade: message validation and proposal assembly
//!
//! The dispatch framework fans each intent message out to candidate
//! handlers; this facade decides whether the message is ours. Missing or
//! invalid fields make the handler bow out with `Ok(None)` so another
//! handler can try. Explicit protocol violations, such as an unsupported
//! chain pair or an expired attestation window, are hard errors instead.

use bon::Builder;
use tracing::debug;

use crate::attestation_client::AttestationClient;
use crate::builder::{BurnRequest, BurnTransactionBuilder, ClaimTransactionBuilder};
use crate::error::Result;
use crate::message::Message;
use crate::proposal::ProposalResponse;
use crate::registry::ChainRegistry;
use crate::traits::{AttestationApi, Clock};
use crate::units;

/// Protocol names this handler answers to (case-insensitive)
pub const AVAILABLE_PROTOCOLS: [&str; 2] = ["cctp", "cctpv2"];

/// Entry point for the CCTP v2 handler
///
/// # Example
///
/// ```rust,no_run
/// use cctp_solver::providers::{IrisApi, TokioClock};
/// use cctp_solver::{AttestationClient, Message, ProtocolFacade};
///
/// # async fn example(message: Message) -> Result<(), cctp_solver::SolverError> {
/// let facade = ProtocolFacade::builder()
///     .attestation_client(
///         AttestationClient::builder()
///             .api(IrisApi::production()?)
///             .clock(TokioClock::new())
///             .build(),
///     )
///     .build();
///
/// if let Some(proposal) = facade.validate_and_build_proposal(&message).await? {
///     println!("{}", serde_json::to_string(&proposal)?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct ProtocolFacade<A: AttestationApi, C: Clock> {
    #[builder(default)]
    registry: ChainRegistry,
    attestation_client: AttestationClient<A, C>,
}

impl<A: AttestationApi, C: Clock> ProtocolFacade<A, C> {
    /// Returns the chain registry in use
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Validates an intent message and builds a proposal for it, or `None`
    /// when the message is not for this handler.
    pub async fn validate_and_build_proposal(
        &self,
        message: &Message,
    ) -> Result<Option<ProposalResponse>> {
        let body = &message.body;

        if let Some(protocols) = body.protocols.as_deref() {
            if !protocols.is_empty()
                && !protocols
                    .iter()
                    .any(|p| AVAILABLE_PROTOCOLS.contains(&p.to_lowercase().as_str()))
            {
                debug!(protocols = ?protocols, event = "no_matching_protocol");
                return Ok(None);
            }
        }

        let Some(from_chain) = body.from_chain.as_deref() else {
            debug!(event = "missing_from_chain");
            return Ok(None);
        };
        if self.registry.resolve(from_chain).is_none() {
            debug!(from_chain = %from_chain, event = "unknown_from_chain");
            return Ok(None);
        }

        match body.kind.as_deref().map(str::to_uppercase).as_deref() {
            Some("BRIDGE") => self.validate_and_build_bridge(message).await,
            Some("CLAIM") => self.validate_and_build_claim(message).await,
            other => {
                debug!(message_type = ?other, event = "unsupported_message_type");
                Ok(None)
            }
        }
    }

    /// Builds the burn-side proposal, or `None` on any validation gap.
    pub async fn validate_and_build_bridge(
        &self,
        message: &Message,
    ) -> Result<Option<ProposalResponse>> {
        let body = &message.body;

        let (Some(amount), Some(from_token), Some(from_address), Some(from_chain), Some(recipient_chain)) = (
            body.amount.as_deref(),
            body.from_token.as_deref(),
            body.from_address.as_deref(),
            body.from_chain.as_deref(),
            body.recipient_chain.as_deref(),
        ) else {
            debug!(event = "missing_bridge_fields");
            return Ok(None);
        };

        // USDC-only handler; other tokens belong to other handlers
        if !from_token.eq_ignore_ascii_case("usdc")
            || !self.registry.is_supported(from_chain, recipient_chain)
        {
            debug!(
                from_token = %from_token,
                from_chain = %from_chain,
                recipient_chain = %recipient_chain,
                event = "not_applicable_for_cctpv2"
            );
            return Ok(None);
        }

        let Some(recipient_address) = body
            .recipient_address
            .as_deref()
            .and_then(|a| a.parse().ok())
        else {
            debug!(event = "missing_or_invalid_recipient_address");
            return Ok(None);
        };

        let amount_units = match units::parse_usdc(amount) {
            Ok(units) => units,
            Err(e) => {
                debug!(amount = %amount, error = %e, event = "invalid_amount");
                return Ok(None);
            }
        };

        let request = BurnRequest {
            amount: amount.to_string(),
            amount_units,
            source_chain: from_chain.to_string(),
            destination_chain: recipient_chain.to_string(),
            source_address: from_address.to_string(),
            recipient_address,
            token: from_token.to_string(),
        };

        let intents = BurnTransactionBuilder::new(&self.registry).build(&request)?;

        Ok(Some(ProposalResponse::from_intents(
            recipient_chain,
            "Bridge",
            intents,
        )))
    }

    /// Builds the claim-side proposal.
    ///
    /// A missing burn transaction hash is a validation gap (`None`); an
    /// unsupported chain pair on an explicit claim request is a hard error.
    pub async fn validate_and_build_claim(
        &self,
        message: &Message,
    ) -> Result<Option<ProposalResponse>> {
        let body = &message.body;

        let Some(transaction_hash) = body.transaction_hash.as_deref() else {
            debug!(event = "missing_transaction_hash");
            return Ok(None);
        };

        let from_chain = body.from_chain.as_deref().unwrap_or_default();
        let recipient_chain = body.recipient_chain.as_deref().unwrap_or_default();

        let claim_builder = ClaimTransactionBuilder::new(&self.registry, &self.attestation_client);
        let intents = claim_builder
            .build(from_chain, recipient_chain, transaction_hash)
            .await?;

        Ok(Some(ProposalResponse::from_intents(
            recipient_chain,
            "Claim CCTPv2",
            intents,
        )))
    }
}
