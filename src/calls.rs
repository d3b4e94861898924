//! Calldata encoding for the CCTP v2 contract calls
//!
//! The proposal carries raw, wire-ready calldata; nothing here touches an
//! RPC provider. Bindings are generated with `sol!` for the three calls the
//! protocol needs: ERC-20 `approve`, `depositForBurn` (v2, 7 arguments), and
//! `receiveMessage`.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};

use crate::protocol::{DomainId, FinalityThreshold};

sol! {
    function approve(address spender, uint256 amount) external returns (bool);

    function depositForBurn(
        uint256 amount,
        uint32 destinationDomain,
        bytes32 mintRecipient,
        address burnToken,
        bytes32 destinationCaller,
        uint256 maxFee,
        uint32 minFinalityThreshold
    ) external;

    function receiveMessage(bytes calldata message, bytes calldata attestation) external;
}

/// Encodes an ERC-20 approval authorizing `spender` for `amount`
pub fn encode_approve(spender: Address, amount: U256) -> Bytes {
    approveCall { spender, amount }.abi_encode().into()
}

/// Encodes a v2 `depositForBurn` call
///
/// The recipient is left-padded to 32 bytes; the destination caller is the
/// zero word, meaning any address may relay the claim.
pub fn encode_deposit_for_burn(
    amount: U256,
    destination_domain: DomainId,
    mint_recipient: Address,
    burn_token: Address,
    max_fee: U256,
    min_finality_threshold: FinalityThreshold,
) -> Bytes {
    depositForBurnCall {
        amount,
        destinationDomain: destination_domain.as_u32(),
        mintRecipient: mint_recipient.into_word(),
        burnToken: burn_token,
        destinationCaller: B256::ZERO,
        maxFee: max_fee,
        minFinalityThreshold: min_finality_threshold.as_u32(),
    }
    .abi_encode()
    .into()
}

/// Encodes a `receiveMessage` call from attested message bytes
pub fn encode_receive_message(message: &Bytes, attestation: &Bytes) -> Bytes {
    receiveMessageCall {
        message: message.clone(),
        attestation: attestation.clone(),
    }
    .abi_encode()
    .into()
}
