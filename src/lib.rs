//! CCTP v2 proposal handler for USDC bridging.
//!
//! This crate turns user bridge intents into executable transaction
//! proposals over Circle's Cross-Chain Transfer Protocol v2, the
//! burn-and-mint protocol behind native USDC transfers. It covers both
//! halves of a transfer:
//!
//! - **Bridge**: an ERC-20 approval followed by a `depositForBurn` on the
//!   source chain's TokenMessenger.
//! - **Claim**: polling Circle's Iris attestation service for the burn's
//!   attestation, then a `receiveMessage` on the destination chain's
//!   MessageTransmitter.
//!
//! The crate builds calldata only. Signing, submission, gas, and nonce
//! management belong to the execution layer consuming the proposals.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use cctp_solver::providers::{IrisApi, TokioClock};
//! use cctp_solver::{AttestationClient, Message, ProtocolFacade};
//!
//! # async fn example(message: Message) -> Result<(), cctp_solver::SolverError> {
//! let facade = ProtocolFacade::builder()
//!     .attestation_client(
//!         AttestationClient::builder()
//!             .api(IrisApi::production()?)
//!             .clock(TokioClock::new())
//!             .build(),
//!     )
//!     .build();
//!
//! match facade.validate_and_build_proposal(&message).await? {
//!     Some(proposal) => println!("{}", serde_json::to_string(&proposal)?),
//!     None => println!("not a CCTPv2 message"),
//! }
//! # Ok(())
//! # }
//! ```

mod attestation_client;
mod builder;
mod calls;
mod error;
mod facade;
mod message;
mod proposal;
mod protocol;
pub mod providers;
mod registry;
pub mod testing;
mod traits;
pub mod units;

pub use attestation_client::{AttestationClient, ATTESTATION_TIMEOUT, POLL_INTERVAL};
pub use builder::{BurnRequest, BurnTransactionBuilder, ClaimTransactionBuilder, MAX_FAST_TRANSFER_FEE};
pub use error::{Result, SolverError};
pub use facade::{ProtocolFacade, AVAILABLE_PROTOCOLS};
pub use message::{Message, MessageBody};
pub use proposal::{ProposalResponse, TransactionIntent, TransactionObject};
pub use protocol::{
    Attestation, AttestationStatus, DomainId, FinalityThreshold, V2AttestationResponse, V2Message,
};
pub use registry::{ChainEntry, ChainRegistry};
pub use traits::{AttestationApi, Clock};
